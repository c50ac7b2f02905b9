pub mod commands;
pub mod handlers;
pub mod logging;

// Re-export commonly used handler functions for convenience
pub use handlers::{expand_path, handle_resolve, handle_states, handle_unique};
