pub mod error;
pub mod model;
pub mod output;
pub mod resolve;
pub mod states;
pub mod unique;

use colored::Colorize;

pub use error::{InputError, OutputError};
pub use model::{SourceCollection, SourceRecord, load_collection, parse_collection};
pub use resolve::{ResolveOptions, execute_resolve, generate_resolve_summary};
pub use states::{StateMapping, build_state_map, extract_trailing_token};
pub use unique::{check_unique, duplicate_ids};

const BANNER: &str = r#"
  ┌─┐┌─┐┬─┐┌┬┐┬─┐┌─┐┬┌┬┐
  ├─┘│ │├┬┘ │ ├┬┘├─┤│ │
  ┴  └─┘┴└─ ┴ ┴└─┴ ┴┴ ┴
"#;

pub fn print_banner() {
    println!("{}", BANNER.bright_cyan().bold());
    println!(
        "  {} {}\n",
        "legislator portrait resolver".bright_white(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
