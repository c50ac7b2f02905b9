pub mod error;
pub mod resolver;
pub mod result;
pub mod target;

pub use error::ScanError;
pub use resolver::{Marker, ProgressCallback, Resolver};
pub use result::{ArtifactEntry, FailureKind, RecordFailure, ResolveReport, ResultMapping};
pub use target::ProfileTarget;
