use crate::result::FailureKind;
use thiserror::Error;

/// Per-record failure while resolving a profile page to its portrait URL.
///
/// None of these abort a run: the resolver records them and moves on.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Record has an empty id")]
    EmptyId,

    #[error("No element matching '{0}' in page")]
    MissingMarker(String),

    #[error("Marker element has no usable src attribute")]
    MissingAttribute,

    #[error("Image source is already absolute: {0}")]
    AbsoluteSource(String),

    #[error("Image source is not root-relative: {0}")]
    RelativeSource(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

impl ScanError {
    /// Whether the page never arrived or arrived without a usable portrait.
    pub fn kind(&self) -> FailureKind {
        match self {
            ScanError::HttpError(_) | ScanError::HttpStatus { .. } => FailureKind::Fetch,
            _ => FailureKind::Parse,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
