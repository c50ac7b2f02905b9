use crate::error::{Result, ScanError};
use crate::result::{ArtifactEntry, RecordFailure, ResolveReport};
use crate::target::ProfileTarget;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_BASE_ORIGIN: &str = "https://www.govtrack.us";
pub const DEFAULT_MARKER_SELECTOR: &str = "img.img-fluid";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Called once per record as it completes: `(id, Some(artifact_url))` on
/// success, `(id, None)` on failure.
pub type ProgressCallback = Arc<dyn Fn(&str, Option<&str>) + Send + Sync>;

/// CSS selector for the element that carries the portrait.
#[derive(Debug, Clone)]
pub struct Marker {
    css: String,
    selector: Selector,
}

impl Marker {
    pub fn parse(css: &str) -> Result<Self> {
        let selector = Selector::parse(css)
            .map_err(|e| ScanError::InvalidSelector(format!("{}: {}", css, e)))?;
        Ok(Self {
            css: css.to_string(),
            selector,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.css
    }
}

pub struct Resolver {
    client: Client,
    base_origin: String,
    marker: Marker,
    progress_callback: Option<ProgressCallback>,
}

impl Resolver {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("portrait/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            base_origin: DEFAULT_BASE_ORIGIN.to_string(),
            marker: Marker::parse(DEFAULT_MARKER_SELECTOR)?,
            progress_callback: None,
        })
    }

    pub fn with_base_origin(mut self, origin: &str) -> Result<Self> {
        let parsed = Url::parse(origin)
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", origin, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(ScanError::InvalidUrl(format!("{}: not a base origin", origin)));
        }
        self.base_origin = origin.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn with_selector(mut self, css: &str) -> Result<Self> {
        self.marker = Marker::parse(css)?;
        Ok(self)
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn base_origin(&self) -> &str {
        &self.base_origin
    }

    /// Resolve every target, fetching at most `workers` pages at once.
    ///
    /// Outcomes are committed in input order whatever the degree of
    /// parallelism, so a duplicated id always ends up with its last record's
    /// URL. Failed records are listed in the report and never reach the
    /// mapping.
    pub async fn resolve(&self, targets: &[ProfileTarget], workers: usize) -> ResolveReport {
        let workers = workers.max(1);
        info!(
            "Resolving {} profile(s) with {} worker(s), marker '{}'",
            targets.len(),
            workers,
            self.marker.as_str()
        );

        let mut outcomes = std::pin::pin!(
            stream::iter(targets)
                .map(move |target| async move { (target, self.resolve_one(target).await) })
                .buffered(workers)
        );

        let mut report = ResolveReport::new();
        while let Some((target, outcome)) = outcomes.next().await {
            match outcome {
                Ok(entry) => {
                    debug!("{} -> {}", entry.id, entry.artifact_url);
                    if let Some(ref callback) = self.progress_callback {
                        callback(&entry.id, Some(&entry.artifact_url));
                    }
                    report.insert(entry);
                }
                Err(e) => {
                    warn!("Skipping {} ({}): {}", target.id, target.profile_url, e);
                    if let Some(ref callback) = self.progress_callback {
                        callback(&target.id, None);
                    }
                    report.failures.push(RecordFailure {
                        id: target.id.clone(),
                        profile_url: target.profile_url.clone(),
                        kind: e.kind(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Resolved {} of {} profile(s), {} failed",
            report.mapping.len(),
            targets.len(),
            report.failures.len()
        );
        report
    }

    /// Fetch one profile page and turn its marker image into an absolute URL.
    pub async fn resolve_one(&self, target: &ProfileTarget) -> Result<ArtifactEntry> {
        if target.id.trim().is_empty() {
            return Err(ScanError::EmptyId);
        }

        let body = self.fetch_page(&target.profile_url).await?;
        let src = extract_source(&body, &self.marker)?;
        let artifact_url = resolve_source(&self.base_origin, &src)?;

        Ok(ArtifactEntry {
            id: target.id.clone(),
            artifact_url,
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// The `src` of the first element matching `marker`, trimmed.
pub fn extract_source(html: &str, marker: &Marker) -> Result<String> {
    let document = Html::parse_document(html);
    let element = document
        .select(&marker.selector)
        .next()
        .ok_or_else(|| ScanError::MissingMarker(marker.css.clone()))?;

    match element.value().attr("src").map(str::trim) {
        Some(src) if !src.is_empty() => Ok(src.to_string()),
        _ => Err(ScanError::MissingAttribute),
    }
}

/// Join a root-relative `src` onto `base_origin` by plain concatenation.
///
/// Absolute and protocol-relative sources are rejected rather than
/// concatenated, as are paths that do not start at the root.
pub fn resolve_source(base_origin: &str, src: &str) -> Result<String> {
    if src.starts_with("//") || Url::parse(src).is_ok() {
        return Err(ScanError::AbsoluteSource(src.to_string()));
    }
    if !src.starts_with('/') {
        return Err(ScanError::RelativeSource(src.to_string()));
    }

    let artifact_url = format!("{}{}", base_origin.trim_end_matches('/'), src);
    Url::parse(&artifact_url)
        .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", artifact_url, e)))?;

    Ok(artifact_url)
}
