use crate::model::{SourceRecord, select_records};
use indicatif::{ProgressBar, ProgressStyle};
use portrait_scanner::resolver::{
    DEFAULT_BASE_ORIGIN, DEFAULT_MARKER_SELECTOR, DEFAULT_TIMEOUT_SECS,
};
use portrait_scanner::{ProfileTarget, ResolveReport, Resolver, ScanError};
use std::sync::Arc;
use std::time::Duration;

/// Options for configuring a resolve run
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub threads: usize,
    pub limit: Option<usize>,
    pub base_url: String,
    pub selector: String,
    pub timeout_secs: u64,
    pub show_progress: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            threads: 1,
            limit: None,
            base_url: DEFAULT_BASE_ORIGIN.to_string(),
            selector: DEFAULT_MARKER_SELECTOR.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            show_progress: false,
        }
    }
}

/// Callback for reporting each resolved record as it comes in
pub type ResolveResultCallback = Arc<dyn Fn(&str, Option<&str>) + Send + Sync>;

/// Resolve the selected records to portrait URLs.
///
/// Only a bad base URL, selector or HTTP client setup makes this fail; records
/// that cannot be resolved end up in `ResolveReport::failures`.
pub async fn execute_resolve(
    records: &[SourceRecord],
    options: &ResolveOptions,
    result_callback: Option<ResolveResultCallback>,
) -> Result<ResolveReport, ScanError> {
    let selected = select_records(records, options.limit);
    let targets: Vec<ProfileTarget> = selected.iter().map(SourceRecord::target).collect();
    let total = targets.len();

    let progress_bar = if options.show_progress {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Resolving...");
        Some(Arc::new(pb))
    } else {
        None
    };

    let pb_clone = progress_bar.clone();
    let progress_callback: portrait_scanner::ProgressCallback =
        Arc::new(move |id: &str, url: Option<&str>| {
            if let Some(ref pb) = pb_clone {
                pb.inc(1);
                pb.set_message(id.to_string());
            }
            if let Some(ref cb) = result_callback {
                cb(id, url);
            }
        });

    let resolver = Resolver::with_timeout(options.timeout_secs)?
        .with_base_origin(&options.base_url)?
        .with_selector(&options.selector)?
        .with_progress_callback(progress_callback);

    let report = resolver.resolve(&targets, options.threads).await;

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!(
            "Done! {} resolved, {} failed",
            report.mapping.len(),
            report.failures.len()
        ));
    }

    Ok(report)
}

/// Generate a plain-text summary of a resolve run
pub fn generate_resolve_summary(report: &ResolveReport, attempted: usize) -> String {
    let mut summary = String::new();
    summary.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    summary.push_str("# Summary:\n");
    summary.push_str(&format!("  Records attempted: {}\n", attempted));
    summary.push_str(&format!("  Portraits resolved: {}\n", report.mapping.len()));
    summary.push_str(&format!("  Records failed: {}\n", report.failures.len()));

    if !report.failures.is_empty() {
        summary.push_str("\n## Failures\n");
        for failure in &report.failures {
            summary.push_str(&format!(
                "  [{}] {} {}\n    {}\n",
                failure.kind.as_str(),
                failure.id,
                failure.profile_url,
                failure.reason
            ));
        }
    }

    summary
}
