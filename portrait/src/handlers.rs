use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use portrait_core::model::{SourceCollection, load_collection, select_records};
use portrait_core::output::{to_json_string, write_json};
use portrait_core::resolve::{ResolveOptions, execute_resolve, generate_resolve_summary};
use portrait_core::states::build_state_map;
use portrait_core::unique::{check_unique, duplicate_ids};
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Expand a leading `~` in a user-supplied path
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

fn load_input(args: &ArgMatches) -> Result<(PathBuf, SourceCollection)> {
    let input = args
        .get_one::<PathBuf>("input")
        .map(|p| expand_path(p))
        .context("--input is required")?;
    let records = load_collection(&input)
        .with_context(|| format!("Cannot load records from {}", input.display()))?;
    debug!("Loaded {} record(s) from {}", records.len(), input.display());
    Ok((input, records))
}

/// Fold the `resolve` arguments into run options
pub fn resolve_options_from_args(args: &ArgMatches, quiet: bool) -> ResolveOptions {
    let defaults = ResolveOptions::default();
    ResolveOptions {
        threads: args.get_one::<usize>("threads").copied().unwrap_or(defaults.threads),
        limit: args.get_one::<usize>("limit").copied(),
        base_url: args
            .get_one::<Url>("base-url")
            .map(|u| u.as_str().to_string())
            .unwrap_or(defaults.base_url),
        selector: args
            .get_one::<String>("selector")
            .cloned()
            .unwrap_or(defaults.selector),
        timeout_secs: args
            .get_one::<u64>("timeout")
            .copied()
            .unwrap_or(defaults.timeout_secs),
        show_progress: !quiet,
    }
}

pub async fn handle_resolve(args: &ArgMatches, quiet: bool) -> Result<()> {
    let (input, records) = load_input(args)?;
    let output = args
        .get_one::<PathBuf>("output")
        .map(|p| expand_path(p))
        .context("--output is required")?;
    let options = resolve_options_from_args(args, quiet);
    let attempted = select_records(&records, options.limit).len();

    if !quiet {
        println!(
            "{} Loaded {} record(s) from {}",
            "✓".green().bold(),
            records.len().to_string().cyan(),
            input.display().to_string().bright_white()
        );
        println!("Resolving: {}", attempted);
        println!("Workers: {}", options.threads);
        println!("Base URL: {}", options.base_url);
        println!("Selector: {}\n", options.selector);
    }

    let report = execute_resolve(&records, &options, None)
        .await
        .context("Cannot start resolver")?;

    write_json(&output, &report.mapping)
        .with_context(|| format!("Cannot write results to {}", output.display()))?;

    print!("{}", generate_resolve_summary(&report, attempted));
    println!(
        "\n{} Wrote {} portrait URL(s) to {}",
        "✓".green().bold(),
        report.mapping.len().to_string().cyan(),
        output.display().to_string().bright_white()
    );
    Ok(())
}

pub fn handle_unique(args: &ArgMatches) -> Result<()> {
    let (_, records) = load_input(args)?;

    let unique = check_unique(&records);
    println!("{}", unique);
    if !unique {
        for id in duplicate_ids(&records) {
            println!("  {} duplicate id: {}", "⚠".yellow(), id);
        }
    }
    Ok(())
}

pub fn handle_states(args: &ArgMatches) -> Result<()> {
    let (_, records) = load_input(args)?;
    let states = build_state_map(&records);

    match args.get_one::<PathBuf>("output").map(|p| expand_path(p)) {
        Some(output) => {
            write_json(&output, &states)
                .with_context(|| format!("Cannot write states to {}", output.display()))?;
            println!(
                "{} Wrote {} state(s) to {}",
                "✓".green().bold(),
                states.len().to_string().cyan(),
                output.display().to_string().bright_white()
            );
        }
        None => print!("{}", to_json_string(&states)?),
    }
    Ok(())
}
