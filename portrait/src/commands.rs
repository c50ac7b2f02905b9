use clap::{arg, command};
use portrait_core::model::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use portrait_scanner::resolver::{DEFAULT_BASE_ORIGIN, DEFAULT_MARKER_SELECTOR};
use std::path::PathBuf;
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

fn input_arg() -> clap::Arg {
    arg!(-i --"input" <PATH>)
        .required(false)
        .help("JSON dump of legislator records (top-level 'objects' array)")
        .value_parser(clap::value_parser!(PathBuf))
        .default_value(DEFAULT_INPUT_PATH)
}

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("portrait")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("portrait")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and progress output").required(false))
        .arg(arg!(-v --"verbose" "Log per-record debug output to stderr").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("resolve")
                .about(
                    "Fetch each legislator's profile page and write an id to portrait URL \
                map as JSON.",
                )
                .arg(input_arg())
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Where to write the id to portrait URL map")
                        .value_parser(clap::value_parser!(PathBuf))
                        .default_value(DEFAULT_OUTPUT_PATH),
                )
                .arg(
                    arg!(-t --"threads" <NUM_WORKERS>)
                        .required(false)
                        .help("How many profile pages to fetch at once")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("1"),
                )
                .arg(
                    arg!(-l --"limit" <COUNT>)
                        .required(false)
                        .help("Only resolve the first COUNT records")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"base-url" <URL>)
                        .required(false)
                        .help("Origin that image sources are concatenated onto")
                        .value_parser(clap::value_parser!(Url))
                        .default_value(DEFAULT_BASE_ORIGIN),
                )
                .arg(
                    arg!(--"selector" <CSS>)
                        .required(false)
                        .help("CSS selector of the portrait image element")
                        .default_value(DEFAULT_MARKER_SELECTOR),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Per-request timeout in seconds")
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .default_value("10"),
                ),
        )
        .subcommand(
            command!("unique")
                .about("Check that no two records share a bioguide id")
                .arg(input_arg()),
        )
        .subcommand(
            command!("states")
                .about("Map each state code to the last word of its senators' description")
                .arg(input_arg())
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write the map here instead of printing it")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}
