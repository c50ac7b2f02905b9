use portrait::commands::command_argument_builder;
use portrait::handlers::{handle_resolve, handle_states, handle_unique};
use portrait::logging::init_logging;
use portrait_core::print_banner;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");
    let verbose = chosen_command.get_flag("verbose");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    init_logging(verbose);

    let outcome = match chosen_command.subcommand() {
        Some(("resolve", primary_command)) => handle_resolve(primary_command, quiet).await,
        Some(("unique", primary_command)) => handle_unique(primary_command),
        Some(("states", primary_command)) => handle_states(primary_command),
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = outcome {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}
