use std::env;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod clipboard;
mod exits;
mod logging;
mod settings;
mod terminal;
mod tui;

use cli::Cli;

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();
    logging::init();

    let bare = env::args_os().len() == 1;
    let flags = Cli::parse();

    if flags.interactive || (bare && terminal::is_interactive()) {
        if let Err(e) = tui::run(flags.seed) {
            tracing::error!("{e:#}");
            return ExitCode::FAILURE;
        }
    } else {
        cli::run(flags);
    }
    ExitCode::SUCCESS
}
