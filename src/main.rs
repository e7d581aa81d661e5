#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! navmenu — merge navigation menu definitions and export the resulting tree.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, OutputCtx, write_error};
use navmenu::types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    let ctx = OutputCtx::new(
        cli.output,
        cli.json,
        cli.fields.as_deref(),
        cli.no_header,
        cli.ties.into(),
    );

    match commands::dispatch(&cli.command, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_menu_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}

/// Install the stderr log subscriber.
///
/// `--debug` forces `navmenu=debug`; otherwise `RUST_LOG` applies, falling
/// back to warnings only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("navmenu=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
