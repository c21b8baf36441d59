//! gatelaunch CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gatelaunch::cli::{Cli, CommandDispatcher, LaunchContext};
use gatelaunch::launch::{EntryPointRegistry, Launcher};
use gatelaunch::ui::{ErrorPresenter, Locale, TerminalPresenter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gatelaunch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gatelaunch=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gatelaunch starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let locale = cli
        .locale
        .as_deref()
        .map(Locale::from_tag)
        .unwrap_or_else(Locale::detect);
    let mut ui = TerminalPresenter::new(locale);

    let context = LaunchContext::new(std::env::current_dir().unwrap_or_default())
        .with_manifest(cli.manifest.clone())
        .with_runtime_version(cli.runtime_version.clone());
    let dispatcher =
        CommandDispatcher::new(context, Launcher::new(EntryPointRegistry::with_builtins()));

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            if e.requested_exit().is_none() {
                ui.error(&format!("Error: {}", e));
            }
            ExitCode::from(e.exit_code())
        }
    }
}
