mod app;
mod cli;
mod config;
mod orchestrator;
mod state;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins when set. The GUI logs at debug by default; the CLI only
/// logs warnings unless `--verbose`, and always to stderr so stdout stays
/// parseable.
fn init_logging(cli: &Cli) {
    let default_filter = match (&cli.command, cli.output.verbose) {
        (None, _) => "vemu_launcher=debug,info",
        (Some(_), true) => "vemu_launcher=debug,warn",
        (Some(_), false) => "warn",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_gui() -> Result<()> {
    tracing::info!("Starting VEMU launcher");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([760.0, 680.0])
        .with_min_inner_size([520.0, 420.0])
        .with_title("VEMU Orchestrator UI");

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        "VEMU Launcher",
        native_options,
        Box::new(|cc| Ok(Box::new(app::LauncherApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let Some(command) = cli.command else {
        return run_gui();
    };

    if let Err(e) = cli::run(command, &cli.output).await {
        cli::print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
