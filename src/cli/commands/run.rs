//! Headless simulation launch

use anyhow::Result;
use clap::Args;

use crate::cli::output::{OutputFormat, print_success};
use crate::config::Config;
use crate::orchestrator::{OrchestratorClient, SimulationRequest};
use crate::state::{LaunchState, ResultPanel};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Orchestrator base URL (defaults to backend.base_url from config)
    #[arg(long)]
    pub backend_url: Option<String>,

    /// App package to launch (defaults to simulation.app_package_id from config)
    #[arg(long)]
    pub package: Option<String>,
}

pub async fn run(args: RunArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let config = Config::load()?;
    let base_url = args.backend_url.unwrap_or(config.backend.base_url);
    let package = args.package.unwrap_or(config.simulation.app_package_id);

    if format == OutputFormat::Text {
        print_success(&format!("Orchestrating {} via {}...", package, base_url), quiet);
    }

    let client = OrchestratorClient::new(&base_url)?;
    let state = launch(&client, SimulationRequest::new(package)).await;

    match state {
        LaunchState::Success(result) => {
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(result.value())?);
                }
                OutputFormat::Text => {
                    let view = LaunchState::Success(result).view();
                    if let Some(panel) = view.result_panel {
                        println!("{}", render_result(&panel));
                    }
                }
            }
            Ok(())
        }
        LaunchState::Failure(message) => anyhow::bail!(message),
        LaunchState::Idle | LaunchState::Loading => {
            anyhow::bail!("Launch did not settle")
        }
    }
}

/// Issue one launch request and settle it
pub async fn launch(client: &OrchestratorClient, request: SimulationRequest) -> LaunchState {
    tracing::debug!("Launching {} against {}", request.app_package_id, client.base_url());
    LaunchState::settled(client.run_simulation(&request).await)
}

/// Plain-text rendering of a result panel
pub fn render_result(panel: &ResultPanel) -> String {
    let mut lines = vec![panel.title.to_string()];

    if let Some(message) = &panel.message {
        lines.push(message.clone());
    }
    for (label, value) in &panel.highlights {
        lines.push(format!("{}: {}", label, value));
    }
    lines.push(String::new());
    lines.push(panel.dump.clone());

    lines.join("\n")
}
