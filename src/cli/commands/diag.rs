//! Diagnostic and connectivity commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{OutputFormat, print_formatted, status_line};
use crate::config::Config;
use crate::orchestrator::{OrchestratorClient, SIMULATIONS_PATH};

#[derive(Subcommand, Debug)]
pub enum DiagCommands {
    /// Show data paths and the launch endpoint
    Paths,

    /// Check config and backend reachability
    Check,
}

#[derive(Serialize)]
struct PathsResult {
    config_file: String,
    launch_endpoint: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    config_exists: bool,
    base_url: String,
    base_url_valid: bool,
    backend_reachable: bool,
    /// Health endpoint answer, or the error that prevented one
    backend_detail: String,
}

impl CheckResult {
    fn to_text(&self) -> String {
        [
            status_line(self.config_exists, "Config file exists"),
            status_line(
                self.base_url_valid,
                &format!("Base URL is valid ({})", self.base_url),
            ),
            status_line(
                self.backend_reachable,
                &format!("Backend reachable: {}", self.backend_detail),
            ),
        ]
        .join("\n")
    }
}

pub async fn run(command: DiagCommands, format: OutputFormat, _quiet: bool) -> Result<()> {
    match command {
        DiagCommands::Paths => paths(format),
        DiagCommands::Check => check(format).await,
    }
}

fn paths(format: OutputFormat) -> Result<()> {
    let config = Config::load().unwrap_or_default();

    let result = PathsResult {
        config_file: Config::config_path()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| "<error>".to_string()),
        launch_endpoint: format!(
            "{}{}",
            config.backend.base_url.trim_end_matches('/'),
            SIMULATIONS_PATH
        ),
    };

    print_formatted(&result, format, |r| {
        format!(
            "Config file:      {}\nLaunch endpoint:  POST {}",
            r.config_file, r.launch_endpoint
        )
    });

    Ok(())
}

async fn check(format: OutputFormat) -> Result<()> {
    let config_exists = Config::config_path().is_ok_and(|p| p.exists());
    let config = Config::load().unwrap_or_default();

    let client = OrchestratorClient::new(&config.backend.base_url)?;
    let result = probe(&client, config_exists).await;

    print_formatted(&result, format, CheckResult::to_text);

    Ok(())
}

async fn probe(client: &OrchestratorClient, config_exists: bool) -> CheckResult {
    let base_url_valid = reqwest::Url::parse(client.base_url())
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https"));

    let (backend_reachable, backend_detail) = if base_url_valid {
        match client.health().await {
            Ok(text) => (true, text.trim().to_string()),
            Err(e) => (false, e.to_string()),
        }
    } else {
        (false, "skipped".to_string())
    };

    CheckResult {
        config_exists,
        base_url: client.base_url().to_string(),
        base_url_valid,
        backend_reachable,
        backend_detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::HEALTH_PATH;
    use crate::orchestrator::tests::{local_client, spawn_server, unused_base_url};
    use axum::{Router, routing::get};

    #[tokio::test]
    async fn test_probe_healthy_backend() {
        let app = Router::new().route(HEALTH_PATH, get(|| async { "Orchestrator backend is running!" }));
        let base_url = spawn_server(app).await;

        let result = probe(&local_client(&base_url), true).await;
        assert!(result.base_url_valid);
        assert!(result.backend_reachable);
        assert_eq!(result.backend_detail, "Orchestrator backend is running!");
        assert!(result.to_text().contains("[OK] Backend reachable"));
    }

    #[tokio::test]
    async fn test_probe_unreachable_backend() {
        let base_url = unused_base_url().await;

        let result = probe(&local_client(&base_url), false).await;
        assert!(result.base_url_valid);
        assert!(!result.backend_reachable);
        assert!(result.to_text().starts_with("[  ] Config file exists"));
    }

    #[tokio::test]
    async fn test_probe_skips_invalid_url() {
        let result = probe(&local_client("orchestrator"), true).await;
        assert!(!result.base_url_valid);
        assert!(!result.backend_reachable);
        assert_eq!(result.backend_detail, "skipped");
    }
}
