//! CLI module for the VEMU launcher
//!
//! Without a subcommand the binary opens the GUI; subcommands give headless
//! access to the same launch lifecycle and to the config file.

mod commands;
mod output;

use clap::{Parser, Subcommand};

pub use output::{OutputFormat, print_error};

/// VEMU Launcher - start simulation workflows on the VEMU orchestrator
#[derive(Parser, Debug)]
#[command(name = "vemu-launcher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    /// Omit to start the graphical launcher
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log request details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full simulation workflow once and print the result
    Run(commands::run::RunArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },

    /// Diagnostics and connectivity checks
    Diag {
        #[command(subcommand)]
        command: commands::diag::DiagCommands,
    },
}

/// Run a CLI subcommand
pub async fn run(command: Commands, options: &OutputOptions) -> anyhow::Result<()> {
    let format = options.format();
    let quiet = options.quiet;

    match command {
        Commands::Run(args) => commands::run::run(args, format, quiet).await,
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
        Commands::Diag { command } => commands::diag::run(command, format, quiet).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_gui() {
        let cli = Cli::try_parse_from(["vemu-launcher"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output.format(), OutputFormat::Text);
    }

    #[test]
    fn test_run_with_overrides() {
        let cli = Cli::try_parse_from([
            "vemu-launcher",
            "run",
            "--backend-url",
            "http://10.0.0.5:8080",
            "--package",
            "lte-mock",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.output.format(), OutputFormat::Json);
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run subcommand");
        };
        assert_eq!(args.backend_url.as_deref(), Some("http://10.0.0.5:8080"));
        assert_eq!(args.package.as_deref(), Some("lte-mock"));
    }

    #[test]
    fn test_config_set_parses() {
        let cli =
            Cli::try_parse_from(["vemu-launcher", "config", "set", "launcher.theme", "amber"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: commands::config::ConfigCommands::Set { .. }
            })
        ));
    }
}
