//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `header_inspector` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Output formatting
//!
//! All core functionality is implemented in the library crate.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use header_inspector::config::DEFAULT_SERVER_PORT;
use header_inspector::initialization::init_logger_with;
use header_inspector::server::{start_server, ServerState};
use header_inspector::{Config, InspectionRequest, Inspector};

#[derive(Debug, Parser)]
#[command(
    name = "header_inspector",
    version,
    about = "Inspects a URL's HTTP response headers and redirect chain."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    config: Config,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect a single URL and print the result as JSON
    Check {
        /// Absolute http:// or https:// URL
        url: String,

        /// User-Agent for this inspection (defaults to --user-agent)
        #[arg(long = "as")]
        request_user_agent: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Run the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        bind: IpAddr,

        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_SERVER_PORT)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; variables may come from the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.config.log_level.clone().into(), cli.config.log_format.clone())
        .context("Failed to initialize logger")?;

    let inspector = Inspector::new(cli.config).context("Failed to initialize HTTP client")?;

    match cli.command {
        Command::Check {
            url,
            request_user_agent,
            pretty,
        } => {
            let mut request = InspectionRequest::new(url);
            request.user_agent = request_user_agent;
            match inspector.inspect(&request).await {
                Ok(result) => {
                    let json = if pretty {
                        serde_json::to_string_pretty(&result)
                    } else {
                        serde_json::to_string(&result)
                    }
                    .context("Failed to serialize result")?;
                    println!("{}", json);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("header_inspector error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::Serve { bind, port } => {
            start_server(SocketAddr::new(bind, port), ServerState::new(inspector)).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use header_inspector::LogLevel;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_flags_accepted_after_subcommand() {
        let cli = Cli::try_parse_from([
            "header_inspector",
            "check",
            "https://example.com",
            "--log-level",
            "debug",
            "--max-redirects",
            "3",
        ])
        .expect("flags after the subcommand should parse");

        assert!(matches!(cli.config.log_level, LogLevel::Debug));
        assert_eq!(cli.config.max_redirects, 3);
        assert!(matches!(cli.command, Command::Check { .. }));
    }

    #[test]
    fn test_config_flags_accepted_before_subcommand() {
        let cli = Cli::try_parse_from(["header_inspector", "--timeout-seconds", "4", "serve"])
            .expect("flags before the subcommand should parse");
        assert_eq!(cli.config.timeout_seconds, 4);
        assert!(matches!(cli.command, Command::Serve { .. }));
    }
}
