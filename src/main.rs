//! wordpress-mcp: MCP server exposing the WordPress REST API as tools
//!
//! Reads the site URL and application-password credentials once at startup,
//! then serves tool calls over stdio until the client disconnects.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use wordpress_mcp::config;
use wordpress_mcp::mcp::server::McpServer;
use wordpress_mcp::wordpress::WpClient;

/// MCP server exposing the WordPress REST API as tools.
///
/// Credentials come from `WORDPRESS_SITE_URL`, `WORDPRESS_USERNAME` and
/// `WORDPRESS_PASSWORD`, or from the optional configuration file.
#[derive(Parser, Debug)]
#[command(name = "wordpress-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
///
/// Logs go to stderr; stdout carries protocol messages only.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Startup notice required by GPLv3 section 5d, written to stderr.
fn license_notice() -> String {
    format!(
        "wordpress-mcp {}  Copyright (C) 2026  The WordPress MCP Contributors\n\
         This program comes with ABSOLUTELY NO WARRANTY.\n\
         This is free software, licensed under GPL-3.0-or-later.\n\
         Source: {}\n",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_REPOSITORY")
    )
}

/// Entry point for the wordpress-mcp server.
fn main() -> ExitCode {
    let args = Args::parse();

    // Configuration is resolved before anything touches the network
    let config_path = args.config.as_deref();
    let (cfg, site) = match config::load_site_config(config_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            if config_path.is_none() {
                eprintln!(
                    "\nSet {}, {} and {}",
                    config::ENV_SITE_URL,
                    config::ENV_USERNAME,
                    config::ENV_PASSWORD
                );
                if let Some(default_path) = config::default_config_path() {
                    eprintln!("or provide them in {}", default_path.display());
                }
            }
            return ExitCode::FAILURE;
        }
    };

    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    eprintln!("{}", license_notice());

    info!(
        version = env!("CARGO_PKG_VERSION"),
        site = %site.site_url,
        "Starting wordpress-mcp server"
    );

    let client = match WpClient::new(&site) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create REST client");
            return ExitCode::FAILURE;
        }
    };

    let mut server = McpServer::new(client);

    info!("MCP server ready, waiting for client connection...");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(server.run()) {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn log_level_from_flags() {
        assert_eq!(get_log_level(0, true, "debug"), Level::ERROR);
        assert_eq!(get_log_level(2, false, "warn"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "INFO"), Level::INFO);
        assert_eq!(get_log_level(0, false, "bogus"), Level::WARN);
    }

    #[test]
    fn license_notice_names_license_and_source() {
        let notice = license_notice();
        assert!(notice.starts_with(&format!("wordpress-mcp {}", env!("CARGO_PKG_VERSION"))));
        assert!(notice.contains("ABSOLUTELY NO WARRANTY"));
        assert!(notice.contains("GPL-3.0-or-later"));
        assert!(notice.contains(env!("CARGO_PKG_REPOSITORY")));
        assert!(!env!("CARGO_PKG_REPOSITORY").is_empty());
    }
}
