//! CLI for the `desk` binary.
//!
//! ```ignore
//! use desk_sdk::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! run_cli_command(args).await?;
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, USAGE};
pub use version::{version_line, VERSION};

use color_eyre::Result;
use tracing::debug;

use crate::config::DeskConfig;
use crate::Desk;

/// Load configuration from `--config`, or the environment and default path.
pub fn load_config(path: Option<&std::path::Path>) -> Result<DeskConfig> {
    let config = match path {
        Some(path) => DeskConfig::from_path_and_env(path)?,
        None => DeskConfig::from_env()?,
    };
    debug!("Loaded configuration for {}", config.base_url());
    Ok(config)
}

/// Execute a parsed command.
pub async fn run_cli_command(args: CliArgs) -> Result<()> {
    let command = match args.command {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        command => command,
    };

    let desk = Desk::new(load_config(args.config_path.as_deref())?);
    let result = match command {
        CliCommand::Topics { brand_id } => commands::run_topics(&desk, brand_id).await,
        CliCommand::Articles {
            topic_id,
            brand_id,
            pages,
        } => commands::run_articles(&desk, topic_id, brand_id, pages).await,
        CliCommand::Search {
            query,
            topic_id,
            brand_id,
            pages,
        } => commands::run_search(&desk, &query, topic_id, brand_id, pages).await,
        CliCommand::Contact {
            email,
            feedback,
            subject,
            name,
            brand_id,
        } => {
            commands::run_contact(
                &desk,
                &email,
                &feedback,
                subject.as_deref(),
                name.as_deref(),
                brand_id,
            )
            .await
        }
        CliCommand::Version | CliCommand::Help => Ok(()),
    };
    desk.release();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_version_and_help_need_no_config() {
        let version = CliArgs {
            config_path: Some("/nonexistent/desk.properties".into()),
            command: CliCommand::Version,
        };
        assert!(run_cli_command(version).await.is_ok());

        let help = CliArgs {
            config_path: None,
            command: CliCommand::Help,
        };
        assert!(run_cli_command(help).await.is_ok());
    }

    #[test]
    fn test_load_config_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.properties");
        std::fs::write(&path, "desk.api.hostname=h.example.com\ndesk.api.token=t\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.hostname, "h.example.com");
    }
}
