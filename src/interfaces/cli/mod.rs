//! CLI interface module
//!
//! Every command opens the store from `[database]`, runs once, then closes it.

pub mod commands;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::storage::LinkStore;
use commands::{add_link, config_management, export_links, list_links, remove_link, show_stats};
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::WeblinksError> for CliError {
    fn from(err: crate::errors::WeblinksError) -> Self {
        use crate::errors::WeblinksError;
        match err {
            WeblinksError::Validation(msg) => CliError::ParseError(msg),
            WeblinksError::NotFound(msg) => CliError::CommandError(msg),
            other => CliError::StorageError(other.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // Generate 不需要数据库连接
    if let Commands::Config { action } = cmd {
        return match action {
            ConfigCommands::Generate { output_path, force } => {
                config_management::config_generate(output_path, force).await
            }
        };
    }

    let store = LinkStore::new(&config.database)
        .await
        .map_err(|e| CliError::StorageError(e.to_string()))?;

    let result = match cmd {
        Commands::List { group, search } => list_links(&store, group, search).await,
        Commands::Add {
            description,
            url,
            group,
            tags,
        } => add_link(&store, description, url, group, tags).await,
        Commands::Remove { id } => remove_link(&store, id).await,
        Commands::Export { format, file_path } => export_links(&store, &format, file_path).await,
        Commands::Stats => show_stats(&store).await,
        Commands::Serve | Commands::Config { .. } => Err(CliError::CommandError(
            "command is not handled by the CLI runner".to_string(),
        )),
    };

    if let Err(e) = store.close().await {
        tracing::warn!("Failed to close database connections: {}", e);
    }

    result
}
