//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// weblinks - A small self-hosted bookmark manager
#[derive(Parser)]
#[command(name = "weblinks")]
#[command(version)]
#[command(about = "A small self-hosted bookmark manager", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./config.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// List links
    List {
        /// Only links in this group
        #[arg(long, short = 'g', conflicts_with = "search")]
        group: Option<String>,

        /// Case-sensitive substring of description, tags or URL
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Add a link
    Add {
        description: String,

        /// Must start with http:// or https://
        url: String,

        #[arg(long, short = 'g')]
        group: String,

        #[arg(long, short = 't')]
        tags: Option<String>,
    },

    /// Remove a link by id
    Remove { id: i64 },

    /// Export all links
    Export {
        /// csv or json
        #[arg(long, short = 'f', default_value = "csv")]
        format: String,

        /// Output file path (default: stdout)
        file_path: Option<PathBuf>,
    },

    /// Show link statistics
    Stats,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<PathBuf>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_serve() {
        let cli = Cli::try_parse_from(["weblinks"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_add_with_group_and_tags() {
        let cli = Cli::try_parse_from([
            "weblinks",
            "-c",
            "my.toml",
            "add",
            "Rust book",
            "https://doc.rust-lang.org/book/",
            "--group",
            "dev",
            "--tags",
            "lang",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                description: "Rust book".to_string(),
                url: "https://doc.rust-lang.org/book/".to_string(),
                group: "dev".to_string(),
                tags: Some("lang".to_string()),
            })
        );
    }

    #[test]
    fn test_add_requires_group() {
        assert!(Cli::try_parse_from(["weblinks", "add", "x", "https://x"]).is_err());
    }

    #[test]
    fn test_export_defaults_to_csv() {
        let cli = Cli::try_parse_from(["weblinks", "export"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Export {
                format: "csv".to_string(),
                file_path: None,
            })
        );
    }

    #[test]
    fn test_remove_rejects_non_integer_id() {
        assert!(Cli::try_parse_from(["weblinks", "remove", "abc"]).is_err());
    }
}
