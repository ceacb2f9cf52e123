//! Generate config command

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

const DEFAULT_OUTPUT_PATH: &str = "config.example.toml";

/// Generate example configuration file
pub async fn config_generate(output_path: Option<PathBuf>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
    let display = path.display().to_string();

    // 检查文件是否存在，非 --force 模式下交互确认
    if !force && path.exists() {
        print!(
            "{} {} {}",
            "File already exists:".yellow(),
            display.blue(),
            "Overwrite? [y/N] ".yellow()
        );
        io::stdout()
            .flush()
            .map_err(|e| CliError::CommandError(format!("Failed to flush stdout: {}", e)))?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| CliError::CommandError(format!("Failed to read answer: {}", e)))?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        display.blue()
    );

    StaticConfig::default().save_to_file(&path).map_err(|e| {
        CliError::CommandError(format!("Unable to write configuration file: {}", e))
    })?;

    println!(
        "  {} {}",
        "Configuration file generated successfully".green(),
        display.blue()
    );
    println!(
        "  {}",
        "Edit it and pass it with -c, or set WL__SECTION__KEY environment variables".dimmed()
    );
    Ok(())
}
