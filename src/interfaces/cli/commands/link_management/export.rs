//! Export links command

use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

use crate::interfaces::cli::CliError;
use crate::services::ExportFormat;
use crate::storage::LinkStore;

pub async fn export_links(
    store: &LinkStore,
    format: &str,
    file_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let format: ExportFormat = format.parse()?;

    let links = store
        .list_all()
        .await
        .map_err(|e| CliError::CommandError(format!("Failed to load links: {}", e)))?;
    let content = format.render(&links)?;

    match file_path {
        Some(path) => {
            std::fs::write(&path, &content).map_err(|e| {
                CliError::CommandError(format!(
                    "Failed to write export file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            // 提示写到 stderr，避免污染重定向的 stdout
            eprintln!(
                "{} Exported {} links to {}",
                "✓".bold().green(),
                links.len().to_string().cyan(),
                path.display().to_string().blue()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&content)
                .and_then(|_| stdout.flush())
                .map_err(|e| CliError::CommandError(format!("Failed to write output: {}", e)))?;
        }
    }
    Ok(())
}
