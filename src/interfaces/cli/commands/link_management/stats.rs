//! Stats command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::storage::LinkStore;

pub async fn show_stats(store: &LinkStore) -> Result<(), CliError> {
    let stats = store
        .stats()
        .await
        .map_err(|e| CliError::CommandError(format!("Failed to compute stats: {}", e)))?;

    let most_populous = match &stats.most_populous {
        Some(top) => format!("{} ({} links)", top.group.magenta(), top.count),
        None => "None".dimmed().to_string(),
    };

    println!("{}", "Statistics:".bold().green());
    println!("  Total links:         {}", stats.total_links.to_string().cyan());
    println!("  Total groups:        {}", stats.total_groups.to_string().cyan());
    println!("  Most populous group: {}", most_populous);
    Ok(())
}
