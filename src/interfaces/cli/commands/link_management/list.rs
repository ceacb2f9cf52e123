//! List links command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::storage::LinkStore;

pub async fn list_links(
    store: &LinkStore,
    group: Option<String>,
    search: Option<String>,
) -> Result<(), CliError> {
    let links = match (group.as_deref(), search.as_deref()) {
        (Some(group), _) => store.list_by_group(group).await,
        (None, Some(query)) => store.search(query).await,
        (None, None) => store.list_all().await,
    }
    .map_err(|e| CliError::CommandError(format!("Failed to load links: {}", e)))?;

    if links.is_empty() {
        println!("{} No links found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Links:".bold().green());
    println!();
    for link in &links {
        let mut info_parts = vec![
            format!("#{}", link.id).cyan().to_string(),
            format!("[{}]", link.file_group).magenta().to_string(),
            link.description.bold().to_string(),
            link.url.blue().underline().to_string(),
        ];

        if let Some(tags) = link.tags.as_deref().filter(|t| !t.is_empty()) {
            info_parts.push(format!("(tags: {})", tags).dimmed().yellow().to_string());
        }

        println!("  {}", info_parts.join(" "));
    }
    println!();
    println!(
        "{} Total {} links",
        "ℹ".bold().blue(),
        links.len().to_string().green()
    );
    Ok(())
}
