//! Add link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkForm;
use crate::storage::LinkStore;

pub async fn add_link(
    store: &LinkStore,
    description: String,
    url: String,
    group: String,
    tags: Option<String>,
) -> Result<(), CliError> {
    // 与 Web 表单一致的 URL 校验
    let new_link = LinkForm {
        description,
        tags: tags.unwrap_or_default(),
        url,
        file_group: group,
    }
    .validated()?;

    let url = new_link.url.clone();
    let group = new_link.file_group.clone();
    let id = store
        .create(new_link)
        .await
        .map_err(|e| CliError::CommandError(format!("Failed to add link: {}", e)))?;

    println!(
        "{} Added link #{}: {} [{}]",
        "✓".bold().green(),
        id.to_string().cyan(),
        url.blue().underline(),
        group.magenta()
    );
    Ok(())
}
