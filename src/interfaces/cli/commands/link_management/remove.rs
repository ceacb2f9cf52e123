//! Remove link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::storage::LinkStore;

pub async fn remove_link(store: &LinkStore, id: i64) -> Result<(), CliError> {
    // 先确认存在，store 的 delete 对不存在的 id 是静默的
    let link = store.get(id).await.map_err(|e| {
        if e.is_not_found() {
            CliError::CommandError(format!("Link does not exist: {}", id))
        } else {
            CliError::CommandError(format!("Failed to check link: {}", e))
        }
    })?;

    store
        .delete(id)
        .await
        .map_err(|e| CliError::CommandError(format!("Failed to delete: {}", e)))?;

    println!(
        "{} Deleted link #{}: {}",
        "✓".bold().green(),
        id.to_string().cyan(),
        link.description
    );
    Ok(())
}
