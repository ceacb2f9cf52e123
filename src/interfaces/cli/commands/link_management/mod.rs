//! Link management commands

mod add;
mod export;
mod list;
mod remove;
mod stats;

pub use add::add_link;
pub use export::export_links;
pub use list::list_links;
pub use remove::remove_link;
pub use stats::show_stats;
