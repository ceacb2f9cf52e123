pub mod backend;
pub mod models;

pub use backend::LinkStore;
pub use models::{GroupCount, Link, LinkStats, NewLink};
