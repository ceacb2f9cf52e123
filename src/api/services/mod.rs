pub mod export;
pub mod health;
pub mod helpers;
pub mod links;
pub mod routes;
pub mod stats;

pub use health::{AppStartTime, HealthService, health_routes};
pub use routes::page_routes;
