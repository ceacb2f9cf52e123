pub mod middleware;
pub mod pages;
pub mod services;
