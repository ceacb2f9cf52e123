//! Configuration management commands

mod config_gen;

pub use config_gen::config_generate;
