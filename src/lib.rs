//! weblinks - A small self-hosted bookmark manager
//!
//! Links (description, tags, URL, group) live in a SQL database behind
//! [`storage::LinkStore`]; a browser UI and a CLI sit on top of it.
//!
//! # Architecture
//! - `storage`: LinkStore, the only owner of persisted links
//! - `services`: form validation and CSV/JSON export shared by web and CLI
//! - `api`: HTTP pages, health endpoint and middleware
//! - `interfaces`: CLI commands
//! - `config`: TOML + environment configuration
//! - `runtime`: startup, server mode and graceful shutdown
//! - `system`: logging initialization

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
