//! Configuration management
//!
//! Static configuration is loaded once at startup and passed explicitly to the
//! components that need it. There is no global config instance.

mod structs;

pub use structs::*;
