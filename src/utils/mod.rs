//! Configuration utilities.

/// TOML configuration and the hot-reloading manager.
pub mod config;
