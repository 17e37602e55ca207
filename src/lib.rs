//! Autosocket console - Main Library
//!
//! Wraps the `autosocket` workspace library with what the `autosocket`
//! binary needs around it.
//!
//! ## Architecture
//!
//! - **bin_common**: CLI helpers for binary executables
//! - **config**: YAML application configuration
//! - **logging**: tracing subscriber setup
//! - **autosocket**: the reconnecting WebSocket client (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust,ignore
//! use autosocket_console::bin_common::{load_config_from_env, parse_args, uri_argument};
//! use autosocket_console::config::AppConfig;
//! ```

// Re-export workspace library for convenience
pub use autosocket;

pub mod config;
pub mod logging;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{config_path_from, load_config_from_env, parse_args, uri_argument};
}
