//! CLI utilities for binaries
//!
//! Handles configuration path resolution and command line arguments.

use std::path::PathBuf;

/// Environment variable holding the config file path
pub const CONFIG_PATH_ENV: &str = "AUTOSOCKET_CONFIG";

/// Config file used when `AUTOSOCKET_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Resolve the config path from an optional override value
pub fn config_path_from(value: Option<String>) -> PathBuf {
    value
        .filter(|path| !path.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
        .into()
}

/// Load configuration path from environment or use default
///
/// # Examples
/// ```
/// use autosocket_console::bin_common::load_config_from_env;
///
/// let path = load_config_from_env();
/// assert!(!path.as_os_str().is_empty());
/// ```
pub fn load_config_from_env() -> PathBuf {
    config_path_from(std::env::var(CONFIG_PATH_ENV).ok())
}

/// Parse command line arguments for a binary
///
/// Returns a vector of arguments (excluding the program name)
pub fn parse_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}

/// The endpoint given on the command line, if any
pub fn uri_argument(args: &[String]) -> Option<String> {
    args.first().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_default() {
        assert_eq!(config_path_from(None), PathBuf::from("config.yaml"));
        assert_eq!(config_path_from(Some(String::new())), PathBuf::from("config.yaml"));
    }

    #[test]
    fn test_config_path_override() {
        assert_eq!(
            config_path_from(Some("custom/path.yaml".to_string())),
            PathBuf::from("custom/path.yaml")
        );
    }

    #[test]
    fn test_uri_argument() {
        assert_eq!(uri_argument(&[]), None);
        assert_eq!(
            uri_argument(&["wss://example.com/ws".to_string()]),
            Some("wss://example.com/ws".to_string())
        );
    }
}
