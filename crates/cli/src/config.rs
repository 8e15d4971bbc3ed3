//! Start-up configuration read from the environment.

use std::path::PathBuf;

use stockledger_observability::LogFormat;

pub const ENV_FILE: &str = "STOCKLEDGER_FILE";
pub const ENV_LOG_FORMAT: &str = "STOCKLEDGER_LOG_FORMAT";
pub const ENV_AUTOLOAD: &str = "STOCKLEDGER_AUTOLOAD";

pub const DEFAULT_FILE: &str = "inventory.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// File offered by save/load when the filename prompt is left empty.
    pub default_file: PathBuf,
    pub log_format: LogFormat,
    /// Load `default_file` on start-up if it exists.
    pub autoload: bool,
    /// Problems found while reading the environment. Logged once logging is
    /// up, since the log format itself is part of this config.
    pub warnings: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(DEFAULT_FILE),
            log_format: LogFormat::default(),
            autoload: false,
            warnings: Vec::new(),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or empty keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(file) = get(ENV_FILE) {
            config.default_file = PathBuf::from(file.trim());
        }

        if let Some(raw) = get(ENV_LOG_FORMAT) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{ENV_LOG_FORMAT}: {e}; using pretty")),
            }
        }

        if let Some(raw) = get(ENV_AUTOLOAD) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.autoload = true,
                "0" | "false" | "no" | "off" => config.autoload = false,
                _ => config
                    .warnings
                    .push(format!("{ENV_AUTOLOAD}: unrecognized value {raw:?}; autoload disabled")),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.default_file, PathBuf::from("inventory.csv"));
        assert!(!config.autoload);
    }

    #[test]
    fn reads_all_keys() {
        let config = config_from(&[
            (ENV_FILE, "/var/lib/shop/stock.csv"),
            (ENV_LOG_FORMAT, "json"),
            (ENV_AUTOLOAD, "true"),
        ]);
        assert_eq!(config.default_file, PathBuf::from("/var/lib/shop/stock.csv"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.autoload);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn bad_values_fall_back_with_a_warning() {
        let config = config_from(&[(ENV_LOG_FORMAT, "xml"), (ENV_AUTOLOAD, "maybe")]);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.autoload);
        assert_eq!(config.warnings.len(), 2);
        assert!(config.warnings[0].starts_with(ENV_LOG_FORMAT));
        assert!(config.warnings[1].contains("maybe"));
    }

    #[test]
    fn empty_values_are_ignored() {
        let config = config_from(&[(ENV_FILE, "  ")]);
        assert_eq!(config.default_file, PathBuf::from(DEFAULT_FILE));
    }
}
