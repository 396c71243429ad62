//! Settings read from the environment (and `.env`) by the `pharma-seed` binary.

use std::path::PathBuf;

use thiserror::Error;

use crate::services::seed::{DEFAULT_CREATED_BY, ExistingDataPolicy, SeedOptions, UnknownPolicy};

pub const DEFAULT_DATABASE_URL: &str = "app.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {variable}")]
    InvalidValue { variable: &'static str, value: String },
    #[error("SEED_ON_EXISTING: {0}")]
    Policy(#[from] UnknownPolicy),
}

/// Everything a seeding run needs to know before it opens the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub database_url: String,
    /// JSON file or CSV directory; the built-in dataset is used when absent.
    pub dataset_path: Option<PathBuf>,
    pub options: SeedOptions,
}

impl SeedConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or(DEFAULT_DATABASE_URL.to_string());

        let dataset_path = lookup("SEED_DATA")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let atomic = match lookup("SEED_ATOMIC") {
            Some(value) => parse_flag("SEED_ATOMIC", &value)?,
            None => false,
        };

        let on_existing = match lookup("SEED_ON_EXISTING") {
            Some(value) => value.parse::<ExistingDataPolicy>()?,
            None => ExistingDataPolicy::default(),
        };

        let created_by = lookup("SEED_CREATED_BY")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_CREATED_BY.to_string());

        Ok(Self {
            database_url,
            dataset_path,
            options: SeedOptions {
                atomic,
                on_existing,
                created_by,
            },
        })
    }
}

fn parse_flag(variable: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            variable,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<SeedConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SeedConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).expect("expected defaults");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.dataset_path, None);
        assert_eq!(config.options, SeedOptions::default());
    }

    #[test]
    fn every_variable_is_honoured() {
        let config = config_from(&[
            ("DATABASE_URL", "/var/lib/pharma/store.db"),
            ("SEED_DATA", "data/master.json"),
            ("SEED_ATOMIC", "TRUE"),
            ("SEED_ON_EXISTING", "skip"),
            ("SEED_CREATED_BY", " admin "),
        ])
        .expect("expected valid config");

        assert_eq!(config.database_url, "/var/lib/pharma/store.db");
        assert_eq!(config.dataset_path, Some(PathBuf::from("data/master.json")));
        assert!(config.options.atomic);
        assert_eq!(config.options.on_existing, ExistingDataPolicy::Skip);
        assert_eq!(config.options.created_by, "admin");
    }

    #[test]
    fn blank_dataset_path_means_builtin() {
        let config = config_from(&[("SEED_DATA", "  ")]).expect("expected valid config");
        assert_eq!(config.dataset_path, None);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = config_from(&[("SEED_ON_EXISTING", "upsert")]).expect_err("expected error");
        match err {
            ConfigError::Policy(UnknownPolicy(value)) => assert_eq!(value, "upsert"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_flag_is_rejected() {
        let err = config_from(&[("SEED_ATOMIC", "maybe")]).expect_err("expected error");
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                variable: "SEED_ATOMIC",
                ..
            }
        ));
    }
}
