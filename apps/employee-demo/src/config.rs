//! Layered configuration: defaults <- YAML file <- `EMPLOYEE_DEMO__*` env <- CLI

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix; nested keys are separated by `__`
pub const ENV_PREFIX: &str = "EMPLOYEE_DEMO__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Employee service module configuration
    #[serde(default)]
    pub employee: employee_service::Config,

    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Rows inserted by the bulk-load step
    #[serde(default = "default_batch_count")]
    pub batch_count: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            batch_count: default_batch_count(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_batch_count() -> usize {
    100_000
}

impl AppConfig {
    /// Loads the optional YAML file and environment overrides on top of defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment.extract().context("invalid configuration")?;
        config.employee.validate()?;
        Ok(config)
    }
}
