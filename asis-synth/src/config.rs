use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Dashboard settings. Read from YAML, then overridden by `ASIS_*` environment variables.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Fixed seed for the traffic sampler; unset means fresh entropy per epoch.
    pub seed: Option<u64>,
    pub listen_addr: String,
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            listen_addr: "0.0.0.0:7000".into(),
            log_filter: "info".into(),
        }
    }
}

impl DashboardConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load using the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// `ASIS_CONFIG` names the YAML file; `ASIS_SEED`, `ASIS_LISTEN_ADDR` and
    /// `ASIS_LOG` override individual keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = match lookup("ASIS_CONFIG") {
            Some(path) if !path.is_empty() => Self::from_path(path)?,
            _ => Self::default(),
        };

        if let Some(seed) = lookup("ASIS_SEED") {
            cfg.seed = Some(seed.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "ASIS_SEED",
                value: seed.clone(),
            })?);
        }
        if let Some(addr) = lookup("ASIS_LISTEN_ADDR") {
            cfg.listen_addr = addr;
        }
        if let Some(filter) = lookup("ASIS_LOG") {
            cfg.log_filter = filter;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = DashboardConfig::from_yaml("seed: 42\n").unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.listen_addr, "0.0.0.0:7000");
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn env_overrides_apply() {
        let env: HashMap<&str, &str> = [("ASIS_SEED", "7"), ("ASIS_LISTEN_ADDR", "127.0.0.1:9000")]
            .into_iter()
            .collect();
        let cfg = DashboardConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
    }

    #[test]
    fn bad_seed_is_rejected() {
        let err = DashboardConfig::from_lookup(|k| (k == "ASIS_SEED").then(|| "abc".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: "ASIS_SEED", .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DashboardConfig::from_path("target/definitely-missing-asis.yaml").unwrap_err();
        assert!(err.to_string().contains("definitely-missing-asis.yaml"));
    }
}
