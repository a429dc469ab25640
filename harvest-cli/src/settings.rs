//! Run settings: an optional JSON config file plus environment overrides.

use anyhow::Context;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use harvest::config::HarvestConfig;

/// Overrides [`HarvestConfig::batch_size`].
pub const ENV_BATCH_SIZE: &str = "HARVEST_BATCH_SIZE";
/// Overrides [`HarvestConfig::max_concurrent_workers`].
pub const ENV_MAX_WORKERS: &str = "HARVEST_MAX_WORKERS";
/// Directory the NDJSON datasets are written to.
pub const ENV_OUTPUT_DIR: &str = "HARVEST_OUTPUT_DIR";

/// Everything the binary needs to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub config: HarvestConfig,
    pub output_dir: PathBuf,
}

fn parse_var<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{key} must be a positive integer, got '{raw}'"))
}

impl Settings {
    /// Reads `config_path` if given, then applies overrides found by `lookup`.
    pub fn load<F>(config_path: Option<&Path>, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                serde_json::from_str::<HarvestConfig>(&raw)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => HarvestConfig::default(),
        };

        if let Some(raw) = lookup(ENV_BATCH_SIZE) {
            config = config.with_batch_size(parse_var(ENV_BATCH_SIZE, &raw)?);
        }
        if let Some(raw) = lookup(ENV_MAX_WORKERS) {
            config = config.with_max_concurrent_workers(parse_var(ENV_MAX_WORKERS, &raw)?);
        }
        let output_dir = lookup(ENV_OUTPUT_DIR).map_or_else(|| PathBuf::from("."), PathBuf::from);

        config.validate()?;
        Ok(Self { config, output_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let settings = Settings::load(None, env(&[])).unwrap();
        assert_eq!(settings.config, HarvestConfig::default());
        assert_eq!(settings.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("harvest.json");
        std::fs::write(&path, r#"{"batch_size": 5, "fetch_timeout_seconds": 10}"#).unwrap();

        let settings = Settings::load(
            Some(&path),
            env(&[
                (ENV_BATCH_SIZE, "4"),
                (ENV_MAX_WORKERS, "2"),
                (ENV_OUTPUT_DIR, "/tmp/out"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.config.batch_size, 4);
        assert_eq!(settings.config.max_concurrent_workers, Some(2));
        assert_eq!(settings.config.fetch_timeout_seconds, Some(10.0));
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_non_numeric_override_is_rejected() {
        let err = Settings::load(None, env(&[(ENV_BATCH_SIZE, "three")])).unwrap_err();
        assert!(err.to_string().contains(ENV_BATCH_SIZE));
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let err = Settings::load(None, env(&[(ENV_BATCH_SIZE, "0")])).unwrap_err();
        assert!(err.to_string().contains("batch_size"));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempdir().unwrap();
        let err = Settings::load(Some(&dir.path().join("absent.json")), env(&[])).unwrap_err();
        assert!(err.to_string().contains("reading config file"));
    }
}
