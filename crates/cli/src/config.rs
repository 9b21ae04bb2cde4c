use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use sagdec_core::config::{DatasetConfig, DEFAULT_POINT_COUNT, DEFAULT_SEED};
use sagdec_filter::Dimension;

/// CLI configuration loaded from TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Seed for the synthetic point collection
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of synthetic points
    #[serde(default = "default_point_count")]
    pub point_count: usize,

    /// Coloured terminal output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Filter tokens applied when no flag is given
    #[serde(default)]
    pub filters: DefaultFilters,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultFilters {
    pub zone: Option<String>,
    pub authority: Option<String>,
    pub stratum: Option<String>,
    pub cluster: Option<String>,
    pub shift: Option<String>,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_point_count() -> usize {
    DEFAULT_POINT_COUNT
}

fn default_color() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            point_count: default_point_count(),
            color: default_color(),
            filters: DefaultFilters::default(),
        }
    }
}

impl CliConfig {
    /// Return the default config directory path: ~/.config/sagdec/
    pub fn default_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine user config directory")?
            .join("sagdec");
        Ok(config_dir)
    }

    /// Return the default config file path.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load config from the given path, or the default path.
    /// Returns default config if the file does not exist; nothing is written.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            debug!(?config_path, "Loading config");
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config: {}", config_path.display()))?;
            let config: Self = toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", config_path.display()))?;
            Ok(config)
        } else {
            debug!(?config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Dataset settings. Priority: cli flag > config file.
    pub fn resolve_dataset(&self, seed: Option<u64>, points: Option<usize>) -> DatasetConfig {
        DatasetConfig {
            seed: seed.unwrap_or(self.seed),
            point_count: points.unwrap_or(self.point_count),
        }
    }

    /// Filter token for a dimension. Priority: cli flag > config file.
    /// `None` leaves the dimension unfiltered.
    pub fn resolve_filter(&self, dimension: Dimension, cli_override: Option<&str>) -> Option<String> {
        if let Some(token) = cli_override {
            return Some(token.to_string());
        }
        let configured = match dimension {
            Dimension::Zone => &self.filters.zone,
            Dimension::Authority => &self.filters.authority,
            Dimension::Stratum => &self.filters.stratum,
            Dimension::Cluster => &self.filters.cluster,
            Dimension::Shift => &self.filters.shift,
        };
        configured.clone()
    }

    pub fn use_color(&self, no_color: bool) -> bool {
        self.color && !no_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.seed, 2016);
        assert_eq!(config.point_count, 200);
        assert!(config.color);
    }

    #[test]
    fn test_missing_file_yields_defaults_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = CliConfig::load(path.to_str()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7\ncolor = false\n\n[filters]\nzone = \"Rural\"").unwrap();
        let config = CliConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.point_count, 200);
        assert!(!config.color);
        assert_eq!(config.filters.zone.as_deref(), Some("Rural"));
        assert_eq!(config.filters.cluster, None);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = \"not a number\"").unwrap();
        assert!(CliConfig::load(file.path().to_str()).is_err());
    }

    #[test]
    fn test_flag_overrides_config() {
        let mut config = CliConfig::default();
        config.filters.zone = Some("Rural".to_string());
        assert_eq!(config.resolve_filter(Dimension::Zone, Some("Urbana")).as_deref(), Some("Urbana"));
        assert_eq!(config.resolve_filter(Dimension::Zone, None).as_deref(), Some("Rural"));
        assert_eq!(config.resolve_filter(Dimension::Cluster, None), None);

        let dataset = config.resolve_dataset(Some(1), None);
        assert_eq!(dataset.seed, 1);
        assert_eq!(dataset.point_count, 200);
    }

    #[test]
    fn test_use_color() {
        let config = CliConfig::default();
        assert!(config.use_color(false));
        assert!(!config.use_color(true));
    }
}
