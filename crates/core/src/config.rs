use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SagdecError};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u16(profile: &str, key: &str, default: u16) -> u16 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_u64(profile: &str, key: &str, default: u64) -> u64 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_usize(profile: &str, key: &str, default: usize) -> usize {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub cache: CacheConfig,
    pub links: LinksConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `SAGDEC_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("SAGDEC_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            server: ServerConfig::from_env_profiled(p),
            dataset: DatasetConfig::from_env_profiled(p),
            cache: CacheConfig::from_env_profiled(p),
            links: LinksConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Reject values the service cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.cache.filter_cache_entries == 0 {
            return Err(SagdecError::InvalidConfig {
                key: "FILTER_CACHE_ENTRIES".to_string(),
                value: "0".to_string(),
            });
        }
        if self.server.port == 0 {
            return Err(SagdecError::InvalidConfig {
                key: "PORT".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  server:   {}:{} (cors: {})", self.server.host, self.server.port, self.server.cors_origin);
        tracing::info!("  dataset:  seed={}, points={}", self.dataset.seed, self.dataset.point_count);
        tracing::info!("  cache:    filter_entries={}", self.cache.filter_cache_entries);
        tracing::info!(
            "  links:    notebook={}, source={}",
            self.links.notebook_url.as_deref().unwrap_or("(none)"),
            self.links.source_url.as_deref().unwrap_or("(none)")
        );
    }

    /// Return a view safe for API responses and terminal output.
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "server": {
                "host": self.server.host,
                "port": self.server.port,
                "cors_origin": self.server.cors_origin,
            },
            "dataset": { "seed": self.dataset.seed, "point_count": self.dataset.point_count },
            "cache": { "filter_cache_entries": self.cache.filter_cache_entries },
            "links": {
                "notebook_url": self.links.notebook_url,
                "source_url": self.links.source_url,
            },
        })
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl ServerConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            host: profiled_env_or(p, "HOST", "0.0.0.0"),
            port: profiled_env_u16(p, "PORT", 3001),
            cors_origin: profiled_env_or(p, "CORS_ORIGIN", "*"),
        }
    }
}

// ── Dataset ───────────────────────────────────────────────────

pub const DEFAULT_SEED: u64 = 2016;
pub const DEFAULT_POINT_COUNT: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Seed for the synthetic point collection. Same seed, same points.
    pub seed: u64,
    pub point_count: usize,
}

impl DatasetConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            seed: profiled_env_u64(p, "SAGDEC_SEED", DEFAULT_SEED),
            point_count: profiled_env_usize(p, "SAGDEC_POINT_COUNT", DEFAULT_POINT_COUNT),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            point_count: DEFAULT_POINT_COUNT,
        }
    }
}

// ── Filter cache ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of memoised filter states.
    pub filter_cache_entries: usize,
}

impl CacheConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            filter_cache_entries: profiled_env_usize(p, "FILTER_CACHE_ENTRIES", 64),
        }
    }
}

// ── External links ────────────────────────────────────────────

/// Targets for the dashboard's notebook and source-download buttons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinksConfig {
    pub notebook_url: Option<String>,
    pub source_url: Option<String>,
}

impl LinksConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            notebook_url: profiled_env_opt(p, "NOTEBOOK_URL"),
            source_url: profiled_env_opt(p, "SOURCE_URL"),
        }
    }
}
