use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::MatchWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub trending: TrendingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Where university records come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSourceKind {
    /// JSON array of university documents on disk
    #[default]
    File,
    /// Remote document database REST API
    Remote,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub source: CatalogSourceKind,
    #[serde(default = "default_catalog_path")]
    pub path: String,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub database_id: Option<String>,
    #[serde(default = "default_collection")]
    pub collection: String,
    pub timeout_secs: Option<u64>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: CatalogSourceKind::default(),
            path: default_catalog_path(),
            endpoint: None,
            api_key: None,
            project_id: None,
            database_id: None,
            collection: default_collection(),
            timeout_secs: None,
        }
    }
}

fn default_catalog_path() -> String { "data/universities.json".to_string() }
fn default_collection() -> String { "universities".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub ttl_secs: Option<u64>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: None,
        }
    }
}

fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Drop universities that miss an expressed preference before scoring
    #[serde(default = "default_true")]
    pub prefilter: bool,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self { prefilter: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingSettings {
    #[serde(default = "default_trending_limit")]
    pub default_limit: usize,
    #[serde(default = "default_trending_max_limit")]
    pub max_limit: usize,
}

impl Default for TrendingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_trending_limit(),
            max_limit: default_trending_max_limit(),
        }
    }
}

fn default_trending_limit() -> usize { 10 }
fn default_trending_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_course_weight")]
    pub course: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_state_weight")]
    pub state: f64,
    #[serde(default = "default_facilities_weight")]
    pub facilities: f64,
    #[serde(default = "default_campus_type_weight")]
    pub campus_type: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            course: default_course_weight(),
            budget: default_budget_weight(),
            state: default_state_weight(),
            facilities: default_facilities_weight(),
            campus_type: default_campus_type_weight(),
        }
    }
}

impl From<&WeightsConfig> for MatchWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            course: config.course,
            budget: config.budget,
            state: config.state,
            facilities: config.facilities,
            campus_type: config.campus_type,
        }
    }
}

impl WeightsConfig {
    /// Reject weights that would push match scores outside `0..=100`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("course", self.course),
            ("budget", self.budget),
            ("state", self.state),
            ("facilities", self.facilities),
            ("campus_type", self.campus_type),
        ];

        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Message(format!(
                    "scoring.weights.{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

fn default_course_weight() -> f64 { 30.0 }
fn default_budget_weight() -> f64 { 25.0 }
fn default_state_weight() -> f64 { 15.0 }
fn default_facilities_weight() -> f64 { 20.0 }
fn default_campus_type_weight() -> f64 { 10.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with UNIMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., UNIMATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Check values that deserialize fine but are unusable
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.weights.validate()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    pub fn match_weights(&self) -> MatchWeights {
        MatchWeights::from(&self.scoring.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("UNIMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
