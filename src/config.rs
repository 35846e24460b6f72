use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::core::{
    tech::DEFAULT_MAJOR_ORGANIZATIONS, MatchOptions, ReviewQueue, TechEstimator,
    DEFAULT_MAX_DEFERS,
};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub tech: TechSettings,
    #[serde(default)]
    pub queue: QueueSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            location: default_location(),
            count: default_count(),
            seed: default_seed(),
        }
    }
}

fn default_location() -> String { "94105".to_string() }
fn default_count() -> usize { 20 }
fn default_seed() -> u64 { 42 }

#[derive(Debug, Clone, Deserialize)]
pub struct TechSettings {
    #[serde(default = "default_major_organizations")]
    pub major_organizations: Vec<String>,
}

impl Default for TechSettings {
    fn default() -> Self {
        Self {
            major_organizations: default_major_organizations(),
        }
    }
}

impl TechSettings {
    pub fn estimator(&self) -> TechEstimator {
        TechEstimator::new(self.major_organizations.iter().cloned())
    }
}

fn default_major_organizations() -> Vec<String> {
    DEFAULT_MAJOR_ORGANIZATIONS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueueSettings {
    #[serde(default = "default_max_defers")]
    pub max_defers: u32,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            max_defers: default_max_defers(),
        }
    }
}

impl QueueSettings {
    /// Build a review queue honoring the configured defer bound
    pub fn queue<T>(&self, entries: Vec<T>) -> ReviewQueue<T> {
        ReviewQueue::with_max_defers(entries, self.max_defers)
    }
}

fn default_max_defers() -> u32 { DEFAULT_MAX_DEFERS }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub min_tech_score: Option<u8>,
    pub limit: Option<usize>,
}

impl MatchingSettings {
    pub fn options(&self) -> MatchOptions {
        MatchOptions {
            min_tech_score: self.min_tech_score,
            limit: self.limit,
        }
    }
}

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

fn environment() -> Environment {
    // e.g., BRYDJE__QUEUE__MAX_DEFERS -> queue.max_defers
    Environment::with_prefix("BRYDJE")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("tech.major_organizations")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local configuration file (config/local.toml)
    /// 4. Environment variables (prefixed with BRYDJE__)
    /// 5. LOG_LEVEL / LOG_FORMAT shorthands
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        apply_log_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Parse configuration from TOML text without consulting the environment
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

/// Honor the plain LOG_LEVEL and LOG_FORMAT variables used by deployment scripts
fn apply_log_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(level) = env::var("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }
    if let Ok(format) = env::var("LOG_FORMAT") {
        builder = builder.set_override("logging.format", format)?;
    }

    builder.build()
}
