//! Layered application configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from storyreel.toml)
//! - `~/.config/storyreel/storyreel.toml`
//! - `./storyreel.toml`
//! - An explicit file passed with `--config`
//! - `STORYREEL__SECTION__KEY` environment variables

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use storyreel_error::{ConfigError, ConfigErrorKind, StoryreelError, StoryreelResult};
use storyreel_models::{DEFAULT_BASE_URL, DEFAULT_MODEL, ModelConfig};
use storyreel_slides::SlideConfig;
use tracing::{debug, instrument, warn};

const DEFAULT_CONFIG: &str = include_str!("../../../storyreel.toml");

/// Where story records and slides are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSection {
    /// Data root directory
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

fn default_root() -> PathBuf {
    PathBuf::from("data")
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

/// Chat-completions endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSection {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Completion length cap
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Whole-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            max_tokens: None,
            temperature: None,
            timeout_secs: None,
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSection {
    /// Socket address to bind
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Emit JSON lines instead of human-readable logs
    #[serde(default)]
    pub json: bool,
}

/// Top-level Storyreel configuration.
///
/// # Example
///
/// ```no_run
/// use storyreel::StoryreelConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryreelConfig::load(None)?;
/// println!("Writing stories under {}", config.storage.root.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryreelConfig {
    /// `[storage]`
    #[serde(default)]
    pub storage: StorageSection,
    /// `[model]`
    #[serde(default)]
    pub model: ModelSection,
    /// `[slides]`
    #[serde(default)]
    pub slides: SlideConfig,
    /// `[server]`
    #[serde(default)]
    pub server: ServerSection,
    /// `[logging]`
    #[serde(default)]
    pub logging: LoggingSection,
}

impl StoryreelConfig {
    /// Load the full source stack, with `explicit` layered above the user files.
    ///
    /// User config files are optional and silently skipped when absent. An
    /// explicit file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or a value has the wrong type.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> StoryreelResult<Self> {
        debug!("Loading configuration");
        let mut builder = Self::bundled();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyreel/storyreel.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }
        builder = builder.add_source(File::with_name("storyreel").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("STORYREEL")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Bundled defaults overridden by a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StoryreelResult<Self> {
        debug!("Loading configuration from file");
        Self::finish(Self::bundled().add_source(File::from(path.as_ref())))
    }

    /// Bundled defaults overridden by TOML text.
    pub fn from_toml_str(text: &str) -> StoryreelResult<Self> {
        Self::finish(Self::bundled().add_source(File::from_str(text, FileFormat::Toml)))
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> StoryreelResult<Self> {
        builder
            .build()
            .map_err(|e| {
                StoryreelError::from(ConfigError::new(ConfigErrorKind::Load(e.to_string())))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryreelError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
            })
    }

    /// Completion client settings, with the API key read from the
    /// environment variable named by `model.api_key_env`.
    pub fn model_config(&self) -> ModelConfig {
        let section = &self.model;
        let api_key = std::env::var(&section.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!(var = %section.api_key_env, "API key variable is not set");
        }

        ModelConfig {
            base_url: section.base_url.clone(),
            model: section.model.clone(),
            api_key,
            max_tokens: section.max_tokens,
            temperature: section.temperature,
            timeout: section
                .timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}
