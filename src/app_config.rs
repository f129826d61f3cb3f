use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::browser::{BrowserEngine, Locator};
use crate::translation::resolver::{DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE};

/// Application configuration module
/// This module handles loading, validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language used by the CLI when none is given
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language used by the CLI when none is given
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Browser and driver settings
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Translation service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Browser and driver settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BrowserConfig {
    /// Engine name; unknown names fall back to Chrome
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Already running WebDriver endpoint. When set no driver is spawned.
    #[serde(default)]
    pub webdriver_url: Option<String>,

    /// Driver binaries per engine
    #[serde(default = "default_drivers")]
    pub drivers: Vec<DriverConfig>,

    /// Seconds to wait for a spawned driver to answer
    #[serde(default = "default_startup_timeout_secs")]
    pub startup_timeout_secs: u64,

    /// Seconds a single driver command may take, page loads included
    #[serde(default = "default_command_timeout_secs")]
    pub command_timeout_secs: u64,
}

/// How to start the driver binary of one engine
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DriverConfig {
    // @field: Engine this driver serves
    pub engine: BrowserEngine,

    // @field: Binary name or path
    pub binary: String,

    // @field: Listening port
    pub port: u16,

    // @field: Extra command line arguments
    #[serde(default)]
    pub args: Vec<String>,
}

impl DriverConfig {
    // @param engine: Browser engine
    // @returns: Driver config with defaults
    pub fn new(engine: BrowserEngine) -> Self {
        Self {
            engine,
            binary: engine.default_driver_binary().to_string(),
            port: engine.default_driver_port(),
            args: Vec::new(),
        }
    }
}

/// Translation web service settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Base URL of the translation page
    #[serde(default = "default_service_url")]
    pub base_url: String,

    /// Selector of the text input; CSS, or XPath with an `xpath:` prefix
    #[serde(default = "default_input_selector")]
    pub input_selector: String,

    /// Selector of the rendered translation
    #[serde(default = "default_output_selector")]
    pub output_selector: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_service_url(),
            input_selector: default_input_selector(),
            output_selector: default_output_selector(),
        }
    }
}

impl ServiceConfig {
    /// Page URL for a language pair
    pub fn pair_url(&self, source: &str, target: &str) -> String {
        format!(
            "{}/#view=home&op=translate&sl={}&tl={}",
            self.base_url.trim_end_matches('/'),
            source,
            target
        )
    }

    pub fn input_locator(&self) -> Locator {
        Locator::parse(&self.input_selector)
    }

    pub fn output_locator(&self) -> Locator {
        Locator::parse(&self.output_selector)
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    DEFAULT_SOURCE_LANGUAGE.to_string()
}

fn default_target_language() -> String {
    DEFAULT_TARGET_LANGUAGE.to_string()
}

fn default_engine() -> String {
    BrowserEngine::default().to_lowercase_string()
}

fn default_drivers() -> Vec<DriverConfig> {
    BrowserEngine::all().into_iter().map(DriverConfig::new).collect()
}

fn default_startup_timeout_secs() -> u64 {
    10
}

fn default_command_timeout_secs() -> u64 {
    60
}

fn default_service_url() -> String {
    "https://translate.google.com".to_string()
}

fn default_input_selector() -> String {
    "#source".to_string()
}

fn default_output_selector() -> String {
    ".translation".to_string()
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            webdriver_url: None,
            drivers: default_drivers(),
            startup_timeout_secs: default_startup_timeout_secs(),
            command_timeout_secs: default_command_timeout_secs(),
        }
    }
}

impl BrowserConfig {
    /// Engine selected by name, with the unknown-name fallback applied
    pub fn resolved_engine(&self) -> BrowserEngine {
        BrowserEngine::from_name(&self.engine)
    }

    /// Driver settings for an engine, defaults if not configured
    pub fn driver_for(&self, engine: BrowserEngine) -> DriverConfig {
        self.drivers
            .iter()
            .find(|d| d.engine == engine)
            .cloned()
            .unwrap_or_else(|| DriverConfig::new(engine))
    }

    pub fn startup_timeout(&self) -> Duration {
        Duration::from_secs(self.startup_timeout_secs)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        validate_http_url(&self.service.base_url).context("Invalid service base_url")?;

        if let Some(webdriver_url) = &self.browser.webdriver_url {
            validate_http_url(webdriver_url).context("Invalid browser webdriver_url")?;
        }

        if self.service.input_selector.trim().is_empty() {
            return Err(anyhow!("Service input_selector must not be empty"));
        }

        if self.service.output_selector.trim().is_empty() {
            return Err(anyhow!("Service output_selector must not be empty"));
        }

        if self.browser.startup_timeout_secs == 0 {
            return Err(anyhow!("Browser startup_timeout_secs must be positive"));
        }

        if self.browser.command_timeout_secs == 0 {
            return Err(anyhow!("Browser command_timeout_secs must be positive"));
        }

        for driver in &self.browser.drivers {
            if driver.port == 0 {
                return Err(anyhow!("Driver port for {} must not be 0", driver.engine));
            }
            if driver.binary.trim().is_empty() {
                return Err(anyhow!("Driver binary for {} must not be empty", driver.engine));
            }
        }

        Ok(())
    }
}

fn validate_http_url(value: &str) -> Result<()> {
    let url = Url::parse(value).context(format!("'{}' is not a URL", value))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(anyhow!("Unsupported URL scheme '{}' in '{}'", scheme, value)),
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            browser: BrowserConfig::default(),
            service: ServiceConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
