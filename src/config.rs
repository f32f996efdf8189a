//! Suite configuration loading.
//!
//! Replaces the classic `config.properties` + `getProperty(key)` pattern
//! with a typed struct deserialized from TOML. Tests read credentials and
//! the target URL from here; the wait/interaction helpers never touch
//! configuration directly.
//!
//! Resolution order used by [`SuiteConfig::from_env`]:
//!
//! 1. TOML file at `$FINBANK_E2E_CONFIG` (default `config/e2e.toml`)
//! 2. Per-field environment overrides (`FINBANK_E2E_BASE_URL`, ...) so CI
//!    can inject credentials without writing files.

// ============================================================================
// Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Default config file path, relative to the crate root.
pub const DEFAULT_CONFIG_PATH: &str = "config/e2e.toml";

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "FINBANK_E2E_CONFIG";

/// Env var with the WebDriver endpoint. Doubles as the gate for the
/// browser-backed integration tests: when unset, those tests skip.
pub const WEBDRIVER_ENV: &str = "FINBANK_E2E_WEBDRIVER";

const BASE_URL_ENV: &str = "FINBANK_E2E_BASE_URL";
const EMAIL_ENV: &str = "FINBANK_E2E_EMAIL";
const PASSWORD_ENV: &str = "FINBANK_E2E_PASSWORD";
const SCREENSHOT_DIR_ENV: &str = "FINBANK_E2E_SCREENSHOT_DIR";

// ============================================================================
// SuiteConfig
// ============================================================================

/// Configuration for one suite run.
///
/// # Example
///
/// ```ignore
/// let config = SuiteConfig::from_env()?;
/// let session = Session::connect(&config).await?;
/// session.handle().unwrap().goto(config.base_url.as_str()).await?;
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Target application URL.
    pub base_url: Url,

    /// WebDriver server endpoint (chromedriver / geckodriver / Selenium).
    pub webdriver_url: Url,

    /// Credentials for the happy-path login flow.
    pub valid_email: String,

    /// Password matching [`SuiteConfig::valid_email`].
    pub valid_password: String,

    /// Run the browser headless. Defaults to `true`.
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Directory screenshots are written to.
    #[serde(default = "default_screenshot_dir")]
    pub screenshot_dir: PathBuf,

    /// Default element wait timeout, in whole seconds.
    ///
    /// Tests may pass any per-call timeout; this is only the value they
    /// reach for when they have no specific reason to differ.
    #[serde(default = "default_timeout_secs")]
    pub default_timeout_secs: u64,
}

fn default_headless() -> bool {
    true
}

fn default_screenshot_dir() -> PathBuf {
    PathBuf::from("target/screenshots")
}

fn default_timeout_secs() -> u64 {
    22
}

// ============================================================================
// SuiteConfig - Loading
// ============================================================================

impl SuiteConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Loads configuration from the file named by `FINBANK_E2E_CONFIG`
    /// (default `config/e2e.toml`), then applies env-var overrides.
    pub fn from_env() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Applies per-field environment overrides in place.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = env::var(BASE_URL_ENV) {
            self.base_url = parse_url(BASE_URL_ENV, &value)?;
        }
        if let Ok(value) = env::var(WEBDRIVER_ENV) {
            self.webdriver_url = parse_url(WEBDRIVER_ENV, &value)?;
        }
        if let Ok(value) = env::var(EMAIL_ENV) {
            self.valid_email = value;
        }
        if let Ok(value) = env::var(PASSWORD_ENV) {
            self.valid_password = value;
        }
        if let Ok(value) = env::var(SCREENSHOT_DIR_ENV) {
            self.screenshot_dir = PathBuf::from(value);
        }
        Ok(())
    }
}

fn parse_url(name: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| Error::config(format!("{name}: {e}")))
}

// ============================================================================
// SuiteConfig - Accessors
// ============================================================================

impl SuiteConfig {
    /// Returns the default wait timeout as a [`Duration`].
    #[inline]
    #[must_use]
    pub fn default_timeout(&self) -> Duration {
        Duration::from_secs(self.default_timeout_secs)
    }
}

// ============================================================================
// Tests
// ============================================================================
