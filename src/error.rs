//! Error types for the FinisBank E2E suite.
//!
//! Two failure policies coexist in this crate by design:
//!
//! - **Hard propagation**: synchronization waits ([`crate::wait`]) return
//!   [`Result`] and timeouts escalate to the caller, which converts them
//!   into an explicit test failure.
//! - **Fire-and-log**: best-effort helpers ([`crate::interact`],
//!   [`crate::screenshot`]) never return `Err`; they log the condition and
//!   report an outcome value instead.
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`], [`Error::TomlParse`] |
//! | Synchronization | [`Error::Timeout`] |
//! | External | [`Error::WebDriver`], [`Error::Io`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;
use std::time::Duration;

use thirtyfour::error::WebDriverError;
use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All hard-propagation operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the suite.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Returned when the suite configuration is missing or invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// Wait condition was not met within the timeout window.
    ///
    /// Raised by the synchronization helper and never swallowed at that
    /// layer; tests convert it into an assertion failure.
    #[error("Timeout after {timeout_ms}ms: {operation}")]
    Timeout {
        /// Description of the operation that timed out.
        operation: String,
        /// Milliseconds waited before timeout.
        timeout_ms: u64,
    },

    /// Error from the underlying WebDriver client.
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] WebDriverError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// TOML configuration parse error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a timeout error for a wait operation.
    #[inline]
    pub fn timeout(operation: impl Into<String>, waited: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_ms: waited.as_millis() as u64,
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a timeout error.
    ///
    /// Covers both this crate's [`Error::Timeout`] and a timeout surfaced
    /// by the WebDriver client itself.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::WebDriver(WebDriverError::Timeout(_))
        )
    }

    /// Returns `true` if this is a configuration error.
    #[inline]
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::TomlParse(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
