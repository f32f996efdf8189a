//! Browser session handle.
//!
//! [`Session`] wraps the live [`WebDriver`] handle and is threaded
//! explicitly through every helper, replacing the classic static
//! singleton accessor. A session without a live handle (see
//! [`Session::detached`]) is the "null driver" case: the best-effort
//! helpers log a warning and no-op instead of failing the whole run.
//!
//! Lifecycle is owned by the tests: one session per test, opened in setup
//! and closed with [`Session::quit`] in teardown. The suite assumes one
//! test task drives one browser at a time; concurrent tests each carry
//! their own `Session`.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use thirtyfour::prelude::*;
use tracing::{debug, info};

use crate::config::SuiteConfig;
use crate::error::Result;

// ============================================================================
// Session
// ============================================================================

/// Handle to one browser session.
///
/// # Example
///
/// ```ignore
/// let config = SuiteConfig::from_env()?;
/// let session = Session::connect(&config).await?;
///
/// if let Some(driver) = session.handle() {
///     driver.goto(config.base_url.as_str()).await?;
/// }
///
/// session.quit().await?;
/// ```
pub struct Session {
    driver: Option<WebDriver>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("attached", &self.driver.is_some())
            .finish()
    }
}

// ============================================================================
// Session - Constructors
// ============================================================================

impl Session {
    /// Wraps an already-open WebDriver handle.
    #[must_use]
    pub fn attached(driver: WebDriver) -> Self {
        Self {
            driver: Some(driver),
        }
    }

    /// Creates a session with no live browser.
    ///
    /// Helpers treat this as the missing-driver case: they log and no-op
    /// rather than panic, so one broken setup cannot take down a run.
    #[must_use]
    pub fn detached() -> Self {
        Self { driver: None }
    }

    /// Opens a new browser session against the configured WebDriver server.
    pub async fn connect(config: &SuiteConfig) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.set_headless()?;
        }

        info!(webdriver_url = %config.webdriver_url, "Opening browser session");
        let driver = WebDriver::new(config.webdriver_url.as_str(), caps).await?;

        Ok(Self::attached(driver))
    }
}

// ============================================================================
// Session - Accessors
// ============================================================================

impl Session {
    /// Returns the live WebDriver handle, if any.
    #[inline]
    #[must_use]
    pub fn handle(&self) -> Option<&WebDriver> {
        self.driver.as_ref()
    }

    /// Returns `true` if a live handle is attached.
    #[inline]
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.driver.is_some()
    }
}

// ============================================================================
// Session - Teardown
// ============================================================================

impl Session {
    /// Closes the browser session.
    ///
    /// A detached session quits trivially.
    pub async fn quit(self) -> Result<()> {
        match self.driver {
            Some(driver) => {
                debug!("Closing browser session");
                driver.quit().await?;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_session_has_no_handle() {
        let session = Session::detached();
        assert!(session.handle().is_none());
        assert!(!session.is_attached());
    }

    #[tokio::test]
    async fn test_detached_session_quits_cleanly() {
        let session = Session::detached();
        session.quit().await.unwrap();
    }

    #[test]
    fn test_debug_does_not_require_driver() {
        let session = Session::detached();
        assert_eq!(format!("{session:?}"), "Session { attached: false }");
    }
}
