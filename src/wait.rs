//! Element synchronization helpers.
//!
//! Thin layer over the WebDriver client's own element waiter: no bespoke
//! polling loop, no retries beyond the library's internal poll cycle, no
//! backoff. A wait either confirms the element is visible AND
//! interactable or times out.
//!
//! Timeout handling is an explicit policy rather than two hardcoded
//! behaviors:
//!
//! - [`OnTimeout::Propagate`] escalates as [`Error::Timeout`] — used by
//!   [`wait_for_element_visibility`], which tests convert into assertion
//!   failures.
//! - [`OnTimeout::SuppressAndLog`] logs a warning and reports
//!   non-confirmation — used by the best-effort interaction path in
//!   [`crate::interact`].

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use thirtyfour::error::WebDriverError;
use thirtyfour::prelude::*;
use tracing::{debug, warn};

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Poll interval handed to the client's waiter.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

// ============================================================================
// OnTimeout
// ============================================================================

/// Policy applied when a wait condition is not met in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnTimeout {
    /// Return [`Error::Timeout`] to the caller.
    #[default]
    Propagate,
    /// Log a warning and report non-confirmation; never error.
    SuppressAndLog,
}

// ============================================================================
// Waits
// ============================================================================

/// Waits until `element` is both displayed and clickable.
///
/// Hard-propagation contract: a timeout is returned as
/// [`Error::Timeout`], never swallowed here. Callers are expected to
/// convert it into an explicit test failure.
pub async fn wait_for_element_visibility(element: &WebElement, timeout: Duration) -> Result<()> {
    wait_for_interactable(element, timeout, OnTimeout::Propagate)
        .await
        .map(|_| ())
}

/// Waits until `element` is displayed and clickable, applying `on_timeout`
/// when the condition is not met.
///
/// Returns `Ok(true)` when the element was confirmed interactable. With
/// [`OnTimeout::SuppressAndLog`] every failure is logged and reported as
/// `Ok(false)`; with [`OnTimeout::Propagate`] it becomes an `Err`.
pub async fn wait_for_interactable(
    element: &WebElement,
    timeout: Duration,
    on_timeout: OnTimeout,
) -> Result<bool> {
    match await_interactable(element, timeout).await {
        Ok(()) => {
            debug!(element = ?element, "Element visible and interactable");
            Ok(true)
        }
        Err(e) => match on_timeout {
            OnTimeout::Propagate => Err(classify_wait_error(e, "visibility wait", timeout)),
            OnTimeout::SuppressAndLog => {
                warn!(
                    error = %e,
                    timeout_ms = timeout.as_millis() as u64,
                    "Element not visible/interactable in time, continuing anyway"
                );
                Ok(false)
            }
        },
    }
}

/// Waits for an element matching `by` to be present in the DOM and
/// returns a fresh handle to it.
///
/// Presence only; chain [`wait_for_element_visibility`] on the returned
/// handle to additionally confirm it can be interacted with.
pub async fn wait_for_element(driver: &WebDriver, by: By, timeout: Duration) -> Result<WebElement> {
    match driver
        .query(by.clone())
        .wait(timeout, POLL_INTERVAL)
        .first()
        .await
    {
        Ok(element) => Ok(element),
        Err(e @ (WebDriverError::Timeout(_) | WebDriverError::NoSuchElement(_))) => {
            debug!(locator = ?by, error = %e, "Element did not appear");
            Err(Error::timeout(format!("element {by:?} did not appear"), timeout))
        }
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// Internal
// ============================================================================

/// Runs the two-stage displayed-then-clickable wait via the client's
/// native waiter.
async fn await_interactable(
    element: &WebElement,
    timeout: Duration,
) -> std::result::Result<(), WebDriverError> {
    element
        .wait_until()
        .wait(timeout, POLL_INTERVAL)
        .displayed()
        .await?;
    element
        .wait_until()
        .wait(timeout, POLL_INTERVAL)
        .clickable()
        .await?;
    Ok(())
}

/// Maps a waiter failure onto the crate error type.
///
/// The client reports an unmet condition as its own timeout error; other
/// variants (lost connection, stale element) pass through unchanged.
fn classify_wait_error(e: WebDriverError, operation: &str, timeout: Duration) -> Error {
    match e {
        WebDriverError::Timeout(_) => Error::timeout(operation, timeout),
        other => Error::WebDriver(other),
    }
}

// ============================================================================
// Tests
// ============================================================================
