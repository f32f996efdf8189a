//! Best-effort element interaction.
//!
//! [`safe_send_keys`] is the fire-and-log counterpart to the
//! hard-propagating waits in [`crate::wait`]: it never returns `Err` and
//! never panics. Each precondition short-circuits with a single logged
//! warning, and the final send is attempted even when the element could
//! not be confirmed interactable. Crashing a whole suite run over one
//! flaky field is worse than a degraded interaction, and the degraded
//! path is still visible to callers through the returned
//! [`SendKeysOutcome`].

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use thirtyfour::prelude::*;
use tracing::{debug, warn};

use crate::session::Session;
use crate::wait::{self, OnTimeout};

// ============================================================================
// SendKeysOutcome
// ============================================================================

/// Result of a [`safe_send_keys`] call.
///
/// Carries the reason a call degraded so callers can act on it instead of
/// only observing logs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum SendKeysOutcome {
    /// The value was delivered to the element.
    Sent,
    /// No live browser session; nothing was attempted.
    SkippedNoSession,
    /// No element reference; nothing was attempted.
    SkippedNoElement,
    /// The send itself failed (e.g. the element detached from the page).
    Failed(String),
}

impl SendKeysOutcome {
    /// Returns `true` if the value reached the element.
    #[inline]
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Returns the reason the call degraded, if it did.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Sent => None,
            Self::SkippedNoSession => Some("no active browser session"),
            Self::SkippedNoElement => Some("no element reference"),
            Self::Failed(message) => Some(message),
        }
    }
}

// ============================================================================
// safe_send_keys
// ============================================================================

/// Types `value` into `element`, tolerating every failure along the way.
///
/// Behavior, in order:
///
/// 1. Detached session: warn and return [`SendKeysOutcome::SkippedNoSession`].
/// 2. Missing element: warn and return [`SendKeysOutcome::SkippedNoElement`].
/// 3. A `None` value is normalized to the empty string.
/// 4. Waits up to `timeout` for visibility and interactability; a timeout
///    here is logged and the send is attempted regardless.
/// 5. Attempts `clear()`; a failure is discarded (some fields reject
///    clear but still accept input).
/// 6. Sends the value; any error is logged and reported as
///    [`SendKeysOutcome::Failed`].
///
/// # Example
///
/// ```ignore
/// let email = login_page.get_email_input(driver).await?;
/// let outcome = safe_send_keys(&session, Some(&email), Some("qa@bank"), timeout).await;
/// assert!(outcome.succeeded());
/// ```
pub async fn safe_send_keys(
    session: &Session,
    element: Option<&WebElement>,
    value: Option<&str>,
    timeout: Duration,
) -> SendKeysOutcome {
    if session.handle().is_none() {
        warn!("safe_send_keys: no active browser session, input not sent");
        return SendKeysOutcome::SkippedNoSession;
    }

    let Some(element) = element else {
        warn!("safe_send_keys: element reference missing, input not sent");
        return SendKeysOutcome::SkippedNoElement;
    };

    if value.is_none() {
        debug!("safe_send_keys: value was None, sending empty string");
    }
    let value = normalize_value(value);

    // SuppressAndLog never errors; the send below is attempted either way.
    let _confirmed = wait::wait_for_interactable(element, timeout, OnTimeout::SuppressAndLog).await;

    if let Err(e) = element.clear().await {
        debug!(error = %e, "safe_send_keys: clear failed, field may still accept input");
    }

    match element.send_keys(value).await {
        Ok(()) => SendKeysOutcome::Sent,
        Err(e) => {
            warn!(error = %e, "safe_send_keys: sending input failed");
            SendKeysOutcome::Failed(e.to_string())
        }
    }
}

/// Normalizes a nullable value so a missing payload never reaches the
/// element as anything but the empty string.
pub(crate) fn normalize_value(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

// ============================================================================
// Tests
// ============================================================================
