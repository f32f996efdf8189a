//! Failure screenshot capture.
//!
//! Fire-and-log boundary component: capturing a screenshot must never
//! abort a test run, so every capture or IO failure is logged and
//! reported as `None`. The written path is returned to the caller
//! instead of being parked in process-wide state, which keeps parallel
//! tests race-free.
//!
//! Known limitation, preserved from the original suite: filenames are
//! timestamps at second precision, so two captures within the same
//! wall-clock second resolve to the same path and the second write
//! overwrites the first.

// ============================================================================
// Imports
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::session::Session;

// ============================================================================
// Constants
// ============================================================================

/// Default output directory, relative to the crate root.
pub const DEFAULT_SCREENSHOT_DIR: &str = "target/screenshots";

/// Timestamp layout for filenames. No spaces or colons, so the names are
/// safe on every platform.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

// ============================================================================
// Capture
// ============================================================================

/// Captures the current page into [`DEFAULT_SCREENSHOT_DIR`].
///
/// See [`take_snapshot_in`].
pub async fn take_snapshot(session: &Session, label: &str) -> Option<PathBuf> {
    take_snapshot_in(session, label, Path::new(DEFAULT_SCREENSHOT_DIR)).await
}

/// Captures the current page as PNG into `dir` and returns the written
/// path.
///
/// `label` identifies the call site in logs; it does not influence the
/// filename. Returns `None` (after logging) when the session is
/// detached, the directory cannot be created, the capture fails, or the
/// write fails.
pub async fn take_snapshot_in(session: &Session, label: &str, dir: &Path) -> Option<PathBuf> {
    let Some(driver) = session.handle() else {
        warn!(label, "take_snapshot: no active browser session, skipping capture");
        return None;
    };

    if let Err(e) = fs::create_dir_all(dir) {
        warn!(label, dir = %dir.display(), error = %e, "take_snapshot: cannot create directory");
        return None;
    }

    let path = snapshot_path(dir, Local::now());

    let png = match driver.screenshot_as_png().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(label, error = %e, "take_snapshot: capture failed");
            return None;
        }
    };

    match fs::write(&path, png) {
        Ok(()) => {
            info!(label, path = %path.display(), "Screenshot saved");
            Some(path)
        }
        Err(e) => {
            warn!(label, path = %path.display(), error = %e, "take_snapshot: write failed");
            None
        }
    }
}

// ============================================================================
// Paths
// ============================================================================

/// Builds the output path for a capture taken at `now`.
fn snapshot_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("{}.png", now.format(TIMESTAMP_FORMAT)))
}

// ============================================================================
// Tests
// ============================================================================
