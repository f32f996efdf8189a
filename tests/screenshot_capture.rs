//! Screenshot capture tests against a live browser.
//!
//! Require a live WebDriver endpoint (`FINBANK_E2E_WEBDRIVER`); they skip
//! silently without one. The filename-collision behavior is covered by
//! unit tests in `src/screenshot.rs`; these exercise the real capture
//! path.

mod common;

use std::fs;

use finbank_e2e::screenshot;

/// A capture against a live page writes a non-empty PNG and returns its
/// path.
#[tokio::test]
async fn capture_writes_png_and_returns_path() {
    let Some((session, config)) = common::browser_session().await else {
        return;
    };
    let driver = session.handle().expect("session is attached");
    let dir = tempfile::tempdir().expect("create temp dir");

    driver
        .goto(config.base_url.as_str())
        .await
        .expect("navigate to application");

    let path = screenshot::take_snapshot_in(&session, "smoke", dir.path())
        .await
        .expect("capture should yield a path");

    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
    let bytes = fs::read(&path).expect("read written screenshot");
    assert!(!bytes.is_empty(), "screenshot file should not be empty");
    // PNG magic header.
    assert_eq!(&bytes[..4], b"\x89PNG");

    session.quit().await.expect("close browser session");
}
