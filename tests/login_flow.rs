//! Login flow tests.
//!
//! Require a live WebDriver endpoint (`FINBANK_E2E_WEBDRIVER`); they skip
//! silently without one. Run e.g.:
//!
//!     chromedriver --port=4444
//!     FINBANK_E2E_WEBDRIVER=http://localhost:4444 cargo test --test login_flow

mod common;

use std::time::Duration;

use thirtyfour::By;

use finbank_e2e::pages::HomePage;
use finbank_e2e::{SendKeysOutcome, interact, screenshot, wait};

/// Scenario: valid credentials, all elements appear within their
/// timeouts. The account link becoming visible is the success marker.
#[tokio::test]
async fn successful_login_shows_account_link() {
    let Some((session, config)) = common::browser_session().await else {
        return;
    };
    let driver = session.handle().expect("session is attached");
    let home = HomePage::new();

    common::login_with_valid_credentials(&session, &config).await;

    match wait::wait_for_element(driver, home.account_link.clone(), config.default_timeout()).await
    {
        Ok(link) => {
            wait::wait_for_element_visibility(&link, config.default_timeout())
                .await
                .expect("account link should become interactable");
        }
        Err(e) if e.is_timeout() => {
            screenshot::take_snapshot_in(&session, "login-success-marker", &config.screenshot_dir)
                .await;
            panic!("visibility wait timed out");
        }
        Err(e) => panic!("waiting for account link failed: {e}"),
    }

    session.quit().await.expect("close browser session");
}

/// Scenario: a one-second wait on an element that never appears
/// propagates a timeout instead of being swallowed.
#[tokio::test]
async fn wait_propagates_timeout_for_missing_element() {
    let Some((session, config)) = common::browser_session().await else {
        return;
    };
    let driver = session.handle().expect("session is attached");

    driver
        .goto(config.base_url.as_str())
        .await
        .expect("navigate to application");

    let err = wait::wait_for_element(driver, By::Css("#no-such-element"), Duration::from_secs(1))
        .await
        .expect_err("element must never appear");
    assert!(err.is_timeout(), "expected a timeout, got: {err}");

    session.quit().await.expect("close browser session");
}

/// Scenario: a handle that detached from the page (refresh invalidates
/// every fetched element) degrades to a logged failure outcome, never a
/// panic or propagated error.
#[tokio::test]
async fn safe_send_keys_tolerates_stale_element() {
    let Some((session, config)) = common::browser_session().await else {
        return;
    };
    let driver = session.handle().expect("session is attached");
    let home = HomePage::new();

    driver
        .goto(config.base_url.as_str())
        .await
        .expect("navigate to application");
    let button = wait::wait_for_element(driver, home.login_button.clone(), config.default_timeout())
        .await
        .expect("login button should appear");

    driver.refresh().await.expect("refresh page");

    let outcome =
        interact::safe_send_keys(&session, Some(&button), Some("late"), Duration::from_secs(2))
            .await;
    assert!(
        matches!(outcome, SendKeysOutcome::Failed(_)),
        "expected an interaction failure, got {outcome:?}"
    );

    session.quit().await.expect("close browser session");
}

/// Property: a missing element reference skips with an outcome, not an
/// error, even with a live session.
#[tokio::test]
async fn safe_send_keys_skips_missing_element() {
    let Some((session, _config)) = common::browser_session().await else {
        return;
    };

    let outcome = interact::safe_send_keys(&session, None, Some("x"), Duration::from_secs(1)).await;
    assert_eq!(outcome, SendKeysOutcome::SkippedNoElement);

    session.quit().await.expect("close browser session");
}

/// Property: a `None` value is delivered as the empty string, never as a
/// missing payload.
#[tokio::test]
async fn safe_send_keys_normalizes_missing_value() {
    let Some((session, config)) = common::browser_session().await else {
        return;
    };
    let driver = session.handle().expect("session is attached");
    let home = HomePage::new();
    let login = finbank_e2e::pages::LoginPage::new();
    let timeout = config.default_timeout();

    driver
        .goto(config.base_url.as_str())
        .await
        .expect("navigate to application");
    wait::wait_for_element(driver, home.login_button.clone(), timeout)
        .await
        .expect("login button should appear");
    home.get_login_button(driver)
        .await
        .expect("fetch login button")
        .click()
        .await
        .expect("open login form");

    let email = wait::wait_for_element(driver, login.email_input.clone(), timeout)
        .await
        .expect("email input should appear");

    let outcome = interact::safe_send_keys(&session, Some(&email), None, timeout).await;
    assert!(outcome.succeeded(), "entry degraded: {:?}", outcome.reason());

    let value = email.value().await.expect("read field value");
    assert!(
        value.as_deref().unwrap_or("").is_empty(),
        "expected an empty field, got {value:?}"
    );

    session.quit().await.expect("close browser session");
}
