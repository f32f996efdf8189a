//! Shared setup for the browser-backed tests.
//!
//! Every test calls [`browser_session`] first: it installs the tracing
//! subscriber, and unless `FINBANK_E2E_WEBDRIVER` points at a live
//! WebDriver server it returns `None` so the test skips instead of
//! failing in environments without a browser.

use std::env;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

use finbank_e2e::config::WEBDRIVER_ENV;
use finbank_e2e::pages::{HomePage, LoginPage};
use finbank_e2e::{Session, SuiteConfig, interact, wait};

static TRACING: Once = Once::new();

/// Installs the log subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// Opens a browser session, or returns `None` when no WebDriver endpoint
/// is configured.
pub async fn browser_session() -> Option<(Session, SuiteConfig)> {
    init_tracing();

    if env::var(WEBDRIVER_ENV).is_err() {
        eprintln!("skipping browser test: {WEBDRIVER_ENV} is not set");
        return None;
    }

    let config = SuiteConfig::from_env().expect("suite configuration should load");
    let session = Session::connect(&config)
        .await
        .expect("browser session should open");
    Some((session, config))
}

/// Drives the login flow with the configured valid credentials, up to and
/// including submitting the form.
#[allow(dead_code)]
pub async fn login_with_valid_credentials(session: &Session, config: &SuiteConfig) {
    let driver = session.handle().expect("session is attached");
    let home = HomePage::new();
    let login = LoginPage::new();
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
    wait::wait_for_element_visibility(&email, timeout)
        .await
        .expect("email input should become interactable");

    let outcome =
        interact::safe_send_keys(session, Some(&email), Some(&config.valid_email), timeout).await;
    assert!(outcome.succeeded(), "email entry degraded: {:?}", outcome.reason());

    let password = login
        .get_password_input(driver)
        .await
        .expect("fetch password input");
    let outcome =
        interact::safe_send_keys(session, Some(&password), Some(&config.valid_password), timeout)
            .await;
    assert!(
        outcome.succeeded(),
        "password entry degraded: {:?}",
        outcome.reason()
    );

    let submit = wait::wait_for_element(driver, login.login_button.clone(), timeout)
        .await
        .expect("submit button should appear");
    wait::wait_for_element_visibility(&submit, timeout)
        .await
        .expect("submit button should become interactable");
    submit.click().await.expect("submit login form");
}
