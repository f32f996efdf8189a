//! FinisBank E2E - Browser end-to-end test suite for the FinisBank web
//! application.
//!
//! Page Object Model suite on top of the [`thirtyfour`] WebDriver client.
//! The library half of the crate holds the page objects and the shared
//! helpers; the actual flows live under `tests/` and are gated on a live
//! WebDriver endpoint.
//!
//! # Design
//!
//! Two failure policies coexist deliberately:
//!
//! - **Hard propagation**: [`wait::wait_for_element_visibility`] returns
//!   [`Error::Timeout`] when an element never becomes interactable. Tests
//!   convert that into an assertion failure.
//! - **Fire-and-log**: [`interact::safe_send_keys`] and
//!   [`screenshot::take_snapshot`] never error. They log every caught
//!   condition and report an outcome value ([`SendKeysOutcome`], the
//!   written path) the caller may inspect or ignore.
//!
//! The session handle is threaded explicitly ([`Session`]) rather than
//! held in a static, so concurrent tests with independent browsers need
//! no shared state.
//!
//! # Quick Start
//!
//! ```no_run
//! use finbank_e2e::pages::{HomePage, LoginPage};
//! use finbank_e2e::{Result, Session, SuiteConfig, interact, wait};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = SuiteConfig::from_env()?;
//!     let session = Session::connect(&config).await?;
//!     let driver = session.handle().expect("just connected");
//!
//!     driver.goto(config.base_url.as_str()).await?;
//!
//!     let home = HomePage::new();
//!     let login = LoginPage::new();
//!     let timeout = config.default_timeout();
//!
//!     wait::wait_for_element(driver, home.login_button.clone(), timeout).await?;
//!     home.get_login_button(driver).await?.click().await?;
//!
//!     let email = wait::wait_for_element(driver, login.email_input.clone(), timeout).await?;
//!     let outcome =
//!         interact::safe_send_keys(&session, Some(&email), Some(&config.valid_email), timeout).await;
//!     assert!(outcome.succeeded());
//!
//!     session.quit().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Suite configuration: target URL, credentials, timeouts |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`interact`] | Best-effort element interaction (fire-and-log) |
//! | [`pages`] | Page objects: [`pages::HomePage`], [`pages::LoginPage`], [`pages::AccountPage`] |
//! | [`screenshot`] | Failure screenshot capture |
//! | [`session`] | Browser session handle |
//! | [`wait`] | Element synchronization helpers |

// ============================================================================
// Modules
// ============================================================================

/// Suite configuration loading.
pub mod config;

/// Error types and result aliases.
pub mod error;

/// Best-effort element interaction.
pub mod interact;

/// Page objects for the FinisBank web application.
pub mod pages;

/// Failure screenshot capture.
pub mod screenshot;

/// Browser session handle.
pub mod session;

/// Element synchronization helpers.
pub mod wait;

// ============================================================================
// Re-exports
// ============================================================================

// Configuration
pub use config::SuiteConfig;

// Error types
pub use error::{Error, Result};

// Interaction
pub use interact::SendKeysOutcome;

// Session
pub use session::Session;

// Synchronization
pub use wait::OnTimeout;
