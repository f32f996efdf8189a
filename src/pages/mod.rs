//! Page objects for the FinisBank web application.
//!
//! One struct per page, each holding its locators as public
//! [`thirtyfour::By`] fields and accessor methods that take the driver
//! handle and perform a fresh lookup on every call. Nothing is cached: a
//! handle becomes stale as soon as the page mutates, and callers tolerate
//! that by re-fetching through the accessor.
//!
//! | Page | Covers |
//! |------|--------|
//! | [`HomePage`] | Landing page: login entry point, account link |
//! | [`LoginPage`] | Credential form |
//! | [`AccountPage`] | Account details: balance, IBAN, credit link |

mod account;
mod home;
mod login;

pub use account::AccountPage;
pub use home::HomePage;
pub use login::LoginPage;
