//! Landing page.

use thirtyfour::prelude::*;

use crate::error::Result;

/// Landing page of the application.
///
/// The login button is present before authentication; the account link
/// only becomes visible once a login succeeds, which makes it the
/// success marker for the login flow.
#[derive(Debug, Clone)]
pub struct HomePage {
    /// Entry point into the credential form.
    pub login_button: By,
    /// Link to the account page, visible after login.
    pub account_link: By,
}

impl HomePage {
    /// Creates the page object with its locators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            login_button: By::LinkText("Giriş Yap"),
            account_link: By::LinkText("Hesabım"),
        }
    }

    /// Fetches a fresh handle to the login button.
    pub async fn get_login_button(&self, driver: &WebDriver) -> Result<WebElement> {
        Ok(driver.find(self.login_button.clone()).await?)
    }

    /// Fetches a fresh handle to the account link.
    pub async fn get_account_link(&self, driver: &WebDriver) -> Result<WebElement> {
        Ok(driver.find(self.account_link.clone()).await?)
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}
