//! Credential form page.

use thirtyfour::prelude::*;

use crate::error::Result;

/// Login form with email and password fields.
#[derive(Debug, Clone)]
pub struct LoginPage {
    /// Email input field.
    pub email_input: By,
    /// Password input field.
    pub password_input: By,
    /// Form submit button.
    pub login_button: By,
}

impl LoginPage {
    /// Creates the page object with its locators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            email_input: By::Css("input[name='email']"),
            password_input: By::Css("input[name='password']"),
            login_button: By::Css("button[type='submit']"),
        }
    }

    /// Fetches a fresh handle to the email field.
    pub async fn get_email_input(&self, driver: &WebDriver) -> Result<WebElement> {
        Ok(driver.find(self.email_input.clone()).await?)
    }

    /// Fetches a fresh handle to the password field.
    pub async fn get_password_input(&self, driver: &WebDriver) -> Result<WebElement> {
        Ok(driver.find(self.password_input.clone()).await?)
    }

    /// Fetches a fresh handle to the submit button.
    pub async fn get_login_button(&self, driver: &WebDriver) -> Result<WebElement> {
        Ok(driver.find(self.login_button.clone()).await?)
    }
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}
