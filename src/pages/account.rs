//! Account details page.

use thirtyfour::prelude::*;

use crate::error::Result;

/// Account page: balance, account number, IBAN, and the credit
/// application entry point.
#[derive(Debug, Clone)]
pub struct AccountPage {
    /// Page heading.
    pub account_title: By,
    /// Account number inside the details card.
    pub account_number: By,
    /// Current balance figure.
    pub balance: By,
    /// IBAN inside the details card.
    pub iban_number: By,
    /// Link into the credit application flow.
    pub credit_application_link: By,
    /// The details card itself.
    pub account_details: By,
}

impl AccountPage {
    /// Creates the page object with its locators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            account_title: By::Css("h2"),
            account_number: By::Css(".account-details .account-number"),
            balance: By::XPath("//div[contains(@class,'statValueGreen')]"),
            iban_number: By::Css(".account-details .iban"),
            credit_application_link: By::LinkText("Kredi Başvurusu"),
            account_details: By::Css(".account-details"),
        }
    }

    /// Fetches a fresh handle to the page heading.
    pub async fn get_account_title(&self, driver: &WebDriver) -> Result<WebElement> {
        Ok(driver.find(self.account_title.clone()).await?)
    }

    /// Fetches a fresh handle to the account number.
    pub async fn get_account_number(&self, driver: &WebDriver) -> Result<WebElement> {
        Ok(driver.find(self.account_number.clone()).await?)
    }

    /// Fetches a fresh handle to the balance figure.
    pub async fn get_balance(&self, driver: &WebDriver) -> Result<WebElement> {
        Ok(driver.find(self.balance.clone()).await?)
    }

    /// Fetches a fresh handle to the IBAN.
    pub async fn get_iban_number(&self, driver: &WebDriver) -> Result<WebElement> {
        Ok(driver.find(self.iban_number.clone()).await?)
    }

    /// Fetches a fresh handle to the credit application link.
    pub async fn get_credit_application_link(&self, driver: &WebDriver) -> Result<WebElement> {
        Ok(driver.find(self.credit_application_link.clone()).await?)
    }

    /// Fetches a fresh handle to the details card.
    pub async fn get_account_details(&self, driver: &WebDriver) -> Result<WebElement> {
        Ok(driver.find(self.account_details.clone()).await?)
    }
}

impl Default for AccountPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locators() {
        let page = AccountPage::new();
        assert!(format!("{:?}", page.account_number).contains(".account-number"));
        assert!(format!("{:?}", page.balance).contains("statValueGreen"));
        assert!(format!("{:?}", page.credit_application_link).contains("Kredi Başvurusu"));
    }
}
