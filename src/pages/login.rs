//! Page object for the Swag Labs login page.

use crate::constants::INVENTORY_URL_FRAGMENT;
use crate::driver::{Driver, Locator};
use crate::wait::{Tier, Waiter};
use crate::{Result, SuiteError};

pub struct LoginPage<'a, D: Driver> {
    driver: &'a D,
    waiter: &'a Waiter,
    username_field: Locator,
    password_field: Locator,
    login_button: Locator,
    error_message: Locator,
}

impl<'a, D: Driver> LoginPage<'a, D> {
    pub fn new(driver: &'a D, waiter: &'a Waiter) -> Self {
        Self {
            driver,
            waiter,
            username_field: Locator::id("user-name"),
            password_field: Locator::id("password"),
            login_button: Locator::id("login-button"),
            error_message: Locator::css("[data-test='error']"),
        }
    }

    /// Navigates to the login page and waits for the core form elements.
    pub async fn open(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        for locator in [&self.username_field, &self.login_button] {
            if self
                .waiter
                .element_visible(self.driver, locator, Tier::Medium)
                .await?
                .is_none()
            {
                return Err(SuiteError::ElementNotFound {
                    locator: locator.to_string(),
                });
            }
        }
        Ok(())
    }

    pub async fn enter_username(&self, username: &str) -> Result<()> {
        self.driver.type_text(&self.username_field, username).await
    }

    pub async fn enter_password(&self, password: &str) -> Result<()> {
        self.driver.type_text(&self.password_field, password).await
    }

    pub async fn submit(&self) -> Result<()> {
        self.driver.click(&self.login_button).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.enter_username(username).await?;
        self.enter_password(password).await?;
        self.submit().await
    }

    pub async fn error_message(&self) -> Result<Option<String>> {
        self.driver.element_text(&self.error_message).await
    }

    pub async fn is_error_displayed(&self) -> Result<bool> {
        Ok(self
            .driver
            .visible_element(&self.error_message)
            .await?
            .is_some())
    }

    /// Login succeeded once the browser has moved on to the inventory page.
    pub async fn is_login_successful(&self) -> Result<bool> {
        Ok(self
            .driver
            .current_url()
            .await?
            .contains(INVENTORY_URL_FRAGMENT))
    }
}
