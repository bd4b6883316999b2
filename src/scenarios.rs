//! Login scenarios, written against the driver contract so they run both
//! under the CLI binary and from integration tests.

use crate::config::SuiteConfig;
use crate::constants::{INVALID_CREDENTIALS_ERROR, INVENTORY_URL_FRAGMENT};
use crate::driver::Driver;
use crate::pages::LoginPage;
use crate::wait::{Probe, Tier, Waiter, measured};
use crate::{Result, SuiteError};
use tracing::{debug, info};

pub const ALL: &[&str] = &["valid-login", "invalid-username"];

pub async fn run<D: Driver>(name: &str, driver: &D, config: &SuiteConfig) -> Result<()> {
    let waiter = Waiter::new(config.wait_config());
    match name {
        "valid-login" => valid_login(driver, config, &waiter).await,
        "invalid-username" => invalid_username(driver, config, &waiter).await,
        other => Err(SuiteError::ScenarioFailed {
            name: other.into(),
            reason: "unknown scenario".into(),
        }),
    }
}

fn failure(name: &str, reason: &str) -> SuiteError {
    SuiteError::ScenarioFailed {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Valid credentials land on the inventory page with no error banner.
pub async fn valid_login<D: Driver>(
    driver: &D,
    config: &SuiteConfig,
    waiter: &Waiter,
) -> Result<()> {
    const NAME: &str = "valid-login";
    let page = LoginPage::new(driver, waiter);

    page.open(&config.base_url).await?;
    page.login(&config.valid_username, &config.valid_password)
        .await?;

    // Mandatory transition: timing out here is a scenario failure.
    let (result, elapsed) = measured(waiter.until_url_contains(
        driver,
        INVENTORY_URL_FRAGMENT,
        Tier::Fast,
    ))
    .await;
    result?;
    debug!(?elapsed, "navigation to inventory confirmed");

    if !page.is_login_successful().await? {
        return Err(failure(NAME, "expected the inventory page after login"));
    }
    if page.is_error_displayed().await? {
        return Err(failure(NAME, "unexpected error banner after valid login"));
    }

    info!(scenario = NAME, "passed");
    Ok(())
}

/// An invalid username keeps the browser on the login page and shows the
/// credentials-mismatch banner.
pub async fn invalid_username<D: Driver>(
    driver: &D,
    config: &SuiteConfig,
    waiter: &Waiter,
) -> Result<()> {
    const NAME: &str = "invalid-username";
    let page = LoginPage::new(driver, waiter);

    page.open(&config.base_url).await?;
    page.login(&config.invalid_username, &config.valid_password)
        .await?;

    // Wait for the banner, then assert: smart_wait itself reports nothing.
    let page_ref = &page;
    waiter
        .smart_wait(
            move || async move {
                Ok(match page_ref.error_message().await? {
                    Some(text) if !text.is_empty() => Probe::Satisfied,
                    _ => Probe::Pending,
                })
            },
            waiter.config().fast,
        )
        .await?;

    if page.is_login_successful().await? {
        return Err(failure(NAME, "login with an invalid username succeeded"));
    }
    if !page.is_error_displayed().await? {
        return Err(failure(NAME, "expected an error banner"));
    }
    let message = page.error_message().await?.unwrap_or_default();
    if !message.contains(INVALID_CREDENTIALS_ERROR) {
        return Err(failure(
            NAME,
            &format!("unexpected error text: {message:?}"),
        ));
    }

    info!(scenario = NAME, "passed");
    Ok(())
}
