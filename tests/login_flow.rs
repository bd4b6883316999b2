//! End-to-end login scenarios against a live Chromium.
//!
//! Ignored by default: these need a Chromium binary on PATH and network
//! access to https://www.saucedemo.com.
//!
//! Run with: cargo test --test login_flow -- --ignored

use std::path::Path;
use swaglabs_suite::chrome::ChromeSession;
use swaglabs_suite::{SuiteConfig, scenarios};

fn load_config() -> SuiteConfig {
    SuiteConfig::load(Path::new("suite.toml")).expect("suite.toml must be present and complete")
}

#[tokio::test]
#[ignore = "requires a Chromium binary and network access"]
async fn valid_login_reaches_the_inventory_page() {
    let config = load_config();
    let session = ChromeSession::launch(true).await.unwrap();
    let outcome = scenarios::run("valid-login", &session, &config).await;
    session.close().await.unwrap();
    outcome.unwrap();
}

#[tokio::test]
#[ignore = "requires a Chromium binary and network access"]
async fn invalid_username_shows_the_credentials_error() {
    let config = load_config();
    let session = ChromeSession::launch(true).await.unwrap();
    let outcome = scenarios::run("invalid-username", &session, &config).await;
    session.close().await.unwrap();
    outcome.unwrap();
}
