pub mod chrome;
pub mod cli;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod pages;
pub mod scenarios;
pub mod timeouts;
pub mod wait;

pub use config::SuiteConfig;
pub use driver::{Driver, Locator};
pub use error::SuiteError;
pub use wait::{Probe, Tier, WaitConfig, Waiter};

pub type Result<T> = std::result::Result<T, SuiteError>;
