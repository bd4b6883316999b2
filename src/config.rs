use crate::wait::WaitConfig;
use crate::{Result, SuiteError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Suite configuration, loaded once at startup from a flat camelCase-keyed
/// TOML file (`suite.toml` by default) and immutable afterwards.
///
/// Every key is required. A missing or malformed key fails the load
/// immediately rather than defaulting, so a misconfigured CI run dies loudly
/// at startup instead of timing out halfway through a scenario.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SuiteConfig {
    pub base_url: String,
    pub headless: bool,
    pub valid_username: String,
    pub valid_password: String,
    pub invalid_username: String,
    pub invalid_password: String,
    /// Delay between condition re-checks in polling loops, in milliseconds.
    pub smart_wait_polling_interval: u64,
    /// Segment count for the retry-segmented clickable wait.
    pub smart_wait_max_retries: u32,
    /// FAST tier duration, seconds.
    pub fast_wait_timeout: u64,
    /// MEDIUM tier duration, seconds.
    pub medium_wait_timeout: u64,
    /// LONG tier duration, seconds.
    pub long_wait_timeout: u64,
}

impl SuiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SuiteError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.smart_wait_polling_interval == 0 {
            return Err(SuiteError::ConfigError(
                "smartWaitPollingInterval must be positive".into(),
            ));
        }
        if self.smart_wait_max_retries == 0 {
            return Err(SuiteError::ConfigError(
                "smartWaitMaxRetries must be at least 1".into(),
            ));
        }
        for (key, value) in [
            ("fastWaitTimeout", self.fast_wait_timeout),
            ("mediumWaitTimeout", self.medium_wait_timeout),
            ("longWaitTimeout", self.long_wait_timeout),
        ] {
            if value == 0 {
                return Err(SuiteError::ConfigError(format!("{key} must be positive")));
            }
        }
        Ok(())
    }

    /// The wait-engine subset, handed to [`crate::wait::Waiter::new`].
    pub fn wait_config(&self) -> WaitConfig {
        WaitConfig {
            polling_interval: Duration::from_millis(self.smart_wait_polling_interval),
            max_retries: self.smart_wait_max_retries,
            fast: Duration::from_secs(self.fast_wait_timeout),
            medium: Duration::from_secs(self.medium_wait_timeout),
            long: Duration::from_secs(self.long_wait_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"
baseUrl = "https://www.saucedemo.com"
headless = true
validUsername = "standard_user"
validPassword = "secret_sauce"
invalidUsername = "locked_out_user_typo"
invalidPassword = "wrong_sauce"
smartWaitPollingInterval = 250
smartWaitMaxRetries = 3
fastWaitTimeout = 2
mediumWaitTimeout = 5
longWaitTimeout = 10
"#;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_complete_config() {
        let file = write_config(VALID);
        let config = SuiteConfig::load(file.path()).unwrap();
        assert_eq!(config.base_url, "https://www.saucedemo.com");
        assert_eq!(config.smart_wait_polling_interval, 250);
        assert_eq!(config.wait_config().fast, Duration::from_secs(2));
    }

    #[test]
    fn missing_key_fails_loudly() {
        let file = write_config(&VALID.replace("fastWaitTimeout = 2\n", ""));
        assert!(matches!(
            SuiteConfig::load(file.path()),
            Err(SuiteError::TomlDeError(_))
        ));
    }

    #[test]
    fn malformed_value_fails_loudly() {
        let file = write_config(&VALID.replace(
            "smartWaitPollingInterval = 250",
            "smartWaitPollingInterval = \"fast\"",
        ));
        assert!(matches!(
            SuiteConfig::load(file.path()),
            Err(SuiteError::TomlDeError(_))
        ));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let file = write_config(&format!("{VALID}mediumWaitTimeoutSecs = 7\n"));
        assert!(matches!(
            SuiteConfig::load(file.path()),
            Err(SuiteError::TomlDeError(_))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let file = write_config(&VALID.replace("longWaitTimeout = 10", "longWaitTimeout = 0"));
        assert!(matches!(
            SuiteConfig::load(file.path()),
            Err(SuiteError::ConfigError(_))
        ));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        assert!(matches!(
            SuiteConfig::load(Path::new("/nonexistent/suite.toml")),
            Err(SuiteError::ConfigError(_))
        ));
    }
}
