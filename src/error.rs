use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("Failed to launch Chrome: {0}")]
    LaunchFailed(String),

    #[error("Browser connection error: {0}")]
    Connection(String),

    #[error("Navigation timeout after {0}s")]
    NavigationTimeout(u64),

    #[error("Timed out after {seconds}s waiting for {condition}")]
    WaitTimeout { condition: String, seconds: u64 },

    #[error("Element not found: {locator}")]
    ElementNotFound { locator: String },

    #[error("JavaScript evaluation failed: {0}")]
    EvaluationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Scenario '{name}' failed: {reason}")]
    ScenarioFailed { name: String, reason: String },

    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeError(#[from] toml::de::Error),
}

impl SuiteError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LaunchFailed(_) => vec![
                "Ensure Chrome/Chromium is installed".into(),
                "Check if another Chrome instance is using the debugging port".into(),
            ],
            Self::NavigationTimeout(_) | Self::WaitTimeout { .. } => vec![
                "Increase the wait tier timeouts in suite.toml".into(),
                "Check network connectivity".into(),
            ],
            Self::ElementNotFound { locator } => vec![
                "Verify the locator matches the current page markup".into(),
                format!("Check if '{}' exists on the page", locator),
            ],
            Self::ConfigError(_) | Self::TomlDeError(_) => vec![
                "Check suite.toml syntax".into(),
                "All timeout and credential keys are required".into(),
            ],
            _ => vec!["Run with --verbose for more details".into()],
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::LaunchFailed(_) | Self::Connection(_) => 3,
            Self::NavigationTimeout(_) | Self::WaitTimeout { .. } => 4,
            Self::ElementNotFound { .. } => 5,
            Self::IoError(_) => 6,
            Self::ConfigError(_) | Self::TomlDeError(_) => 7,
            Self::ScenarioFailed { .. } => 8,
            _ => 1,
        }
    }
}
