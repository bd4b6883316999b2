//! Driver capability contract.
//!
//! The wait engine and page objects are written against this trait rather
//! than a concrete browser session, so suites can run against the real
//! Chromium implementation in [`crate::chrome`] or a scripted fake in tests.

use crate::Result;
use std::fmt;

/// Element locator. Rendered to a CSS selector before hitting the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Css(String),
    Id(String),
    ClassName(String),
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn class_name(name: impl Into<String>) -> Self {
        Self::ClassName(name.into())
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Css(selector) => selector.clone(),
            Self::Id(id) => format!("#{id}"),
            Self::ClassName(name) => format!(".{name}"),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// One browser session, owned by a single caller.
///
/// Lookup methods are non-waiting probes: `Ok(None)` means the element is
/// not there (or not in the requested state) right now, which polling loops
/// treat as pending. `Err` means the session itself failed and is never
/// tolerated by a loop.
#[async_trait::async_trait]
pub trait Driver: Send + Sync {
    type Element: Send;

    async fn goto(&self, url: &str) -> Result<()>;

    async fn current_url(&self) -> Result<String>;

    async fn title(&self) -> Result<String>;

    /// The element matching `locator`, if it exists and is visible.
    async fn visible_element(&self, locator: &Locator) -> Result<Option<Self::Element>>;

    /// The element matching `locator`, if it is visible and enabled.
    async fn clickable_element(&self, locator: &Locator) -> Result<Option<Self::Element>>;

    /// Text content of the matching element, `None` while absent.
    async fn element_text(&self, locator: &Locator) -> Result<Option<String>>;

    /// Attribute value of the matching element, `None` while the element or
    /// the attribute is absent.
    async fn attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>>;

    /// Evaluates a script expected to produce a boolean.
    async fn evaluate_bool(&self, script: &str) -> Result<bool>;

    async fn click(&self, locator: &Locator) -> Result<()>;

    /// Clears the matching input and types `text` into it.
    async fn type_text(&self, locator: &Locator, text: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locator_renders_to_css() {
        assert_eq!(Locator::id("user-name").to_css(), "#user-name");
        assert_eq!(Locator::class_name("login_logo").to_css(), ".login_logo");
        assert_eq!(
            Locator::css("[data-test='error']").to_css(),
            "[data-test='error']"
        );
    }

    #[test]
    fn locator_display_matches_css() {
        assert_eq!(Locator::id("login-button").to_string(), "#login-button");
    }
}
