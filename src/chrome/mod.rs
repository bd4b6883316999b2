//! Chromium session lifecycle and the real [`Driver`] implementation.

pub mod js;

use crate::driver::{Driver, Locator};
use crate::timeouts::{ms, secs};
use crate::{Result, SuiteError};
use chromiumoxide::cdp::browser_protocol::page::NavigateParams;
use chromiumoxide::element::Element;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct JsCallResult {
    found: bool,
}

/// One launched Chromium with a single page, owned by one suite run.
/// Dropping without [`ChromeSession::close`] leaves teardown to the
/// browser process exiting with its child handler.
pub struct ChromeSession {
    browser: Browser,
    handler_task: tokio::task::JoinHandle<()>,
    page: Page,
}

impl ChromeSession {
    pub async fn launch(headless: bool) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .window_size(1920, 1080)
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-gpu");

        if !headless {
            builder = builder.with_head();
        }

        let config = builder
            .build()
            .map_err(|e| SuiteError::LaunchFailed(e.to_string()))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| SuiteError::LaunchFailed(e.to_string()))?;

        let handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| SuiteError::Connection(e.to_string()))?;

        debug!(headless, "Chromium session launched");
        Ok(Self {
            browser,
            handler_task,
            page,
        })
    }

    pub async fn close(mut self) -> Result<()> {
        self.browser
            .close()
            .await
            .map_err(|e| SuiteError::Connection(e.to_string()))?;
        self.handler_task.abort();
        Ok(())
    }

    async fn evaluate<T: serde::de::DeserializeOwned>(&self, script: &str) -> Result<T> {
        let result = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| SuiteError::EvaluationError(e.to_string()))?;
        Ok(result.into_value()?)
    }
}

#[async_trait::async_trait]
impl Driver for ChromeSession {
    type Element = Element;

    async fn goto(&self, url: &str) -> Result<()> {
        let params = NavigateParams::builder()
            .url(url)
            .build()
            .map_err(SuiteError::Connection)?;

        tokio::time::timeout(
            Duration::from_secs(secs::NAVIGATION),
            self.page.execute(params),
        )
        .await
        .map_err(|_| SuiteError::NavigationTimeout(secs::NAVIGATION))?
        .map_err(|e| SuiteError::Connection(e.to_string()))?;

        tokio::time::sleep(Duration::from_millis(ms::PAGE_SETTLE)).await;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        let url = self
            .page
            .url()
            .await
            .map_err(|e| SuiteError::Connection(e.to_string()))?;
        Ok(url.unwrap_or_default())
    }

    async fn title(&self) -> Result<String> {
        self.evaluate("document.title").await
    }

    async fn visible_element(&self, locator: &Locator) -> Result<Option<Element>> {
        let selector = locator.to_css();
        if !self.evaluate::<bool>(&js::visibility_check(&selector)).await? {
            return Ok(None);
        }
        // The element can detach between the probe and the handle lookup;
        // a lost race counts as not ready yet.
        Ok(self.page.find_element(selector).await.ok())
    }

    async fn clickable_element(&self, locator: &Locator) -> Result<Option<Element>> {
        let selector = locator.to_css();
        if !self.evaluate::<bool>(&js::clickable_check(&selector)).await? {
            return Ok(None);
        }
        Ok(self.page.find_element(selector).await.ok())
    }

    async fn element_text(&self, locator: &Locator) -> Result<Option<String>> {
        self.evaluate(&js::text_content(&locator.to_css())).await
    }

    async fn attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>> {
        self.evaluate(&js::attribute_value(&locator.to_css(), name))
            .await
    }

    async fn evaluate_bool(&self, script: &str) -> Result<bool> {
        self.evaluate(script).await
    }

    async fn click(&self, locator: &Locator) -> Result<()> {
        let result: JsCallResult = self
            .evaluate(&js::click_element(&locator.to_css()))
            .await?;
        if !result.found {
            return Err(SuiteError::ElementNotFound {
                locator: locator.to_string(),
            });
        }
        Ok(())
    }

    async fn type_text(&self, locator: &Locator, text: &str) -> Result<()> {
        let result: JsCallResult = self
            .evaluate(&js::fill_element(&locator.to_css(), text))
            .await?;
        if !result.found {
            return Err(SuiteError::ElementNotFound {
                locator: locator.to_string(),
            });
        }
        Ok(())
    }
}
