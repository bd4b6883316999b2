//! Adaptive wait engine.
//!
//! Polling strategies for asynchronous UI state, parameterized by a timeout
//! tier resolved against [`WaitConfig`] at call time. Every operation takes
//! the driver session explicitly, so parallel suites can run isolated
//! sessions without shared state.

use crate::driver::{Driver, Locator};
use crate::{Result, SuiteError};
use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, sleep, timeout};
use tracing::debug;

/// Named timeout class, resolved against configuration when a wait starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Fast,
    Medium,
    Long,
}

/// Outcome of one polling iteration.
///
/// `Pending` (element absent, condition not yet true) is tolerated by the
/// polling loops until the deadline. Unexpected failures travel as `Err`
/// and abort the wait immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Satisfied,
    Pending,
}

/// Wait timing parameters, constructed once from the suite configuration
/// and immutable afterwards.
#[derive(Debug, Clone)]
pub struct WaitConfig {
    pub polling_interval: Duration,
    pub max_retries: u32,
    pub fast: Duration,
    pub medium: Duration,
    pub long: Duration,
}

impl WaitConfig {
    pub fn duration(&self, tier: Tier) -> Duration {
        match tier {
            Tier::Fast => self.fast,
            Tier::Medium => self.medium,
            Tier::Long => self.long,
        }
    }
}

/// The wait engine. Stateless apart from its configuration; every call is
/// independent and carries no memory of prior waits.
#[derive(Debug, Clone)]
pub struct Waiter {
    cfg: WaitConfig,
}

impl Waiter {
    pub fn new(cfg: WaitConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &WaitConfig {
        &self.cfg
    }

    /// Polls the current URL until it contains `fragment`.
    ///
    /// Hard timeout: expiry is a test failure and propagates as
    /// [`SuiteError::WaitTimeout`]. Driver errors are never swallowed here.
    pub async fn until_url_contains<D: Driver>(
        &self,
        driver: &D,
        fragment: &str,
        tier: Tier,
    ) -> Result<()> {
        let total = self.cfg.duration(tier);
        let deadline = Instant::now() + total;
        loop {
            if driver.current_url().await?.contains(fragment) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(SuiteError::WaitTimeout {
                    condition: format!("url to contain {fragment:?}"),
                    seconds: total.as_secs(),
                });
            }
            sleep(self.cfg.polling_interval).await;
        }
    }

    /// Polls the page title until it contains `text`. Hard timeout, same
    /// contract as [`Waiter::until_url_contains`].
    pub async fn until_title_contains<D: Driver>(
        &self,
        driver: &D,
        text: &str,
        tier: Tier,
    ) -> Result<()> {
        let total = self.cfg.duration(tier);
        let deadline = Instant::now() + total;
        loop {
            if driver.title().await?.contains(text) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(SuiteError::WaitTimeout {
                    condition: format!("title to contain {text:?}"),
                    seconds: total.as_secs(),
                });
            }
            sleep(self.cfg.polling_interval).await;
        }
    }

    /// Generic polling loop, the replacement for fixed sleeps.
    ///
    /// Evaluates `probe` at the configured polling interval until it reports
    /// [`Probe::Satisfied`] or `max_wait` elapses. Returns `Ok(())` in both
    /// cases: this is the two-step wait-then-assert pattern, and callers must
    /// assert the desired end state separately after the call returns. Only
    /// an unexpected probe failure (`Err`) aborts the loop and propagates.
    pub async fn smart_wait<F, Fut>(&self, mut probe: F, max_wait: Duration) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Probe>>,
    {
        let deadline = Instant::now() + max_wait;
        loop {
            match probe().await? {
                Probe::Satisfied => return Ok(()),
                Probe::Pending => {}
            }
            if Instant::now() >= deadline {
                debug!(?max_wait, "smart_wait deadline expired");
                return Ok(());
            }
            sleep(self.cfg.polling_interval).await;
        }
    }

    /// Waits for an element matching `locator` to become visible.
    ///
    /// Soft timeout: `Ok(None)` when the tier's duration expires, never an
    /// error. Driver failures still propagate.
    pub async fn element_visible<D: Driver>(
        &self,
        driver: &D,
        locator: &Locator,
        tier: Tier,
    ) -> Result<Option<D::Element>> {
        let total = self.cfg.duration(tier);
        self.bounded(total, async {
            loop {
                if let Some(element) = driver.visible_element(locator).await? {
                    return Ok(element);
                }
                sleep(self.cfg.polling_interval).await;
            }
        })
        .await
    }

    /// Waits for an element to become clickable, subdividing the tier's
    /// duration into `max_retries` equal timeout segments.
    ///
    /// Each segment is an independent bounded wait; a failed segment is
    /// followed by one polling-interval sleep before the next. The segment
    /// budget excludes that inter-segment sleep, so the worst case is the
    /// tier duration plus `max_retries - 1` polling intervals. Soft timeout:
    /// `Ok(None)` once every segment is exhausted.
    pub async fn element_clickable_with_retry<D: Driver>(
        &self,
        driver: &D,
        locator: &Locator,
        tier: Tier,
    ) -> Result<Option<D::Element>> {
        let retries = self.cfg.max_retries.max(1);
        let segment = self.cfg.duration(tier) / retries;

        for attempt in 0..retries {
            let found = self
                .bounded(segment, async {
                    loop {
                        if let Some(element) = driver.clickable_element(locator).await? {
                            return Ok(element);
                        }
                        sleep(self.cfg.polling_interval).await;
                    }
                })
                .await?;

            match found {
                Some(element) => return Ok(Some(element)),
                None => {
                    debug!(%locator, attempt, "clickable wait segment expired");
                    if attempt + 1 < retries {
                        sleep(self.cfg.polling_interval).await;
                    }
                }
            }
        }
        Ok(None)
    }

    /// Polls an element's text until it contains `expected`.
    ///
    /// An absent element counts as a pending iteration, matching the
    /// engine's typed transient handling. Soft timeout: `Ok(false)`.
    pub async fn text_contains<D: Driver>(
        &self,
        driver: &D,
        locator: &Locator,
        expected: &str,
        tier: Tier,
    ) -> Result<bool> {
        let deadline = Instant::now() + self.cfg.duration(tier);
        loop {
            match driver.element_text(locator).await? {
                Some(text) if text.contains(expected) => return Ok(true),
                _ => {}
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            sleep(self.cfg.polling_interval).await;
        }
    }

    /// Single bounded wait for an attribute to contain `expected`.
    /// Soft timeout: `Ok(false)`.
    pub async fn attribute_contains<D: Driver>(
        &self,
        driver: &D,
        locator: &Locator,
        attribute: &str,
        expected: &str,
        tier: Tier,
    ) -> Result<bool> {
        let total = self.cfg.duration(tier);
        let found = self
            .bounded(total, async {
                loop {
                    if let Some(value) = driver.attribute(locator, attribute).await?
                        && value.contains(expected)
                    {
                        return Ok(());
                    }
                    sleep(self.cfg.polling_interval).await;
                }
            })
            .await?;
        Ok(found.is_some())
    }

    /// Waits for `document.readyState === "complete"`. Soft timeout.
    pub async fn page_loaded<D: Driver>(&self, driver: &D, tier: Tier) -> Result<bool> {
        self.readiness(driver, crate::chrome::js::READY_STATE_COMPLETE, tier)
            .await
    }

    /// Waits for pending jQuery requests to drain. Fails open: when the
    /// jQuery hook is absent the probe reports complete, so the call
    /// returns without blocking.
    pub async fn ajax_complete<D: Driver>(&self, driver: &D, tier: Tier) -> Result<bool> {
        self.readiness(driver, crate::chrome::js::JQUERY_IDLE, tier).await
    }

    async fn readiness<D: Driver>(&self, driver: &D, script: &str, tier: Tier) -> Result<bool> {
        let total = self.cfg.duration(tier);
        let ready = self
            .bounded(total, async {
                loop {
                    if driver.evaluate_bool(script).await? {
                        return Ok(());
                    }
                    sleep(self.cfg.polling_interval).await;
                }
            })
            .await?;
        Ok(ready.is_some())
    }

    /// Bounded-wait primitive: runs `fut` under the given deadline, mapping
    /// expiry to `Ok(None)` and passing unexpected failures through.
    async fn bounded<T>(
        &self,
        total: Duration,
        fut: impl Future<Output = Result<T>>,
    ) -> Result<Option<T>> {
        match timeout(total, fut).await {
            Ok(Ok(value)) => Ok(Some(value)),
            Ok(Err(e)) => Err(e),
            Err(_) => Ok(None),
        }
    }
}

/// Runs an operation and reports how long it took. Used by scenarios to log
/// wait costs.
pub async fn measured<T, Fut>(fut: Fut) -> (T, Duration)
where
    Fut: Future<Output = T>,
{
    let start = Instant::now();
    let value = fut.await;
    (value, start.elapsed())
}
