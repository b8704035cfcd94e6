use crate::config::{Browser, ConfigError, SuiteConfig};
use crate::document::Document;
use crate::error::{DriverError, WaitError};
use crate::helper::Helper;
use crate::locator::Locator;
use crate::wait::WaitSpec;
use thiserror::Error;
use thirtyfour::{By, ChromiumLikeCapabilities, WebElement};

const WINDOW_SIZE: &str = "1920,1080";

/// A browser session. Used to control the browser.
///
/// This has a `Deref` impl to `thirtyfour::WebDriver`, so this session can be seen as the
/// `driver`. For waits and named interactions, use [`Session::helper`].
#[derive(Debug)]
pub struct Session {
    driver: thirtyfour::WebDriver,
    wait: WaitSpec,
}

/// Errors surfacing from a test body run through [`with_session`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// The test body panicked.
    #[error("The test body panicked:\n{reason}")]
    Panic {
        /// The panic message.
        reason: String,
    },

    /// Error returned by thirtyfour directly.
    #[error("thirtyfour WebDriverError")]
    Thirtyfour {
        /// The underlying error.
        #[from]
        source: thirtyfour::error::WebDriverError,
    },

    /// A wait or helper interaction failed.
    #[error(transparent)]
    Wait(#[from] WaitError),

    /// A document query or interaction failed.
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// The suite configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn capabilities(config: &SuiteConfig) -> Result<thirtyfour::ChromeCapabilities, SessionError> {
    match config.browser() {
        Browser::Chrome => {
            let mut caps = thirtyfour::ChromeCapabilities::new();
            if config.headless() {
                caps.set_headless()?;
            }
            caps.add_arg(&format!("--window-size={WINDOW_SIZE}"))?;
            caps.add_arg("--disable-infobars")?;
            caps.add_arg("--disable-extensions")?;
            Ok(caps)
        }
    }
}

impl Session {
    /// Open a session on the configured WebDriver server and navigate to the environment's
    /// base URL.
    ///
    /// # Errors
    ///
    /// Fails if the server rejects the session or the initial navigation fails.
    pub async fn connect(config: &SuiteConfig) -> Result<Session, SessionError> {
        let caps = capabilities(config)?;
        tracing::info!(
            webdriver_url = config.webdriver_url(),
            browser = %config.browser(),
            headless = config.headless(),
            "Opening browser session"
        );
        let driver = thirtyfour::WebDriver::new(config.webdriver_url(), caps).await?;
        let session = Session {
            driver,
            wait: config.wait().clone(),
        };

        let navigated = session.helper().navigate(config.base_url()).await;
        if let Err(err) = navigated {
            if let Err(quit_err) = session.quit().await {
                tracing::warn!(%quit_err, "Failed to quit session after failed navigation");
            }
            return Err(err.into());
        }

        Ok(session)
    }

    /// A helper over this session, using the configured wait settings.
    #[must_use]
    pub fn helper(&self) -> Helper<'_, Session> {
        Helper::with_wait(self, self.wait.clone())
    }

    /// End the session and close the browser.
    ///
    /// # Errors
    ///
    /// Fails if the WebDriver server could not end the session.
    pub async fn quit(self) -> Result<(), SessionError> {
        self.driver.quit().await.map_err(Into::into)
    }
}

impl std::ops::Deref for Session {
    type Target = thirtyfour::WebDriver;

    fn deref(&self) -> &Self::Target {
        &self.driver
    }
}

impl Document for Session {
    type Element = WebElement;

    async fn query_all(&self, locator: &Locator) -> Result<Vec<WebElement>, DriverError> {
        Ok(self.driver.find_all(By::from(locator)).await?)
    }

    async fn script_click(&self, element: &WebElement) -> Result<(), DriverError> {
        self.driver
            .execute("arguments[0].click();", vec![element.to_json()?])
            .await?;
        Ok(())
    }

    async fn hover(&self, element: &WebElement) -> Result<(), DriverError> {
        Ok(self
            .driver
            .action_chain()
            .move_to_element_center(element)
            .perform()
            .await?)
    }

    async fn navigate_to(&self, url: &str) -> Result<(), DriverError> {
        Ok(self.driver.goto(url).await?)
    }

    async fn reload(&self) -> Result<(), DriverError> {
        Ok(self.driver.refresh().await?)
    }

    async fn page_url(&self) -> Result<String, DriverError> {
        Ok(self.driver.current_url().await?.to_string())
    }

    async fn page_title(&self) -> Result<String, DriverError> {
        Ok(self.driver.title().await?)
    }
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(reason) = payload.downcast_ref::<&str>() {
        (*reason).to_owned()
    } else if let Some(reason) = payload.downcast_ref::<String>() {
        reason.clone()
    } else {
        "<non-string panic payload>".to_owned()
    }
}

/// Run `test` against a fresh session.
///
/// The session is always quit afterwards, also when `test` fails or panics. A panic is
/// reported as [`SessionError::Panic`]. The page URL at the time of a failure is logged.
///
/// # Errors
///
/// Whatever `test` returned, or an error connecting to or quitting the session.
pub async fn with_session<F>(config: &SuiteConfig, test: F) -> Result<(), SessionError>
where
    F: for<'a> AsyncFnOnce(&'a Session) -> Result<(), SessionError>,
{
    let session = Session::connect(config).await?;
    let started = std::time::Instant::now();
    tracing::info!(environment = %config.environment(), "Test started");

    let outcome = run_guarded(&session, test).await;

    // No matter what happened, clean up the session!
    session.quit().await?;
    tracing::info!(elapsed = ?started.elapsed(), "Test ended");

    outcome
}

/// Run `test` against `document`, turning a panic into [`SessionError::Panic`] and logging
/// the page URL if the test did not pass.
async fn run_guarded<D, F>(document: &D, test: F) -> Result<(), SessionError>
where
    D: Document,
    F: for<'a> AsyncFnOnce(&'a D) -> Result<(), SessionError>,
{
    use futures::FutureExt;

    let outcome = core::panic::AssertUnwindSafe(test(document))
        .catch_unwind()
        .await;

    if !matches!(outcome, Ok(Ok(()))) {
        match document.page_url().await {
            Ok(url) => tracing::warn!(%url, "Test failed"),
            Err(err) => tracing::warn!(%err, "Test failed, current URL unavailable"),
        }
    }

    outcome.map_err(|payload| SessionError::Panic {
        reason: panic_reason(payload.as_ref()),
    })?
}
