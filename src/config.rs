use crate::wait::WaitSpec;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use typed_builder::TypedBuilder;

/// Default address of a locally started chromedriver.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Errors raised while reading the suite configuration. Unsupported values are rejected
/// instead of being ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required setting was not provided.
    #[error("Missing required setting {key}")]
    Missing {
        /// The setting's name.
        key: &'static str,
    },

    /// The environment name is not known.
    #[error("Unknown environment {0:?}, expected STAGE or PROD")]
    UnknownEnvironment(String),

    /// The browser is not supported by this suite.
    #[error("Unsupported browser {0:?}, only CHROME is supported")]
    UnsupportedBrowser(String),

    /// A boolean flag had a value other than true/false.
    #[error("Invalid value {value:?} for {key}, expected TRUE or FALSE")]
    InvalidFlag {
        /// The setting's name.
        key: &'static str,

        /// The rejected value.
        value: String,
    },
}

/// The deployment under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Staging deployment.
    Stage,

    /// Production deployment.
    Prod,
}

impl Environment {
    /// Root URL of the website.
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Stage => "https://stage.zwift.com",
            Environment::Prod => "https://zwift.com",
        }
    }

    /// Root URL of the public API.
    #[must_use]
    pub fn api_url(self) -> &'static str {
        match self {
            Environment::Stage => "https://stage-api.zwift.com",
            Environment::Prod => "https://api.zwift.com",
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Environment::Stage => "STAGE",
            Environment::Prod => "PROD",
        })
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STAGE" => Ok(Environment::Stage),
            "PROD" => Ok(Environment::Prod),
            _ => Err(ConfigError::UnknownEnvironment(s.to_owned())),
        }
    }
}

/// The browser driving the suite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Browser {
    /// Google Chrome (or Chrome for Testing).
    #[default]
    Chrome,
}

impl Display for Browser {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Browser::Chrome => "CHROME",
        })
    }
}

impl FromStr for Browser {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CHROME" => Ok(Browser::Chrome),
            _ => Err(ConfigError::UnsupportedBrowser(s.to_owned())),
        }
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_uppercase().as_str() {
        "TRUE" => Ok(true),
        "FALSE" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_owned(),
        }),
    }
}

/// Settings for one run of the suite. Built once and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct SuiteConfig {
    environment: Environment,

    #[builder(default)]
    browser: Browser,

    #[builder(default = true)]
    headless: bool,

    #[builder(default = DEFAULT_WEBDRIVER_URL.to_owned(), setter(into))]
    webdriver_url: String,

    #[builder(default)]
    wait: WaitSpec,
}

impl SuiteConfig {
    /// Environment variable selecting the [`Environment`] (required).
    pub const ENVIRONMENT: &'static str = "SUITE_ENVIRONMENT";
    /// Environment variable selecting the [`Browser`].
    pub const BROWSER: &'static str = "SUITE_BROWSER";
    /// Environment variable toggling headless mode.
    pub const HEADLESS: &'static str = "SUITE_HEADLESS";
    /// Environment variable with the WebDriver server address.
    pub const WEBDRIVER_URL: &'static str = "WEBDRIVER_URL";

    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`SuiteConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a setting name to its value.
    ///
    /// # Errors
    ///
    /// Fails if the environment is missing or unknown, the browser is unsupported or the
    /// headless flag is neither true nor false.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = lookup(Self::ENVIRONMENT)
            .ok_or(ConfigError::Missing {
                key: Self::ENVIRONMENT,
            })?
            .parse::<Environment>()?;
        let browser = lookup(Self::BROWSER)
            .map(|value| value.parse::<Browser>())
            .transpose()?
            .unwrap_or_default();
        let headless = lookup(Self::HEADLESS)
            .map(|value| parse_flag(Self::HEADLESS, &value))
            .transpose()?
            .unwrap_or(true);
        let webdriver_url =
            lookup(Self::WEBDRIVER_URL).unwrap_or_else(|| DEFAULT_WEBDRIVER_URL.to_owned());

        let config = Self {
            environment,
            browser,
            headless,
            webdriver_url,
            wait: WaitSpec::default(),
        };
        tracing::info!(
            environment = %config.environment,
            browser = %config.browser,
            headless = config.headless,
            webdriver_url = %config.webdriver_url,
            "Loaded suite configuration"
        );
        Ok(config)
    }

    /// The deployment under test.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The browser to drive.
    #[must_use]
    pub fn browser(&self) -> Browser {
        self.browser
    }

    /// Whether the browser runs without a window.
    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    /// Address of the WebDriver server.
    #[must_use]
    pub fn webdriver_url(&self) -> &str {
        &self.webdriver_url
    }

    /// Wait settings handed to every helper.
    #[must_use]
    pub fn wait(&self) -> &WaitSpec {
        &self.wait
    }

    /// Root URL of the website under test.
    #[must_use]
    pub fn base_url(&self) -> &'static str {
        self.environment.base_url()
    }
}
