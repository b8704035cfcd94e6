//! Fluent waits, named interactions and session plumbing for page-object based browser
//! tests.
//!
//! The core is [`prelude::WaitSpec::until`]: it polls a condition against the live document
//! at a fixed interval, treats "no such element" and "stale element" errors as "not yet",
//! and fails with a timeout once the deadline passes. [`prelude::Helper`] builds the usual
//! waits (present, visible, clickable, ...) and interactions (click, bypass-click, input,
//! verify) on top of it for any [`prelude::Document`].
//!
//! With the `thirtyfour` feature (default), [`prelude::Session`] implements [`prelude::Document`]
//! for a WebDriver session and [`prelude::with_session`] runs a test body with guaranteed
//! cleanup.

mod actions;
mod condition;
mod config;
mod document;
mod error;
mod helper;
mod locator;
mod wait;

#[cfg(feature = "thirtyfour")]
mod session;
#[cfg(feature = "thirtyfour")]
mod webdriver;

#[cfg(test)]
mod fake;

/// Everything needed to write page objects and tests.
pub mod prelude {
    pub use crate::config::{
        Browser, ConfigError, DEFAULT_WEBDRIVER_URL, Environment, SuiteConfig,
    };
    pub use crate::document::{Document, Element};
    pub use crate::error::{DriverError, ErrorKind, WaitError};
    pub use crate::helper::Helper;
    pub use crate::locator::Locator;
    pub use crate::wait::{Check, DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT, WaitSpec};

    #[cfg(feature = "thirtyfour")]
    pub use crate::session::{Session, SessionError, with_session};
}
