use std::fmt::{Display, Formatter};
use std::time::Duration;
use thiserror::Error;

/// Classification of an error reported by the browser driver.
///
/// Waits decide per kind whether an error is transient (retried) or fatal (propagated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No element matched the locator.
    NoSuchElement,

    /// A previously located element is no longer attached to the document.
    StaleElementReference,

    /// The element exists but cannot be interacted with.
    ElementNotInteractable,

    /// Anything else the driver reported.
    Other,
}

impl ErrorKind {
    /// Kinds ignored by a wait unless configured otherwise.
    pub const TRANSIENT: [ErrorKind; 2] =
        [ErrorKind::NoSuchElement, ErrorKind::StaleElementReference];
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorKind::NoSuchElement => "no such element",
            ErrorKind::StaleElementReference => "stale element reference",
            ErrorKind::ElementNotInteractable => "element not interactable",
            ErrorKind::Other => "driver error",
        })
    }
}

/// An error reported by the driver while interrogating or manipulating the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct DriverError {
    /// What went wrong.
    pub kind: ErrorKind,

    /// Driver-provided details.
    pub message: String,
}

impl DriverError {
    /// Create a new error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// No element matched `what`.
    pub fn no_such_element(what: impl Display) -> Self {
        Self::new(ErrorKind::NoSuchElement, format!("Unable to locate {what}"))
    }

    /// An element handle went stale.
    pub fn stale(what: impl Display) -> Self {
        Self::new(
            ErrorKind::StaleElementReference,
            format!("{what} is no longer attached to the document"),
        )
    }

    /// Whether this error is one of the [`ErrorKind::TRANSIENT`] kinds.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        ErrorKind::TRANSIENT.contains(&self.kind)
    }
}

/// Errors produced by waits and helper interactions.
#[derive(Debug, Error)]
pub enum WaitError {
    /// The condition was never satisfied within the timeout.
    #[error("Timed out after {timeout:?} waiting for {waiting_for}")]
    Timeout {
        /// Human-readable description of the awaited condition.
        waiting_for: String,

        /// The timeout that elapsed.
        timeout: Duration,

        /// The last transient error swallowed while polling, if any.
        last_error: Option<DriverError>,
    },

    /// A wait for a named element timed out.
    #[error("Unable to locate element: {element} ({locator})")]
    NotFound {
        /// Human-readable element name, as used in test logs.
        element: String,

        /// The locator or handle that was waited on.
        locator: String,

        /// The underlying timeout.
        #[source]
        source: Box<WaitError>,
    },

    /// A non-transient driver error, propagated unmodified.
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// An assertion about the document did not hold.
    #[error("Verification failed: {0}")]
    Verification(String),
}

impl WaitError {
    /// Whether this is a [`WaitError::Timeout`].
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, WaitError::Timeout { .. })
    }

    /// Whether this is a [`WaitError::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, WaitError::NotFound { .. })
    }

    /// Wrap a timeout into [`WaitError::NotFound`] naming the element. Other errors are
    /// returned unchanged.
    #[must_use]
    pub fn into_not_found(self, element: &str, locator: impl Display) -> Self {
        match self {
            timeout @ WaitError::Timeout { .. } => WaitError::NotFound {
                element: element.to_owned(),
                locator: locator.to_string(),
                source: Box::new(timeout),
            },
            other => other,
        }
    }
}
