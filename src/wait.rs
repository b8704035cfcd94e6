use crate::error::{DriverError, ErrorKind, WaitError};
use std::fmt::Display;
use std::time::Duration;
use tokio::time::Instant;
use typed_builder::TypedBuilder;

/// Default time a wait keeps polling.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default time between two evaluations of a condition.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// The result of evaluating a condition once.
///
/// `Ok(Some(_))` means satisfied, `Ok(None)` means not yet.
pub type Check<T> = Result<Option<T>, DriverError>;

/// How long to wait, how often to poll and which driver errors count as "not yet".
///
/// ```
/// use std::time::Duration;
/// use ui_wait_helper::prelude::*;
///
/// let spec = WaitSpec::builder()
///     .timeout(Duration::from_secs(2))
///     .build();
/// assert_eq!(spec.poll_interval(), Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct WaitSpec {
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,

    #[builder(default = DEFAULT_POLL_INTERVAL)]
    poll_interval: Duration,

    #[builder(default = ErrorKind::TRANSIENT.to_vec())]
    ignored: Vec<ErrorKind>,
}

impl Default for WaitSpec {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WaitSpec {
    /// Maximum time spent polling.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Time between two evaluations.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Error kinds treated as "not yet satisfied".
    #[must_use]
    pub fn ignored(&self) -> &[ErrorKind] {
        &self.ignored
    }

    /// Whether errors of `kind` are swallowed while polling.
    #[must_use]
    pub fn ignores(&self, kind: ErrorKind) -> bool {
        self.ignored.contains(&kind)
    }

    /// A copy with a different timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// A copy with a different poll interval.
    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Evaluate `condition` until it yields a value or the timeout elapses.
    ///
    /// The condition is evaluated immediately and then once per poll interval, with a
    /// final evaluation exactly at the deadline. A condition that holds within the timeout
    /// is therefore never reported as timed out, and a wait that never succeeds fails once
    /// the timeout has elapsed.
    ///
    /// # Errors
    ///
    /// - [`WaitError::Timeout`] if the condition was not satisfied in time.
    /// - [`WaitError::Driver`] as soon as the condition fails with an error kind that is
    ///   not ignored.
    pub async fn until<T, F, Fut>(
        &self,
        waiting_for: impl Display,
        mut condition: F,
    ) -> Result<T, WaitError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Check<T>>,
    {
        let started = Instant::now();
        let mut last_error = None;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            match condition().await {
                Ok(Some(value)) => {
                    tracing::debug!(
                        attempt,
                        elapsed = ?started.elapsed(),
                        "Satisfied: {waiting_for}"
                    );
                    return Ok(value);
                }
                Ok(None) => {
                    tracing::trace!(attempt, "Not yet satisfied: {waiting_for}");
                }
                Err(err) if self.ignores(err.kind) => {
                    tracing::trace!(attempt, %err, "Ignoring while waiting for {waiting_for}");
                    last_error = Some(err);
                }
                Err(err) => {
                    tracing::debug!(attempt, %err, "Aborted waiting for {waiting_for}");
                    return Err(WaitError::Driver(err));
                }
            }

            let remaining = self.timeout.saturating_sub(started.elapsed());
            if remaining.is_zero() {
                tracing::debug!(
                    attempt,
                    timeout = ?self.timeout,
                    "Timed out waiting for {waiting_for}"
                );
                return Err(WaitError::Timeout {
                    waiting_for: waiting_for.to_string(),
                    timeout: self.timeout,
                    last_error,
                });
            }

            // The last evaluation happens at the deadline, not a full interval past it.
            tokio::time::sleep(self.poll_interval.min(remaining)).await;
        }
    }
}
