//! CancellationSignal - Read-only view of the caller's cancellation token.
//!
//! The dispatcher owns a `CancellationToken` and threads a signal derived
//! from it into every canonical invocation. Handlers can observe the signal
//! but never trigger it.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::HandlerError;

/// Cooperative indicator that the caller has withdrawn interest.
///
/// Cloning is cheap and every clone observes the same underlying token.
///
/// # Example
///
/// ```
/// use cqs_handlers::domain::foundation::CancellationSignal;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let signal = CancellationSignal::from(&token);
///
/// assert!(!signal.is_cancelled());
/// token.cancel();
/// assert!(signal.is_cancelled());
/// assert!(signal.check().unwrap_err().is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationSignal {
    token: CancellationToken,
}

impl CancellationSignal {
    /// Creates a signal observing the given token.
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// A signal that is never cancelled.
    ///
    /// Used when a caller invokes a handler without any interest in
    /// withdrawing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true once the caller has requested cancellation.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes when the caller requests cancellation.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }

    /// Returns `Err(HandlerError::Cancelled)` if cancellation was requested.
    pub fn check(&self) -> Result<(), HandlerError> {
        if self.is_cancelled() {
            debug!("cancellation observed at checkpoint");
            return Err(HandlerError::Cancelled);
        }
        Ok(())
    }

    /// Awaits `operation` unless cancellation wins the race.
    ///
    /// Cancellation is checked first, so a signal that is already set is
    /// honored without polling `operation` at all. When cancellation wins,
    /// `operation` is dropped and `HandlerError::Cancelled` is returned.
    pub async fn guard<F>(&self, operation: F) -> Result<F::Output, HandlerError>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                debug!("cancellation observed while awaiting");
                Err(HandlerError::Cancelled)
            }
            output = operation => Ok(output),
        }
    }

    /// Derives a signal that is also cancelled when this one is, for
    /// handing to nested operations.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }
}

impl From<CancellationToken> for CancellationSignal {
    fn from(token: CancellationToken) -> Self {
        Self::new(token)
    }
}

impl From<&CancellationToken> for CancellationSignal {
    fn from(token: &CancellationToken) -> Self {
        Self::new(token.clone())
    }
}
