use std::future::{Future, pending};

use futures_util::future::{Either, select};
use tokio::sync::watch;

use crate::PlanError;

/// Requests cancellation of every operation observing one of its signals.
#[derive(Debug)]
pub struct Canceller(watch::Sender<bool>);

impl Canceller {
    pub fn cancel(&self) {
        self.0.send_replace(true);
    }
}

#[derive(Debug, Clone)]
pub struct CancellationSignal(watch::Receiver<bool>);

impl CancellationSignal {
    #[must_use]
    pub fn new() -> (Canceller, CancellationSignal) {
        let (sender, receiver) = watch::channel(false);
        (Canceller(sender), CancellationSignal(receiver))
    }

    /// A signal that is never raised.
    #[must_use]
    pub fn never() -> Self {
        // A dropped sender leaves the last value in place, so this stays `false` forever.
        let (_, receiver) = watch::channel(false);
        CancellationSignal(receiver)
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    /// Resolves once cancellation was requested.
    pub async fn cancelled(&self) {
        let mut receiver = self.0.clone();
        if receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            pending::<()>().await;
        }
    }

    /// Runs `future` to completion unless cancellation is requested first, in which case the
    /// future is dropped.
    pub async fn guard<F, T, E>(&self, future: F) -> Result<T, PlanError>
    where
        F: Future<Output = Result<T, E>>,
        PlanError: From<E>,
    {
        if self.is_cancelled() {
            return Err(PlanError::Cancelled);
        }

        let cancelled = self.cancelled();
        futures_util::pin_mut!(future);
        futures_util::pin_mut!(cancelled);

        match select(future, cancelled).await {
            Either::Left((result, _)) => result.map_err(PlanError::from),
            Either::Right(((), _)) => Err(PlanError::Cancelled),
        }
    }
}
