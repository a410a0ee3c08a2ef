//! Request execution guard.
//!
//! Every inbound operation runs on its own tokio task under a fixed wall-clock
//! budget. The caller gets exactly one [`Outcome`]: the worker's result if it
//! lands before the deadline, otherwise `TimedOut`. A worker that is still
//! running when the deadline fires is not aborted. Its token is cancelled and
//! whatever it produces afterwards is dropped.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, Instrument, Span};

use crate::errors::{GuardError, ServiceError};
use crate::trace_ctx;

/// Handle a worker uses to observe its request's deadline.
#[derive(Debug, Clone)]
pub struct WorkContext {
    token: CancellationToken,
    deadline: Instant,
}

impl WorkContext {
    pub fn new(token: CancellationToken, deadline: Instant) -> Self {
        Self { token, deadline }
    }

    /// A detached context expiring `budget` from now.
    pub fn with_budget(budget: Duration) -> Self {
        Self::new(CancellationToken::new(), Instant::now() + budget)
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || Instant::now() >= self.deadline
    }

    /// Call before any side effect.
    pub fn checkpoint(&self) -> Result<(), GuardError> {
        if self.is_cancelled() {
            Err(GuardError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Resolves once the token is cancelled or the deadline passes.
    pub async fn cancelled(&self) {
        tokio::select! {
            _ = self.token.cancelled() => {}
            _ = sleep_until(self.deadline) => {}
        }
    }

    /// Drive `fut` unless the context is cancelled first.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, GuardError>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            out = fut => Ok(out),
            _ = self.cancelled() => Err(GuardError::Cancelled),
        }
    }
}

/// What the guard hands back to the transport layer.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
    TimedOut,
}

impl<T, E> Outcome<T, E> {
    pub fn is_timed_out(&self) -> bool {
        matches!(self, Outcome::TimedOut)
    }
}

impl<T> Outcome<T, ServiceError> {
    pub fn into_result(self) -> Result<T, ServiceError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
            Outcome::TimedOut => Err(ServiceError::RequestTimeout),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RequestGuard {
    budget: Duration,
}

impl RequestGuard {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Run `work` on a fresh task and race it against the budget.
    ///
    /// If the worker finishes on the same poll the deadline fires, the worker
    /// wins. Dropping the returned future cancels the worker's token.
    pub async fn run<T, E, F, Fut>(&self, work: F) -> Outcome<T, E>
    where
        F: FnOnce(WorkContext) -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: From<GuardError> + Send + 'static,
    {
        let deadline = Instant::now() + self.budget;
        let token = CancellationToken::new();
        let _cancel_on_drop = token.clone().drop_guard();

        let worker = work(WorkContext::new(token.clone(), deadline));
        // Task-locals do not cross spawn; carry the trace id over by hand.
        let trace_id = trace_ctx::current();
        let worker = async move {
            match trace_id {
                Some(trace_id) => trace_ctx::with_trace_id(trace_id, worker).await,
                None => worker.await,
            }
        };
        let mut handle = tokio::spawn(worker.instrument(Span::current()));

        tokio::select! {
            biased;
            joined = &mut handle => match joined {
                Ok(Ok(value)) => Outcome::Success(value),
                Ok(Err(err)) => Outcome::Failure(err),
                Err(join_err) => Outcome::Failure(E::from(GuardError::WorkerLost(join_err.to_string()))),
            },
            _ = sleep_until(deadline) => {
                token.cancel();
                debug!(budget_ms = self.budget.as_millis() as u64, "request deadline elapsed");
                tokio::spawn(
                    async move {
                        if handle.await.is_ok() {
                            debug!("discarded late worker result");
                        }
                    }
                    .instrument(Span::current()),
                );
                Outcome::TimedOut
            }
        }
    }
}
