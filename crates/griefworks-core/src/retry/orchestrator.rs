use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use tokio::sync::watch;
use tracing::{debug, warn};

use super::policy::RetryPolicy;
use crate::api::ApiResult;
use crate::error::{GriefError, Result};

/// Where an orchestration currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestrationState {
    Idle,
    /// Running the attempt with this 0-based index.
    Attempting(u32),
}

/// Retry counter for progress display.
///
/// `retries` only moves once a retry actually starts; the first attempt
/// leaves it at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryProgress {
    pub retries: u32,
    pub max_attempts: u32,
}

impl RetryProgress {
    fn start(max_attempts: u32) -> Self {
        Self {
            retries: 0,
            max_attempts,
        }
    }

    /// 1-based number of the attempt in progress.
    pub fn current_attempt(&self) -> u32 {
        self.retries + 1
    }

    /// "Attempt k/N", or `None` while still on the first attempt.
    pub fn label(&self) -> Option<String> {
        (self.retries > 0)
            .then(|| format!("Attempt {}/{}", self.current_attempt(), self.max_attempts))
    }
}

/// Runs `attempt` until it yields data or the policy runs out.
///
/// `attempt` receives the 0-based attempt index. `on_retry` is called with
/// the new retry count right before each retry, after the backoff sleep.
/// The error of the final attempt is the one reported; earlier messages
/// are only logged.
///
/// # Errors
///
/// Returns `GriefError::Remote` carrying the last failure message and the
/// number of attempts made.
pub async fn retry_with_backoff<T, F, Fut, R>(
    policy: &RetryPolicy,
    mut attempt: F,
    mut on_retry: R,
) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = ApiResult<T>>,
    R: FnMut(u32),
{
    let mut index = 0;
    loop {
        debug!(
            attempt = index + 1,
            max_attempts = policy.max_attempts(),
            "Starting remote call attempt"
        );

        let message = match attempt(index).await.into_result() {
            Ok(data) => return Ok(data),
            Err(message) => message,
        };

        match policy.backoff_after(index) {
            Some(delay) => {
                warn!(
                    attempt = index + 1,
                    delay_ms = delay.as_millis() as u64,
                    error = %message,
                    "Remote call failed, backing off"
                );
                tokio::time::sleep(delay).await;
                index += 1;
                on_retry(index);
            }
            None => {
                warn!(
                    attempt = index + 1,
                    error = %message,
                    "Remote call failed, no attempts left"
                );
                return Err(GriefError::remote(message, index + 1));
            }
        }
    }
}

/// One-at-a-time retry state machine for a single flow.
///
/// A second `run` while one is in flight is rejected with
/// `GriefError::InProgress` instead of being queued.
pub struct Orchestrator {
    policy: RetryPolicy,
    in_flight: AtomicBool,
    attempt: AtomicU32,
    progress: watch::Sender<RetryProgress>,
}

impl Orchestrator {
    pub fn new(policy: RetryPolicy) -> Self {
        let (progress, _) = watch::channel(RetryProgress::start(policy.max_attempts()));
        Self {
            policy,
            in_flight: AtomicBool::new(false),
            attempt: AtomicU32::new(0),
            progress,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn state(&self) -> OrchestrationState {
        if self.in_flight.load(Ordering::SeqCst) {
            OrchestrationState::Attempting(self.attempt.load(Ordering::SeqCst))
        } else {
            OrchestrationState::Idle
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Progress of the current (or most recent) run.
    pub fn progress(&self) -> RetryProgress {
        *self.progress.borrow()
    }

    /// Receives a new value every time a retry starts.
    pub fn subscribe(&self) -> watch::Receiver<RetryProgress> {
        self.progress.subscribe()
    }

    /// Runs one orchestration of `attempt`.
    ///
    /// # Errors
    ///
    /// - `GriefError::InProgress` if another run has not finished yet
    /// - `GriefError::Remote` once every attempt has failed
    pub async fn run<T, F, Fut>(&self, attempt: F) -> Result<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        self.attempt.store(0, Ordering::SeqCst);
        self.progress
            .send_replace(RetryProgress::start(self.policy.max_attempts()));

        retry_with_backoff(&self.policy, attempt, |retries| {
            self.attempt.store(retries, Ordering::SeqCst);
            self.progress.send_modify(|progress| progress.retries = retries);
        })
        .await
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}

/// Clears the in-flight flag when the run ends, however it ends.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| GriefError::InProgress)?;
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::sync::Notify;
    use tokio::time::Instant;

    /// Fails every call until the `successful_attempt`-th one (never if `None`).
    fn failing_after(
        successful_attempt: Option<usize>,
        calls: Arc<AtomicUsize>,
    ) -> impl FnMut(u32) -> std::future::Ready<ApiResult<&'static str>> {
        move |_| {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            let result = match successful_attempt {
                Some(ok) if n >= ok => ApiResult::success("done"),
                _ => ApiResult::failure(format!("failure {n}")),
            };
            std::future::ready(result)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_after_max_attempts() {
        let orchestrator = Orchestrator::default();
        let calls = Arc::new(AtomicUsize::new(0));

        let err = orchestrator
            .run(failing_after(None, calls.clone()))
            .await
            .unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 5);
        assert_eq!(err, GriefError::remote("failure 5", 5));
        assert_eq!(orchestrator.state(), OrchestrationState::Idle);
        assert_eq!(orchestrator.progress().retries, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_on_third_attempt() {
        let orchestrator = Orchestrator::default();
        let calls = Arc::new(AtomicUsize::new(0));

        let data = orchestrator
            .run(failing_after(Some(3), calls.clone()))
            .await
            .unwrap();

        assert_eq!(data, "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(orchestrator.progress().retries, 2);
        assert_eq!(orchestrator.progress().label().as_deref(), Some("Attempt 3/5"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success_has_no_retries() {
        let orchestrator = Orchestrator::default();
        let calls = Arc::new(AtomicUsize::new(0));

        orchestrator
            .run(failing_after(Some(1), calls.clone()))
            .await
            .unwrap();

        assert_eq!(orchestrator.progress().retries, 0);
        assert!(orchestrator.progress().label().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_total_skips_final_delay() {
        let orchestrator = Orchestrator::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let started = Instant::now();

        let _ = orchestrator.run(failing_after(None, calls)).await;

        // 1s + 2s + 4s + 8s; nothing after the fifth failure.
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(15), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_secs(16), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_delay_doubles() {
        let policy = RetryPolicy::new(4, Duration::from_millis(100)).unwrap();
        let started = Instant::now();
        let mut seen = Vec::new();

        let _ = retry_with_backoff(
            &policy,
            |_| {
                seen.push(started.elapsed());
                std::future::ready(ApiResult::<()>::failure("nope"))
            },
            |_| {},
        )
        .await;

        assert_eq!(
            seen,
            vec![
                Duration::ZERO,
                Duration::from_millis(100),
                Duration::from_millis(300),
                Duration::from_millis(700),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejects_second_run_while_in_flight() {
        let orchestrator = Arc::new(Orchestrator::default());
        let gate = Arc::new(Notify::new());
        let second_calls = Arc::new(AtomicUsize::new(0));

        let first = tokio::spawn({
            let orchestrator = orchestrator.clone();
            let gate = gate.clone();
            async move {
                orchestrator
                    .run(|_| {
                        let gate = gate.clone();
                        async move {
                            gate.notified().await;
                            ApiResult::success(1)
                        }
                    })
                    .await
            }
        });

        while !orchestrator.is_in_flight() {
            tokio::task::yield_now().await;
        }
        assert_eq!(orchestrator.state(), OrchestrationState::Attempting(0));

        let second = orchestrator
            .run(failing_after(Some(1), second_calls.clone()))
            .await;
        assert!(second.unwrap_err().is_in_progress());
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);

        gate.notify_one();
        assert_eq!(first.await.unwrap().unwrap(), 1);
        assert_eq!(orchestrator.state(), OrchestrationState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_retries() {
        let orchestrator = Orchestrator::default();
        let mut progress = orchestrator.subscribe();
        let calls = Arc::new(AtomicUsize::new(0));

        orchestrator
            .run(failing_after(Some(2), calls))
            .await
            .unwrap();

        assert!(progress.has_changed().unwrap());
        assert_eq!(progress.borrow_and_update().retries, 1);
    }
}
