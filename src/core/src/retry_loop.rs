// Copyright 2025 Nimbus Cloud LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::Result;
use super::backoff_policy::BackoffPolicy;
use super::error::Error;
use super::loop_state::LoopState;
use super::options::RequestOptions;
use super::retry_policy::RetryPolicy;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Runs the retry loop for a given function.
///
/// This function calls an inner function as long as (1) the retry policy has
/// not expired, (2) the inner function has not returned a successful request,
/// and (3) the caller has not cancelled the request.
///
/// In between attempts the function waits the amount of time prescribed by
/// the backoff policy, using `backoff` to implement any sleep. The sleep is
/// raced against the cancellation token: cancelling mid-backoff surfaces a
/// cancellation error, not a retry-exhausted error.
pub async fn retry_loop<F, B, Response>(
    inner: F,
    backoff: B,
    idempotent: bool,
    cancel: CancellationToken,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFn(Option<std::time::Duration>) -> Result<Response> + Send,
    B: AsyncFn(std::time::Duration) -> () + Send,
{
    let loop_start = std::time::Instant::now();
    let mut attempt_count = 0;
    loop {
        if cancel.is_cancelled() {
            return Err(cancelled());
        }
        let remaining_time = retry_policy.remaining_time(loop_start, attempt_count);
        attempt_count += 1;
        match inner(remaining_time).await {
            Ok(r) => return Ok(r),
            Err(e) if e.is_cancelled() => return Err(e),
            Err(e) => {
                let flow = retry_policy.on_error(loop_start, attempt_count, idempotent, e);
                let delay = backoff_policy.on_failure(loop_start, attempt_count);
                match flow {
                    // Retry exhaustion surfaces the last failure as-is.
                    LoopState::Permanent(e) | LoopState::Exhausted(e) => return Err(e),
                    LoopState::Continue(_e) => {
                        tokio::select! {
                            _ = cancel.cancelled() => return Err(cancelled()),
                            _ = backoff(delay) => {}
                        }
                    }
                }
            }
        };
    }
}

fn cancelled() -> Error {
    Error::cancelled("the caller requested cancellation")
}

/// Computes the timeout for the next attempt.
///
/// The next attempt is capped by the per-attempt timeout (if any) and by the
/// time remaining in the retry policy (if any).
pub fn effective_timeout(
    options: &RequestOptions,
    remaining_time: Option<std::time::Duration>,
) -> Option<std::time::Duration> {
    match (options.attempt_timeout(), remaining_time) {
        (Some(t), Some(r)) => Some(*std::cmp::min(t, &r)),
        (None, Some(r)) => Some(r),
        (Some(t), None) => Some(*t),
        (None, None) => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn immediate_success() -> anyhow::Result<()> {
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .return_const(None);
        let backoff_policy = MockBackoffPolicy::new();

        let inner = async |_| Ok("success".to_string());
        let backoff = async |d| tokio::time::sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            true,
            CancellationToken::new(),
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    #[tokio::test]
    async fn success_after_retries() -> anyhow::Result<()> {
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .times(3)
            .return_const(None);
        retry_policy
            .expect_on_error()
            .times(2)
            .returning(|_, _, _, e| LoopState::Continue(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .times(2)
            .return_const(Duration::ZERO);

        let counter = std::sync::atomic::AtomicU32::new(0);
        let inner = async |_| {
            let c = counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if c < 2 {
                Err(transient())
            } else {
                Ok("success".to_string())
            }
        };
        let backoff = async |d| tokio::time::sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            true,
            CancellationToken::new(),
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    #[tokio::test]
    async fn permanent_error_stops_the_loop() {
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .return_const(None);
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| LoopState::Permanent(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .once()
            .return_const(Duration::ZERO);

        let inner = async |_| Err::<String, Error>(transient());
        let backoff = async |d| tokio::time::sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            true,
            CancellationToken::new(),
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await;
        let err = response.unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
    }

    #[tokio::test]
    async fn exhausted_surfaces_last_error() {
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().return_const(None);
        retry_policy
            .expect_on_error()
            .times(3)
            .returning(|_, attempt_count, _, e| {
                if attempt_count < 3 {
                    LoopState::Continue(e)
                } else {
                    LoopState::Exhausted(e)
                }
            });
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .return_const(Duration::ZERO);

        let inner = async |_| Err::<String, Error>(transient());
        let backoff = async |d| tokio::time::sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            true,
            CancellationToken::new(),
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await;
        let err = response.unwrap_err();
        // Not wrapped, the last failure is surfaced as-is.
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
    }

    #[tokio::test]
    async fn already_cancelled_fails_without_sending() {
        let retry_policy = MockRetryPolicy::new();
        let backoff_policy = MockBackoffPolicy::new();

        let cancel = CancellationToken::new();
        cancel.cancel();
        let inner = async |_| {
            assert!(false, "the attempt function must not be called");
            Err::<String, Error>(Error::io("unreachable"))
        };
        let backoff = async |d| tokio::time::sleep(d).await;
        let response = retry_loop(
            inner,
            backoff,
            true,
            cancel,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await;
        let err = response.unwrap_err();
        assert!(err.is_cancelled(), "{err:?}");
    }

    #[tokio::test]
    async fn cancelled_during_backoff() {
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .return_const(None);
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| LoopState::Continue(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .once()
            .return_const(Duration::from_secs(3600));

        let cancel = CancellationToken::new();
        let inner = {
            let cancel = cancel.clone();
            async move |_| {
                // Request cancellation while the loop sleeps in its backoff.
                cancel.cancel();
                Err::<String, Error>(transient())
            }
        };
        let backoff = async |d| tokio::time::sleep(d).await;
        let start = Instant::now();
        let response = retry_loop(
            inner,
            backoff,
            true,
            cancel,
            to_retry_policy(retry_policy),
            to_backoff_policy(backoff_policy),
        )
        .await;
        let err = response.unwrap_err();
        assert!(err.is_cancelled(), "{err:?}");
        assert!(start.elapsed() < Duration::from_secs(3600));
    }

    #[test]
    fn effective_timeout_cases() {
        let options = RequestOptions::default();
        assert_eq!(effective_timeout(&options, None), None);
        assert_eq!(
            effective_timeout(&options, Some(Duration::from_secs(5))),
            Some(Duration::from_secs(5))
        );

        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_secs(10));
        assert_eq!(
            effective_timeout(&options, None),
            Some(Duration::from_secs(10))
        );
        assert_eq!(
            effective_timeout(&options, Some(Duration::from_secs(5))),
            Some(Duration::from_secs(5))
        );
        assert_eq!(
            effective_timeout(&options, Some(Duration::from_secs(20))),
            Some(Duration::from_secs(10))
        );
    }

    fn transient() -> Error {
        Error::http(
            503,
            http::HeaderMap::new(),
            bytes::Bytes::from_static(b"service unavailable"),
        )
    }

    fn to_retry_policy(mock: MockRetryPolicy) -> Arc<dyn RetryPolicy> {
        Arc::new(mock)
    }

    fn to_backoff_policy(mock: MockBackoffPolicy) -> Arc<dyn BackoffPolicy> {
        Arc::new(mock)
    }

    mockall::mock! {
        #[derive(Debug)]
        RetryPolicy {}
        impl RetryPolicy for RetryPolicy {
            fn on_error(&self, loop_start: std::time::Instant, attempt_count: u32, idempotent: bool, error: Error) -> LoopState;
            fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<std::time::Duration>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        BackoffPolicy {}
        impl BackoffPolicy for BackoffPolicy {
            fn on_failure(&self, loop_start: std::time::Instant, attempt_count: u32) -> std::time::Duration;
        }
    }
}
