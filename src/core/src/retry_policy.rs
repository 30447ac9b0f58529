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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries automatically retry operations when they fail due to
//! transient errors and the operation is idempotent, that is, it is safe to
//! perform the operation more than once.
//!
//! Applications may override the default behavior, and maybe retry operations
//! that, while not safe in general, may be safe given how the application
//! manages resources.

use crate::error::Error;
use crate::loop_state::LoopState;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Controls the behavior of the retry loop.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts, including the attempt that
    ///   just failed.
    /// * `idempotent` - if `true` assume the operation is idempotent. Many
    ///   more errors are retryable on idempotent operations.
    /// * `error` - the last error received. Not all errors come from the
    ///   service; the library may have been unable to send the request, or to
    ///   receive a full response.
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> LoopState;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop uses this value to cap the timeout of the next
    /// attempt. Policies that are not time based return `None`.
    fn remaining_time(&self, _loop_start: Instant, _attempt_count: u32) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T: RetryPolicy + 'static> From<T> for RetryPolicyArg {
    fn from(policy: T) -> Self {
        Self(Arc::new(policy))
    }
}

impl From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(policy: Arc<dyn RetryPolicy>) -> Self {
        Self(policy)
    }
}

/// Retries transient failures on idempotent operations.
///
/// Transient failures are network errors without a response, attempt
/// timeouts, `429 Too Many Requests`, and any `5xx` status. Authentication
/// errors are retried even on non-idempotent operations, as the request never
/// left the client.
///
/// This policy never stops the loop on its own; decorate it with
/// [LimitedAttemptCount] or [LimitedElapsedTime] (see [RetryPolicyExt]) to
/// bound the retries.
///
/// # Example
/// ```
/// # use nimbus_core::retry_policy::*;
/// let policy = TransientErrors.with_attempt_limit(3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransientErrors;

impl RetryPolicy for TransientErrors {
    fn on_error(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> LoopState {
        if error.is_authentication() {
            // The operation never left the client, safe to retry.
            return LoopState::Continue(error);
        }
        if !idempotent {
            return LoopState::Permanent(error);
        }
        if is_transient(&error) {
            LoopState::Continue(error)
        } else {
            LoopState::Permanent(error)
        }
    }
}

fn is_transient(error: &Error) -> bool {
    if error.is_io() || error.is_timeout() {
        return true;
    }
    matches!(error.http_status_code(), Some(429) | Some(500..=599))
}

/// A retry policy decorator that limits the number of attempts.
///
/// Once the maximum attempt count is reached, this policy converts retryable
/// errors into [LoopState::Exhausted], surfacing the last error. Before that,
/// the policy returns the result of the inner policy.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [TransientErrors].
#[derive(Clone, Debug)]
pub struct LimitedAttemptCount<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: TransientErrors,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance decorating `inner`.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> LoopState {
        match self.inner.on_error(loop_start, attempt_count, idempotent, error) {
            LoopState::Continue(e) if attempt_count >= self.maximum_attempts => {
                LoopState::Exhausted(e)
            }
            state => state,
        }
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}

/// A retry policy decorator that limits the duration of the retry loop.
///
/// Once the loop exceeds its duration limit, this policy converts retryable
/// errors into [LoopState::Exhausted]. The policy also reports its deadline
/// through [remaining_time][RetryPolicy::remaining_time], so the last attempt
/// is capped to finish within the limit.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [TransientErrors].
#[derive(Clone, Debug)]
pub struct LimitedElapsedTime<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: TransientErrors,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance decorating `inner`.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> LoopState {
        match self.inner.on_error(loop_start, attempt_count, idempotent, error) {
            LoopState::Continue(e) if loop_start.elapsed() >= self.maximum_duration => {
                LoopState::Exhausted(e)
            }
            state => state,
        }
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        let deadline = loop_start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(Instant::now());
        match self.inner.remaining_time(loop_start, attempt_count) {
            Some(inner) => Some(std::cmp::min(remaining, inner)),
            None => Some(remaining),
        }
    }
}

/// Extension trait to decorate retry policies.
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate the policy to limit the number of attempts.
    ///
    /// # Example
    /// ```
    /// # use nimbus_core::retry_policy::*;
    /// let policy = TransientErrors.with_attempt_limit(3);
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }

    /// Decorate the policy to limit the elapsed time in the retry loop.
    ///
    /// # Example
    /// ```
    /// # use nimbus_core::retry_policy::*;
    /// # use std::time::Duration;
    /// let policy = TransientErrors.with_time_limit(Duration::from_secs(30));
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }
}

impl<T: RetryPolicy + Sized> RetryPolicyExt for T {}
