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

//! Client configuration and per request options.
//!
//! The client library defaults are intended to work for most applications,
//! but it is sometimes necessary to change the configuration. Notably the
//! default endpoint and the default credentials do not work for some
//! applications.
//!
//! Likewise, applications may need to customize the behavior of some calls
//! made via a client, even a customized one: change the timeout for a
//! specific call, change the retry configuration, or attach a cancellation
//! signal.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::credentials::Credentials;
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// A set of options configuring a single request.
///
/// The generated clients accept this type on every operation. The operation
/// sets the wire-contract defaults (idempotency, declared success codes)
/// before the pipeline runs, so applications normally pass
/// `RequestOptions::default()`.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub(crate) idempotent: Option<bool>,
    attempt_timeout: Option<std::time::Duration>,
    pub(crate) retry_policy: Option<Arc<dyn RetryPolicy>>,
    pub(crate) backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    cancellation_token: Option<CancellationToken>,
    client_request_id: Option<String>,
    success_codes: Option<Vec<u16>>,
}

impl RequestOptions {
    /// Treat the underlying operation in this request as idempotent.
    ///
    /// If a retry policy is configured, the policy may examine the
    /// idempotency and the error details to decide if the error is
    /// retryable. Typically idempotent operations are safe to retry under
    /// more error conditions than non-idempotent ones.
    ///
    /// The client libraries provide a default based on the HTTP method
    /// (`GET`, `POST`, `DELETE`, etc.).
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// Set the idempotency for the underlying operation unless it is already
    /// set.
    ///
    /// The generated clients use this to provide a default idempotency value
    /// without overriding an application choice.
    pub fn set_default_idempotency(mut self, default: bool) -> Self {
        self.idempotent.get_or_insert(default);
        self
    }

    /// Gets the current idempotency setting.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt.
    /// The overall timeout for a request is set by the retry policy.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Sets the retry policy configuration.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().0);
    }

    /// Sets the backoff policy configuration.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().0);
    }

    /// Sets the cancellation token for this request.
    ///
    /// The pipeline checks the token before each attempt and while waiting
    /// for the transport, so an already-cancelled token fails immediately
    /// without sending.
    pub fn set_cancellation_token(&mut self, v: CancellationToken) {
        self.cancellation_token = Some(v);
    }

    /// Gets the cancellation token, if any.
    pub fn cancellation_token(&self) -> &Option<CancellationToken> {
        &self.cancellation_token
    }

    /// Sets the client request id sent in the correlation header.
    pub fn set_client_request_id<T: Into<String>>(&mut self, v: T) {
        self.client_request_id = Some(v.into());
    }

    /// Gets the client request id, if any.
    pub fn client_request_id(&self) -> &Option<String> {
        &self.client_request_id
    }

    /// Sets the status codes declared as success for this operation.
    ///
    /// Part of the wire contract; set by the generated code, not by
    /// applications. Statuses outside this set become request-failed errors.
    /// When unset, any 2xx status is a success.
    pub fn set_success_codes<I: IntoIterator<Item = u16>>(mut self, v: I) -> Self {
        self.success_codes = Some(v.into_iter().collect());
        self
    }

    /// Gets the status codes declared as success, if any.
    pub fn success_codes(&self) -> &Option<Vec<u16>> {
        &self.success_codes
    }
}

/// Configure a client.
///
/// A client represents a connection to a Nimbus Cloud service. The default
/// configuration for each client should work for most applications, but some
/// applications may need to override the default endpoint, the credentials,
/// or the retry behavior.
///
/// # Example
/// ```
/// # use nimbus_core::options::ClientConfig;
/// # use nimbus_core::retry_policy::{TransientErrors, RetryPolicyExt};
/// let config = ClientConfig::default()
///     .set_endpoint("https://storage.region1.nimbus.dev")
///     .set_retry_policy(TransientErrors.with_attempt_limit(5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub(crate) endpoint: Option<String>,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) retry_policy: Option<Arc<dyn RetryPolicy>>,
    pub(crate) backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl ClientConfig {
    /// Sets the endpoint, overriding the service default.
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Sets the credentials used by the client.
    pub fn set_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.credentials = Some(v.into());
        self
    }

    /// Sets the default retry policy for all requests made by the client.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = Some(v.into().0);
        self
    }

    /// Sets the default backoff policy for all requests made by the client.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.backoff_policy = Some(v.into().0);
        self
    }
}
