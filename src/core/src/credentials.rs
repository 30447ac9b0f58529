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

//! The authentication seam of the request pipeline.
//!
//! The pipeline consumes credentials as an opaque capability: something that
//! can produce the authentication headers for a request. How tokens are
//! acquired (interactive login, workload identity, key files) is out of scope
//! for the client libraries; applications plug in a provider implementing
//! [CredentialsProvider].

use crate::error::CredentialsError;
use http::header::{HeaderName, HeaderValue};
use std::future::Future;
use std::sync::Arc;

type Result<T> = std::result::Result<T, CredentialsError>;

/// Implementations of this trait produce the authentication headers for a
/// request.
///
/// The pipeline calls the provider once per request attempt; implementations
/// cache and refresh tokens as needed.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    ///
    /// Different token types are sent via different headers, so providers
    /// return full (name, value) pairs rather than a bare token.
    fn headers(&self) -> impl Future<Output = Result<Vec<(HeaderName, HeaderValue)>>> + Send;
}

pub mod dynamic {
    use super::Result;
    use super::{HeaderName, HeaderValue};

    /// A dyn-compatible version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the auth headers.
        async fn headers(&self) -> Result<Vec<(HeaderName, HeaderValue)>>;
    }

    /// The public CredentialsProvider implements the dyn-compatible version.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: crate::credentials::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<Vec<(HeaderName, HeaderValue)>> {
            T::headers(self).await
        }
    }
}

/// A handle to the credentials used by one client.
///
/// Cheap to clone; the pipeline and all in-flight requests share one
/// underlying provider.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    pub async fn headers(&self) -> Result<Vec<(HeaderName, HeaderValue)>> {
        self.inner.headers().await
    }

    /// Credentials sending a fixed bearer token.
    ///
    /// Useful when the application acquires tokens through its own means.
    ///
    /// # Example
    /// ```
    /// # use nimbus_core::credentials::Credentials;
    /// let credentials = Credentials::bearer("my-token").unwrap();
    /// ```
    pub fn bearer<T: AsRef<str>>(token: T) -> Result<Self> {
        let mut value = HeaderValue::from_str(format!("Bearer {}", token.as_ref()).as_str())
            .map_err(|e| CredentialsError::new(false, e))?;
        value.set_sensitive(true);
        Ok(BearerCredentials { value }.into())
    }

    /// Credentials sending no authentication headers.
    ///
    /// Useful against emulators and local test servers.
    pub fn anonymous() -> Self {
        AnonymousCredentials.into()
    }

    /// Credentials for unit and integration tests.
    pub fn test_credentials() -> Self {
        Self::anonymous()
    }
}

#[derive(Clone)]
struct BearerCredentials {
    value: HeaderValue,
}

impl std::fmt::Debug for BearerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The token must not leak into logs.
        f.debug_struct("BearerCredentials").finish_non_exhaustive()
    }
}

impl CredentialsProvider for BearerCredentials {
    async fn headers(&self) -> Result<Vec<(HeaderName, HeaderValue)>> {
        Ok(vec![(http::header::AUTHORIZATION, self.value.clone())])
    }
}

#[derive(Clone, Debug)]
struct AnonymousCredentials;

impl CredentialsProvider for AnonymousCredentials {
    async fn headers(&self) -> Result<Vec<(HeaderName, HeaderValue)>> {
        Ok(Vec::new())
    }
}
