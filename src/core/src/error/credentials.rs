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

use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result};
use std::sync::Arc;

/// Represents an error creating or using credentials.
///
/// The client libraries may experience problems creating credentials, for
/// example a badly formatted token, or using them, for example a temporary
/// failure to refresh an access token. The latter can happen even after the
/// credentials were successfully created.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be when mocking a credentials provider in tests.
///
/// # Example
/// ```
/// # use nimbus_core::error::CredentialsError;
/// let err = CredentialsError::from_msg(
///     true, "simulated transient error while refreshing a token");
/// assert!(err.is_transient());
/// assert!(format!("{err}").contains("simulated transient error"));
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsError {
    /// If `true`, the operation that resulted in this error might succeed
    /// upon retry.
    is_transient: bool,
    source: CredentialsErrorImpl,
}

#[derive(Clone, Debug)]
enum CredentialsErrorImpl {
    SimpleMessage(String),
    Source(Arc<dyn Error + Send + Sync>),
}

impl CredentialsError {
    /// Creates a new `CredentialsError` from an underlying error.
    ///
    /// # Arguments
    /// * `is_transient` - whether the error may succeed upon retry.
    /// * `source` - the underlying error that caused the auth failure.
    pub fn new<T: Error + Send + Sync + 'static>(is_transient: bool, source: T) -> Self {
        CredentialsError {
            is_transient,
            source: CredentialsErrorImpl::Source(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` from a message.
    ///
    /// # Arguments
    /// * `is_transient` - whether the error may succeed upon retry.
    /// * `message` - a description of the auth failure.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        CredentialsError {
            is_transient,
            source: CredentialsErrorImpl::SimpleMessage(message.into()),
        }
    }

    /// Returns `true` if the error may succeed upon retry.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.source {
            CredentialsErrorImpl::SimpleMessage(message) => {
                write!(f, "cannot create auth headers: {message}")
            }
            CredentialsErrorImpl::Source(source) => {
                write!(f, "cannot create auth headers: {source}")
            }
        }
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            CredentialsErrorImpl::SimpleMessage(_) => None,
            CredentialsErrorImpl::Source(source) => Some(source.as_ref()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_msg() {
        let err = CredentialsError::from_msg(true, "test-only-message");
        assert!(err.is_transient());
        assert!(err.source().is_none(), "{err:?}");
        assert!(err.to_string().contains("test-only-message"), "{err}");

        let err = CredentialsError::from_msg(false, "test-only-message");
        assert!(!err.is_transient());
    }

    #[test]
    fn from_source() {
        let source = http::HeaderValue::from_bytes(b"\0").unwrap_err();
        let err = CredentialsError::new(false, source);
        assert!(!err.is_transient());
        assert!(err.source().is_some(), "{err:?}");
    }
}
