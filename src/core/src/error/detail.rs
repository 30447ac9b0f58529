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

use serde::{Deserialize, Serialize};

/// The structured error payload returned by Nimbus services.
///
/// Failure responses carry a standard envelope:
///
/// ```json
/// {"error": {"code": "NotFound", "message": "policy 'default' was not found"}}
/// ```
///
/// The `code` is a symbolic, service-defined string that is stable across
/// service versions; the `message` is a developer-facing description and may
/// change at any time. Some services nest additional [ErrorDetail] values
/// under `details`, for example one per invalid field.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorDetail {
    /// The symbolic error code.
    pub code: String,

    /// A developer-facing error message, in English.
    pub message: String,

    /// The specific element the error applies to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Nested errors that caused, or add detail to, this error.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

impl ErrorDetail {
    /// Sets the value of [code][ErrorDetail::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value of [message][ErrorDetail::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value of [target][ErrorDetail::target].
    pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }

    /// Sets the value of [details][ErrorDetail::details].
    pub fn set_details<I: IntoIterator<Item = ErrorDetail>>(mut self, v: I) -> Self {
        self.details = v.into_iter().collect();
        self
    }
}

/// The wire form of a failure body, `{"error": {...}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

impl TryFrom<&bytes::Bytes> for ErrorDetail {
    type Error = serde_json::Error;

    /// Parses a failure body as the standard error envelope.
    ///
    /// Bodies without the envelope, or with an empty envelope, do not qualify;
    /// the caller falls back to a raw transport error keeping the payload for
    /// diagnostics.
    fn try_from(body: &bytes::Bytes) -> Result<Self, Self::Error> {
        use serde::de::Error as _;
        let envelope = serde_json::from_slice::<ErrorEnvelope>(body)?;
        if envelope.error.code.is_empty() && envelope.error.message.is_empty() {
            return Err(serde_json::Error::custom("empty error envelope"));
        }
        Ok(envelope.error)
    }
}
