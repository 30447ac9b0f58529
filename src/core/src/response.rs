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

//! Response types.
//!
//! A response from a Nimbus service consists of a body (potentially the unit
//! type) and some metadata, currently just headers. Applications typically
//! get responses from a client; they may also create responses directly when
//! mocking clients in their own tests.

/// Represents a Nimbus Cloud service response.
///
/// # Examples
/// ```
/// # use nimbus_core::response::Response;
/// #[derive(Clone, Default)]
/// pub struct Resource {
///   // ...
/// }
///
/// let response = Response::from(Resource::default());
/// if let Some(date) = response.headers().get("Date") {
///     // do something with the date
/// }
/// let resource = response.body();
/// ```
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with default metadata.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// The headers returned with the response.
    pub fn headers(&self) -> &http::HeaderMap {
        &self.parts.headers
    }

    /// A reference to the response body.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response, returning its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Consumes the response, returning its parts and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }
}

/// The metadata of a service response.
#[derive(Clone, Debug, Default)]
pub struct Parts {
    /// The headers returned with the response.
    pub headers: http::HeaderMap,
}

impl Parts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the headers.
    pub fn set_headers<T: Into<http::HeaderMap>>(mut self, v: T) -> Self {
        self.headers = v.into();
        self
    }
}
