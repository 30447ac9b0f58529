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

//! Nimbus Cloud client library for the App Configuration API.
//!
//! Read and write the key-values of a configuration store. List operations
//! page through large stores with a `@nextLink` continuation.
//!
//! # Example
//! ```no_run
//! # use nimbus_appconfig_v1::client::KeyValues;
//! # use nimbus::options::{ClientConfig, RequestOptions};
//! # tokio_test::block_on(async {
//! let client = KeyValues::new("https://my-store.appconfig.nimbus.dev", ClientConfig::default()).await?;
//! let setting = client
//!     .get("greeting", Some("prod"), RequestOptions::default())
//!     .await?;
//! println!("value: {:?}", setting.body().value);
//! # nimbus::Result::<()>::Ok(()) });
//! ```

/// The service version implemented by this library.
pub(crate) const API_VERSION: &str = "2025-06-01";

pub use nimbus::Result;
pub use nimbus::error::Error;

pub mod blocking;
pub mod client;
pub mod model;
