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

//! Nimbus Cloud client library for the Search API.
//!
//! Manage the enrichment skillsets and indexes of a search service. Skills
//! and token filters are polymorphic model families: the `kind` field of
//! each JSON payload selects the concrete variant.
//!
//! # Example
//! ```no_run
//! # use nimbus_search_v1::client::Skillsets;
//! # use nimbus::options::{ClientConfig, RequestOptions};
//! # tokio_test::block_on(async {
//! let client = Skillsets::new("https://my-service.search.nimbus.dev", ClientConfig::default()).await?;
//! let skillset = client.get("ocr-pipeline", RequestOptions::default()).await?;
//! println!("skills: {}", skillset.body().skills.len());
//! # nimbus::Result::<()>::Ok(()) });
//! ```

/// The service version implemented by this library.
pub(crate) const API_VERSION: &str = "2025-06-01";

pub use nimbus::Result;
pub use nimbus::error::Error;

pub mod blocking;
pub mod client;
pub mod model;
