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

//! Nimbus Cloud client library for the Storage Management API.
//!
//! Manage storage accounts and their sub-resources; this version of the
//! library covers the object replication policies of a storage account.
//!
//! # Example
//! ```no_run
//! # use nimbus_storage_mgmt::client::ObjectReplicationPolicies;
//! # use nimbus::options::{ClientConfig, RequestOptions};
//! # tokio_test::block_on(async {
//! let client = ObjectReplicationPolicies::new("my-subscription", ClientConfig::default()).await?;
//! let policy = client
//!     .get("my-rg", "myaccount", "default", RequestOptions::default())
//!     .await?;
//! println!("rules: {:?}", policy.body().rules);
//! # nimbus::Result::<()>::Ok(()) });
//! ```

/// The default service endpoint.
pub(crate) const DEFAULT_ENDPOINT: &str = "https://management.nimbus.dev";

/// The service version implemented by this library.
pub(crate) const API_VERSION: &str = "2025-06-01";

pub use nimbus::Result;
pub use nimbus::error::Error;

pub mod blocking;
pub mod client;
pub mod model;
