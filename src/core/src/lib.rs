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

//! Nimbus Cloud client runtime.
//!
//! This crate contains the types and functions shared by all the Nimbus Cloud
//! client libraries for Rust: the request pipeline, the error types, the retry
//! and backoff policies, and the pagination adapters. The per-service crates
//! (`nimbus-storage-mgmt`, `nimbus-search-v1`, `nimbus-appconfig-v1`, ...) are
//! mechanical instantiations of the patterns defined here.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Credential providers and the authentication seam of the pipeline.
pub mod credentials;

/// Client configuration and per request options.
pub mod options;

pub mod backoff_policy;
pub mod exponential_backoff;
pub mod loop_state;
pub mod retry_policy;

/// The retry loop shared by all transports.
#[doc(hidden)]
pub mod retry_loop;

/// Response types.
pub mod response;

/// Defines types and traits to consume list operations as lazy sequences of
/// pages or items.
pub mod paginator;

/// Blocking adapters over the async clients and paginators.
pub mod blocking;

/// Defines traits and helpers to serialize path parameters.
///
/// Path parameters are always required. This module checks them before any
/// network activity and percent-encodes them into URL segments, so the
/// generated code always writes:
///
/// nimbus::path_parameter::required(name, "name")?
#[doc(hidden)]
pub mod path_parameter;

/// Defines traits and helpers to serialize query parameters.
#[doc(hidden)]
pub mod query_parameter;

/// Implementation details for [query_parameter] and [path_parameter].
mod request_parameter;

/// The HTTP request pipeline used by generated clients.
#[doc(hidden)]
pub mod http_client;

/// Helpers to create and close the per-operation diagnostic spans.
#[doc(hidden)]
pub mod observability;

mod empty;
pub use empty::Empty;
