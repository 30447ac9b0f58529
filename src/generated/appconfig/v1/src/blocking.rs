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

//! The blocking calling convention.
//!
//! Mirrors [crate::client] by driving the async client on a runtime owned
//! by the wrapper; only the caller's thread blocks during the network wait.

use crate::Result;
use crate::model::{KeyValue, ListKeyValuesResponse, SettingFields};
use nimbus::Empty;
use nimbus::options::{ClientConfig, RequestOptions};
use nimbus::response::Response;
use std::sync::Arc;

/// The blocking twin of [crate::client::KeyValues].
#[derive(Clone, Debug)]
pub struct KeyValues {
    inner: crate::client::KeyValues,
    runtime: Arc<tokio::runtime::Runtime>,
}

impl KeyValues {
    /// Creates a new client against the given store endpoint.
    pub fn new<T: Into<String>>(endpoint: T, config: ClientConfig) -> Result<Self> {
        let runtime = nimbus::blocking::runtime()?;
        let inner = runtime.block_on(crate::client::KeyValues::new(endpoint, config))?;
        Ok(Self { inner, runtime })
    }

    /// Retrieves one key-value.
    pub fn get(
        &self,
        key: &str,
        label: Option<&str>,
        options: RequestOptions,
    ) -> Result<Response<KeyValue>> {
        self.runtime.block_on(self.inner.get(key, label, options))
    }

    /// Creates or replaces one key-value.
    pub fn put(
        &self,
        key: &str,
        entity: KeyValue,
        label: Option<&str>,
        if_match: Option<&str>,
        options: RequestOptions,
    ) -> Result<Response<KeyValue>> {
        self.runtime
            .block_on(self.inner.put(key, entity, label, if_match, options))
    }

    /// Deletes one key-value.
    pub fn delete(
        &self,
        key: &str,
        label: Option<&str>,
        options: RequestOptions,
    ) -> Result<Response<Empty>> {
        self.runtime
            .block_on(self.inner.delete(key, label, options))
    }

    /// Lists the key-values of the store.
    pub fn list(
        &self,
        key_filter: Option<&str>,
        label_filter: Option<&str>,
        select: Option<Vec<SettingFields>>,
        options: RequestOptions,
    ) -> nimbus::blocking::Pages<ListKeyValuesResponse> {
        nimbus::blocking::Pages::new(
            self.runtime.clone(),
            self.inner.list(key_filter, label_filter, select, options),
        )
    }
}
