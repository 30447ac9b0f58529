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
//! Mirrors [crate::client] by driving the async clients on a runtime owned
//! by the wrapper; only the caller's thread blocks during the network wait.

use crate::Result;
use crate::model::{ListSkillsetsResponse, SearchIndex, Skillset};
use nimbus::Empty;
use nimbus::options::{ClientConfig, RequestOptions};
use nimbus::response::Response;
use std::sync::Arc;

/// The blocking twin of [crate::client::Skillsets].
#[derive(Clone, Debug)]
pub struct Skillsets {
    inner: crate::client::Skillsets,
    runtime: Arc<tokio::runtime::Runtime>,
}

impl Skillsets {
    /// Creates a new client against the given service endpoint.
    pub fn new<T: Into<String>>(endpoint: T, config: ClientConfig) -> Result<Self> {
        let runtime = nimbus::blocking::runtime()?;
        let inner = runtime.block_on(crate::client::Skillsets::new(endpoint, config))?;
        Ok(Self { inner, runtime })
    }

    /// Creates a new skillset in the service.
    pub fn create(&self, skillset: Skillset, options: RequestOptions) -> Result<Response<Skillset>> {
        self.runtime.block_on(self.inner.create(skillset, options))
    }

    /// Retrieves a skillset by name.
    pub fn get(&self, skillset_name: &str, options: RequestOptions) -> Result<Response<Skillset>> {
        self.runtime.block_on(self.inner.get(skillset_name, options))
    }

    /// Deletes a skillset.
    pub fn delete(&self, skillset_name: &str, options: RequestOptions) -> Result<Response<Empty>> {
        self.runtime
            .block_on(self.inner.delete(skillset_name, options))
    }

    /// Lists the skillsets in the service.
    pub fn list(
        &self,
        select: Option<Vec<String>>,
        options: RequestOptions,
    ) -> nimbus::blocking::Pages<ListSkillsetsResponse> {
        nimbus::blocking::Pages::new(self.runtime.clone(), self.inner.list(select, options))
    }
}

/// The blocking twin of [crate::client::Indexes].
#[derive(Clone, Debug)]
pub struct Indexes {
    inner: crate::client::Indexes,
    runtime: Arc<tokio::runtime::Runtime>,
}

impl Indexes {
    /// Creates a new client against the given service endpoint.
    pub fn new<T: Into<String>>(endpoint: T, config: ClientConfig) -> Result<Self> {
        let runtime = nimbus::blocking::runtime()?;
        let inner = runtime.block_on(crate::client::Indexes::new(endpoint, config))?;
        Ok(Self { inner, runtime })
    }

    /// Creates a new index in the service.
    pub fn create(&self, index: SearchIndex, options: RequestOptions) -> Result<Response<SearchIndex>> {
        self.runtime.block_on(self.inner.create(index, options))
    }

    /// Retrieves an index definition by name.
    pub fn get(&self, index_name: &str, options: RequestOptions) -> Result<Response<SearchIndex>> {
        self.runtime.block_on(self.inner.get(index_name, options))
    }
}
