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
//! This module mirrors [crate::client] for applications that are not async.
//! Each method drives the async implementation on a runtime owned by the
//! client, so validation, diagnostics, retry, and dispatch are identical to
//! the async surface; only the caller's thread blocks during the network
//! wait.

use crate::Result;
use crate::model::{ObjectReplicationPolicy, ObjectReplicationPolicyList};
use nimbus::Empty;
use nimbus::options::{ClientConfig, RequestOptions};
use nimbus::response::Response;
use std::sync::Arc;

/// The blocking twin of [crate::client::ObjectReplicationPolicies].
#[derive(Clone, Debug)]
pub struct ObjectReplicationPolicies {
    inner: crate::client::ObjectReplicationPolicies,
    runtime: Arc<tokio::runtime::Runtime>,
}

impl ObjectReplicationPolicies {
    /// Creates a new client scoped to one subscription.
    pub fn new<T: Into<String>>(subscription_id: T, config: ClientConfig) -> Result<Self> {
        let runtime = nimbus::blocking::runtime()?;
        let inner = runtime.block_on(crate::client::ObjectReplicationPolicies::new(
            subscription_id,
            config,
        ))?;
        Ok(Self { inner, runtime })
    }

    /// Get the object replication policy of the storage account by policy ID.
    pub fn get(
        &self,
        resource_group_name: &str,
        account_name: &str,
        object_replication_policy_id: &str,
        options: RequestOptions,
    ) -> Result<Response<ObjectReplicationPolicy>> {
        self.runtime.block_on(self.inner.get(
            resource_group_name,
            account_name,
            object_replication_policy_id,
            options,
        ))
    }

    /// Create or update the object replication policy of the storage account.
    pub fn create_or_update(
        &self,
        resource_group_name: &str,
        account_name: &str,
        object_replication_policy_id: &str,
        properties: ObjectReplicationPolicy,
        options: RequestOptions,
    ) -> Result<Response<ObjectReplicationPolicy>> {
        self.runtime.block_on(self.inner.create_or_update(
            resource_group_name,
            account_name,
            object_replication_policy_id,
            properties,
            options,
        ))
    }

    /// Deletes the object replication policy associated with the specified
    /// storage account.
    pub fn delete(
        &self,
        resource_group_name: &str,
        account_name: &str,
        object_replication_policy_id: &str,
        options: RequestOptions,
    ) -> Result<Response<Empty>> {
        self.runtime.block_on(self.inner.delete(
            resource_group_name,
            account_name,
            object_replication_policy_id,
            options,
        ))
    }

    /// List the object replication policies associated with the storage
    /// account.
    pub fn list(
        &self,
        resource_group_name: &str,
        account_name: &str,
        options: RequestOptions,
    ) -> nimbus::blocking::Pages<ObjectReplicationPolicyList> {
        nimbus::blocking::Pages::new(
            self.runtime.clone(),
            self.inner.list(resource_group_name, account_name, options),
        )
    }
}
