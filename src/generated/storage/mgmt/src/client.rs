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

use crate::Result;
use crate::model::{ObjectReplicationPolicy, ObjectReplicationPolicyList};
use nimbus::Empty;
use nimbus::error::Error;
use nimbus::http_client::{HttpClient, NoBody};
use nimbus::observability;
use nimbus::options::{ClientConfig, RequestOptions};
use nimbus::paginator::Paginator;
use nimbus::path_parameter;
use nimbus::query_parameter;
use nimbus::response::Response;
use tracing::Instrument;

const CLIENT_NAME: &str = "ObjectReplicationPolicies";

/// Manages the object replication policies of a storage account.
///
/// The client is cheap to clone; clones share the underlying connection pool
/// and policy chain.
#[derive(Clone, Debug)]
pub struct ObjectReplicationPolicies {
    inner: HttpClient,
    subscription_id: String,
}

impl ObjectReplicationPolicies {
    /// Creates a new client scoped to one subscription.
    pub async fn new<T: Into<String>>(subscription_id: T, config: ClientConfig) -> Result<Self> {
        let inner = HttpClient::new(config, crate::DEFAULT_ENDPOINT).await?;
        Ok(Self {
            inner,
            subscription_id: subscription_id.into(),
        })
    }

    /// Get the object replication policy of the storage account by policy ID.
    pub async fn get(
        &self,
        resource_group_name: &str,
        account_name: &str,
        object_replication_policy_id: &str,
        options: RequestOptions,
    ) -> Result<Response<ObjectReplicationPolicy>> {
        let span = observability::create_operation_span(CLIENT_NAME, "Get");
        let result = self
            .get_request(
                resource_group_name,
                account_name,
                object_replication_policy_id,
                options,
            )
            .instrument(span.clone())
            .await;
        observability::record_operation_result(&result, &span);
        result
    }

    async fn get_request(
        &self,
        resource_group_name: &str,
        account_name: &str,
        object_replication_policy_id: &str,
        options: RequestOptions,
    ) -> Result<Response<ObjectReplicationPolicy>> {
        let options = options
            .set_default_idempotency(true)
            .set_success_codes([200]);
        let path = self.policy_path(
            resource_group_name,
            account_name,
            object_replication_policy_id,
        )?;
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        self.inner.execute::<NoBody, _>(builder, None, options).await
    }

    /// Create or update the object replication policy of the storage account.
    pub async fn create_or_update(
        &self,
        resource_group_name: &str,
        account_name: &str,
        object_replication_policy_id: &str,
        properties: ObjectReplicationPolicy,
        options: RequestOptions,
    ) -> Result<Response<ObjectReplicationPolicy>> {
        let span = observability::create_operation_span(CLIENT_NAME, "CreateOrUpdate");
        let result = self
            .create_or_update_request(
                resource_group_name,
                account_name,
                object_replication_policy_id,
                properties,
                options,
            )
            .instrument(span.clone())
            .await;
        observability::record_operation_result(&result, &span);
        result
    }

    async fn create_or_update_request(
        &self,
        resource_group_name: &str,
        account_name: &str,
        object_replication_policy_id: &str,
        properties: ObjectReplicationPolicy,
        options: RequestOptions,
    ) -> Result<Response<ObjectReplicationPolicy>> {
        // PUT with a full payload, safe to retry.
        let options = options
            .set_default_idempotency(true)
            .set_success_codes([200]);
        let path = self.policy_path(
            resource_group_name,
            account_name,
            object_replication_policy_id,
        )?;
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        self.inner.execute(builder, Some(properties), options).await
    }

    /// Deletes the object replication policy associated with the specified
    /// storage account.
    pub async fn delete(
        &self,
        resource_group_name: &str,
        account_name: &str,
        object_replication_policy_id: &str,
        options: RequestOptions,
    ) -> Result<Response<Empty>> {
        let span = observability::create_operation_span(CLIENT_NAME, "Delete");
        let result = self
            .delete_request(
                resource_group_name,
                account_name,
                object_replication_policy_id,
                options,
            )
            .instrument(span.clone())
            .await;
        observability::record_operation_result(&result, &span);
        result
    }

    async fn delete_request(
        &self,
        resource_group_name: &str,
        account_name: &str,
        object_replication_policy_id: &str,
        options: RequestOptions,
    ) -> Result<Response<Empty>> {
        let options = options
            .set_default_idempotency(true)
            .set_success_codes([200, 204]);
        let path = self.policy_path(
            resource_group_name,
            account_name,
            object_replication_policy_id,
        )?;
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        self.inner.execute::<NoBody, _>(builder, None, options).await
    }

    /// List the object replication policies associated with the storage
    /// account.
    ///
    /// Returns a lazy sequence of pages; no request is made until the first
    /// page is consumed. Use [Paginator::items] for a flattened sequence of
    /// policies.
    pub fn list(
        &self,
        resource_group_name: &str,
        account_name: &str,
        options: RequestOptions,
    ) -> Paginator<ObjectReplicationPolicyList, Error> {
        let client = self.clone();
        let resource_group_name = resource_group_name.to_string();
        let account_name = account_name.to_string();
        let execute = move |token: String| {
            let client = client.clone();
            let resource_group_name = resource_group_name.clone();
            let account_name = account_name.clone();
            let options = options.clone();
            async move {
                let span = observability::create_operation_span(CLIENT_NAME, "List");
                let result = client
                    .list_page(&resource_group_name, &account_name, &token, options)
                    .instrument(span.clone())
                    .await;
                observability::record_operation_result(&result, &span);
                result.map(Response::into_body)
            }
        };
        Paginator::new(String::new(), execute)
    }

    async fn list_page(
        &self,
        resource_group_name: &str,
        account_name: &str,
        skip_token: &str,
        options: RequestOptions,
    ) -> Result<Response<ObjectReplicationPolicyList>> {
        let options = options
            .set_default_idempotency(true)
            .set_success_codes([200]);
        let path = format!(
            "{}/objectReplicationPolicies",
            self.account_path(resource_group_name, account_name)?
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        let skip_token = Some(skip_token.to_string()).filter(|t| !t.is_empty());
        let builder = query_parameter::add(builder, "$skipToken", &skip_token);
        self.inner.execute::<NoBody, _>(builder, None, options).await
    }

    fn account_path(&self, resource_group_name: &str, account_name: &str) -> Result<String> {
        Ok(format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Nimbus.Storage/storageAccounts/{}",
            path_parameter::format(path_parameter::required(
                &self.subscription_id,
                "subscription_id"
            )?),
            path_parameter::format(path_parameter::required(
                resource_group_name,
                "resource_group_name"
            )?),
            path_parameter::format(path_parameter::required(account_name, "account_name")?),
        ))
    }

    fn policy_path(
        &self,
        resource_group_name: &str,
        account_name: &str,
        object_replication_policy_id: &str,
    ) -> Result<String> {
        Ok(format!(
            "{}/objectReplicationPolicies/{}",
            self.account_path(resource_group_name, account_name)?,
            path_parameter::format(path_parameter::required(
                object_replication_policy_id,
                "object_replication_policy_id"
            )?),
        ))
    }
}
