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
use crate::model::{ListSkillsetsResponse, SearchIndex, Skillset};
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

/// Manages the skillsets of a search service.
#[derive(Clone, Debug)]
pub struct Skillsets {
    inner: HttpClient,
}

impl Skillsets {
    const CLIENT_NAME: &str = "Skillsets";

    /// Creates a new client against the given service endpoint, e.g.
    /// `https://my-service.search.nimbus.dev`.
    pub async fn new<T: Into<String>>(endpoint: T, config: ClientConfig) -> Result<Self> {
        let inner = HttpClient::new(config, &endpoint.into()).await?;
        Ok(Self { inner })
    }

    /// Creates a new skillset in the service.
    pub async fn create(
        &self,
        skillset: Skillset,
        options: RequestOptions,
    ) -> Result<Response<Skillset>> {
        let span = observability::create_operation_span(Self::CLIENT_NAME, "Create");
        let result = self
            .create_request(skillset, options)
            .instrument(span.clone())
            .await;
        observability::record_operation_result(&result, &span);
        result
    }

    async fn create_request(
        &self,
        skillset: Skillset,
        options: RequestOptions,
    ) -> Result<Response<Skillset>> {
        path_parameter::required(&skillset.name, "skillset.name")?;
        let options = options
            .set_default_idempotency(false)
            .set_success_codes([201]);
        let builder = self.inner.builder(reqwest::Method::POST, "/skillsets".to_string());
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        self.inner.execute(builder, Some(skillset), options).await
    }

    /// Retrieves a skillset by name.
    pub async fn get(
        &self,
        skillset_name: &str,
        options: RequestOptions,
    ) -> Result<Response<Skillset>> {
        let span = observability::create_operation_span(Self::CLIENT_NAME, "Get");
        let result = self
            .get_request(skillset_name, options)
            .instrument(span.clone())
            .await;
        observability::record_operation_result(&result, &span);
        result
    }

    async fn get_request(
        &self,
        skillset_name: &str,
        options: RequestOptions,
    ) -> Result<Response<Skillset>> {
        let options = options
            .set_default_idempotency(true)
            .set_success_codes([200]);
        let path = format!(
            "/skillsets/{}",
            path_parameter::format(path_parameter::required(skillset_name, "skillset_name")?)
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        self.inner.execute::<NoBody, _>(builder, None, options).await
    }

    /// Deletes a skillset.
    pub async fn delete(
        &self,
        skillset_name: &str,
        options: RequestOptions,
    ) -> Result<Response<Empty>> {
        let span = observability::create_operation_span(Self::CLIENT_NAME, "Delete");
        let result = self
            .delete_request(skillset_name, options)
            .instrument(span.clone())
            .await;
        observability::record_operation_result(&result, &span);
        result
    }

    async fn delete_request(
        &self,
        skillset_name: &str,
        options: RequestOptions,
    ) -> Result<Response<Empty>> {
        let options = options
            .set_default_idempotency(true)
            .set_success_codes([204]);
        let path = format!(
            "/skillsets/{}",
            path_parameter::format(path_parameter::required(skillset_name, "skillset_name")?)
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        self.inner.execute::<NoBody, _>(builder, None, options).await
    }

    /// Lists the skillsets in the service.
    ///
    /// `select` restricts the returned fields; `None` returns all fields.
    /// Returns a lazy sequence of pages; no request is made until the first
    /// page is consumed.
    pub fn list(
        &self,
        select: Option<Vec<String>>,
        options: RequestOptions,
    ) -> Paginator<ListSkillsetsResponse, Error> {
        let client = self.clone();
        let execute = move |token: String| {
            let client = client.clone();
            let select = select.clone();
            let options = options.clone();
            async move {
                let span = observability::create_operation_span(Self::CLIENT_NAME, "List");
                let result = client
                    .list_page(select, &token, options)
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
        select: Option<Vec<String>>,
        continuation: &str,
        options: RequestOptions,
    ) -> Result<Response<ListSkillsetsResponse>> {
        let options = options
            .set_default_idempotency(true)
            .set_success_codes([200]);
        let builder = self.inner.builder(reqwest::Method::GET, "/skillsets".to_string());
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        let builder = query_parameter::add(builder, "$select", &select);
        let continuation = Some(continuation.to_string()).filter(|t| !t.is_empty());
        let builder = query_parameter::add(builder, "$skipToken", &continuation);
        self.inner.execute::<NoBody, _>(builder, None, options).await
    }
}

/// Manages the indexes of a search service.
#[derive(Clone, Debug)]
pub struct Indexes {
    inner: HttpClient,
}

impl Indexes {
    const CLIENT_NAME: &str = "Indexes";

    /// Creates a new client against the given service endpoint.
    pub async fn new<T: Into<String>>(endpoint: T, config: ClientConfig) -> Result<Self> {
        let inner = HttpClient::new(config, &endpoint.into()).await?;
        Ok(Self { inner })
    }

    /// Creates a new index in the service.
    pub async fn create(
        &self,
        index: SearchIndex,
        options: RequestOptions,
    ) -> Result<Response<SearchIndex>> {
        let span = observability::create_operation_span(Self::CLIENT_NAME, "Create");
        let result = self
            .create_request(index, options)
            .instrument(span.clone())
            .await;
        observability::record_operation_result(&result, &span);
        result
    }

    async fn create_request(
        &self,
        index: SearchIndex,
        options: RequestOptions,
    ) -> Result<Response<SearchIndex>> {
        path_parameter::required(&index.name, "index.name")?;
        let options = options
            .set_default_idempotency(false)
            .set_success_codes([201]);
        let builder = self.inner.builder(reqwest::Method::POST, "/indexes".to_string());
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        self.inner.execute(builder, Some(index), options).await
    }

    /// Retrieves an index definition by name.
    pub async fn get(
        &self,
        index_name: &str,
        options: RequestOptions,
    ) -> Result<Response<SearchIndex>> {
        let span = observability::create_operation_span(Self::CLIENT_NAME, "Get");
        let result = self
            .get_request(index_name, options)
            .instrument(span.clone())
            .await;
        observability::record_operation_result(&result, &span);
        result
    }

    async fn get_request(
        &self,
        index_name: &str,
        options: RequestOptions,
    ) -> Result<Response<SearchIndex>> {
        let options = options
            .set_default_idempotency(true)
            .set_success_codes([200]);
        let path = format!(
            "/indexes/{}",
            path_parameter::format(path_parameter::required(index_name, "index_name")?)
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        self.inner.execute::<NoBody, _>(builder, None, options).await
    }
}
