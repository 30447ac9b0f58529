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
use crate::model::{KeyValue, ListKeyValuesResponse, SettingFields};
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

const CLIENT_NAME: &str = "KeyValues";

/// Reads and writes the key-values of one configuration store.
#[derive(Clone, Debug)]
pub struct KeyValues {
    inner: HttpClient,
}

impl KeyValues {
    /// Creates a new client against the given store endpoint, e.g.
    /// `https://my-store.appconfig.nimbus.dev`.
    pub async fn new<T: Into<String>>(endpoint: T, config: ClientConfig) -> Result<Self> {
        let inner = HttpClient::new(config, &endpoint.into()).await?;
        Ok(Self { inner })
    }

    /// Retrieves one key-value.
    pub async fn get(
        &self,
        key: &str,
        label: Option<&str>,
        options: RequestOptions,
    ) -> Result<Response<KeyValue>> {
        let span = observability::create_operation_span(CLIENT_NAME, "Get");
        let result = self
            .get_request(key, label, options)
            .instrument(span.clone())
            .await;
        observability::record_operation_result(&result, &span);
        result
    }

    async fn get_request(
        &self,
        key: &str,
        label: Option<&str>,
        options: RequestOptions,
    ) -> Result<Response<KeyValue>> {
        let options = options
            .set_default_idempotency(true)
            .set_success_codes([200]);
        let path = self.key_value_path(key)?;
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = query_parameter::add(builder, "label", &label.map(str::to_string));
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        self.inner.execute::<NoBody, _>(builder, None, options).await
    }

    /// Creates or replaces one key-value.
    ///
    /// `if_match` makes the write conditional on the stored etag, so
    /// concurrent writers cannot silently overwrite each other.
    pub async fn put(
        &self,
        key: &str,
        entity: KeyValue,
        label: Option<&str>,
        if_match: Option<&str>,
        options: RequestOptions,
    ) -> Result<Response<KeyValue>> {
        let span = observability::create_operation_span(CLIENT_NAME, "Put");
        let result = self
            .put_request(key, entity, label, if_match, options)
            .instrument(span.clone())
            .await;
        observability::record_operation_result(&result, &span);
        result
    }

    async fn put_request(
        &self,
        key: &str,
        entity: KeyValue,
        label: Option<&str>,
        if_match: Option<&str>,
        options: RequestOptions,
    ) -> Result<Response<KeyValue>> {
        // PUT with a full payload, safe to retry.
        let options = options
            .set_default_idempotency(true)
            .set_success_codes([200]);
        let path = self.key_value_path(key)?;
        let mut builder = self.inner.builder(reqwest::Method::PUT, path);
        if let Some(etag) = if_match {
            builder = builder.header(
                "If-Match",
                reqwest::header::HeaderValue::from_str(etag).map_err(Error::ser)?,
            );
        }
        let builder = query_parameter::add(builder, "label", &label.map(str::to_string));
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        self.inner.execute(builder, Some(entity), options).await
    }

    /// Deletes one key-value.
    ///
    /// Deleting a key-value that does not exist is not an error.
    pub async fn delete(
        &self,
        key: &str,
        label: Option<&str>,
        options: RequestOptions,
    ) -> Result<Response<Empty>> {
        let span = observability::create_operation_span(CLIENT_NAME, "Delete");
        let result = self
            .delete_request(key, label, options)
            .instrument(span.clone())
            .await;
        observability::record_operation_result(&result, &span);
        result
    }

    async fn delete_request(
        &self,
        key: &str,
        label: Option<&str>,
        options: RequestOptions,
    ) -> Result<Response<Empty>> {
        let options = options
            .set_default_idempotency(true)
            .set_success_codes([200, 204]);
        let path = self.key_value_path(key)?;
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = query_parameter::add(builder, "label", &label.map(str::to_string));
        let builder = query_parameter::add(builder, "api-version", &crate::API_VERSION);
        self.inner.execute::<NoBody, _>(builder, None, options).await
    }

    /// Lists the key-values of the store.
    ///
    /// `key_filter` and `label_filter` restrict the results (`*` wildcards
    /// are supported by the service); `select` restricts the returned
    /// fields. Returns a lazy sequence of pages; no request is made until
    /// the first page is consumed. Subsequent pages follow the `@nextLink`
    /// returned by the service.
    pub fn list(
        &self,
        key_filter: Option<&str>,
        label_filter: Option<&str>,
        select: Option<Vec<SettingFields>>,
        options: RequestOptions,
    ) -> Paginator<ListKeyValuesResponse, Error> {
        let client = self.clone();
        let key_filter = key_filter.map(str::to_string);
        let label_filter = label_filter.map(str::to_string);
        let execute = move |token: String| {
            let client = client.clone();
            let key_filter = key_filter.clone();
            let label_filter = label_filter.clone();
            let select = select.clone();
            let options = options.clone();
            async move {
                let span = observability::create_operation_span(CLIENT_NAME, "List");
                let result = client
                    .list_page(key_filter, label_filter, select, &token, options)
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
        key_filter: Option<String>,
        label_filter: Option<String>,
        select: Option<Vec<SettingFields>>,
        next_link: &str,
        options: RequestOptions,
    ) -> Result<Response<ListKeyValuesResponse>> {
        let options = options
            .set_default_idempotency(true)
            .set_success_codes([200]);
        // The continuation is a service-relative link carrying its own
        // query, fetched as-is.
        let builder = if next_link.is_empty() {
            let builder = self.inner.builder(reqwest::Method::GET, "/kv".to_string());
            let builder = query_parameter::add(builder, "key", &key_filter);
            let builder = query_parameter::add(builder, "label", &label_filter);
            let select = select
                .map(|fields| fields.iter().map(|f| f.as_str().to_string()).collect::<Vec<_>>());
            let builder = query_parameter::add(builder, "$select", &select);
            query_parameter::add(builder, "api-version", &crate::API_VERSION)
        } else {
            self.inner
                .builder(reqwest::Method::GET, next_link.to_string())
        };
        self.inner.execute::<NoBody, _>(builder, None, options).await
    }

    fn key_value_path(&self, key: &str) -> Result<String> {
        Ok(format!(
            "/kv/{}",
            path_parameter::format(path_parameter::required(key, "key")?)
        ))
    }
}
