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
use crate::backoff_policy::BackoffPolicy;
use crate::credentials::Credentials;
use crate::error::{Error, ErrorDetail};
use crate::exponential_backoff::ExponentialBackoff;
use crate::options::{ClientConfig, RequestOptions};
use crate::response::{Parts, Response};
use crate::retry_policy::{LimitedAttemptCount, RetryPolicy};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// The correlation header echoed back by the services.
pub const CLIENT_REQUEST_ID: &str = "x-nimbus-client-request-id";

/// The attempt cap used when the application does not configure a retry
/// policy.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// The HTTP request pipeline shared by all generated clients.
///
/// One instance per client; the policy chain (diagnostics, auth, retry,
/// transport) and the connection pool beneath the transport are shared,
/// read-only after construction, across all calls issued through it.
#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: reqwest::Client,
    credentials: Credentials,
    endpoint: String,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
}

impl HttpClient {
    pub async fn new(config: ClientConfig, default_endpoint: &str) -> Result<Self> {
        let inner = reqwest::Client::new();
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        let credentials = config.credentials.unwrap_or_else(Credentials::anonymous);
        let retry_policy = config
            .retry_policy
            .unwrap_or_else(|| Arc::new(LimitedAttemptCount::new(DEFAULT_MAX_ATTEMPTS)));
        let backoff_policy = config
            .backoff_policy
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()));
        Ok(Self {
            inner,
            credentials,
            endpoint,
            retry_policy,
            backoff_policy,
        })
    }

    /// Starts a request against `path` on the configured endpoint.
    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    /// Runs one operation through the pipeline.
    ///
    /// Attaches the correlation header and the JSON body, then drives the
    /// retry loop. Each attempt acquires fresh auth headers, respects the
    /// attempt timeout, and races the transport against the cancellation
    /// token.
    pub async fn execute<I: serde::ser::Serialize, O: DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        if let Some(id) = options.client_request_id() {
            builder = builder.header(
                CLIENT_REQUEST_ID,
                reqwest::header::HeaderValue::from_str(id).map_err(Error::ser)?,
            );
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let idempotent = options.idempotent().unwrap_or(false);
        let cancel = options.cancellation_token().clone().unwrap_or_default();
        let retry_policy = options
            .retry_policy
            .clone()
            .unwrap_or_else(|| self.retry_policy.clone());
        let backoff_policy = options
            .backoff_policy
            .clone()
            .unwrap_or_else(|| self.backoff_policy.clone());
        let this = self.clone();
        let inner = async move |remaining_time| {
            let builder = builder
                .try_clone()
                .expect("client libraries only create builders where `try_clone()` succeeds");
            this.request_attempt(builder, &options, remaining_time).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        crate::retry_loop::retry_loop(
            inner,
            sleep,
            idempotent,
            cancel,
            retry_policy,
            backoff_policy,
        )
        .await
    }

    async fn request_attempt<O: DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &RequestOptions,
        remaining_time: Option<std::time::Duration>,
    ) -> Result<Response<O>> {
        builder = crate::retry_loop::effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let auth_headers = self
            .credentials
            .headers()
            .await
            .map_err(Error::authentication)?;
        for (key, value) in auth_headers {
            builder = builder.header(key, value);
        }
        let send = builder.send();
        let response = match options.cancellation_token() {
            Some(cancel) => {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        return Err(Error::cancelled("the caller requested cancellation"));
                    }
                    response = send => response,
                }
            }
            None => send.await,
        };
        let response = response.map_err(Self::map_send_error)?;
        let status = response.status().as_u16();
        let ok = match options.success_codes() {
            Some(codes) => codes.contains(&status),
            None => response.status().is_success(),
        };
        if !ok {
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

/// The request body of operations that send nothing.
#[derive(serde::Serialize)]
pub struct NoBody;

/// Converts a failure response into the error for the caller.
///
/// The body is fully collected on every path, releasing the connection. If
/// the body parses as the standard error envelope the caller gets a service
/// error with a structured code; otherwise a raw transport error retaining
/// the payload for diagnostics.
pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match ErrorDetail::try_from(&body) {
        Ok(detail) => {
            Error::service_with_http_metadata(detail, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    // 204 No Content has no body and would throw an EOF error if parsed.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?;

    let body = match body.to_bytes() {
        content if (content.is_empty() && no_content_status) => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new().set_headers(parts.headers),
        body,
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use http::{HeaderMap, HeaderValue};
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[tokio::test]
    async fn http_error_with_raw_body() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"reason": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        assert!(response.status().is_client_error());
        let response = super::to_http_error::<()>(response).await;
        let err = response.unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert!(err.service_error().is_none(), "{err:?}");
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"reason": "bad request"}"#)).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn http_error_with_envelope() -> TestResult {
        let body = serde_json::json!({"error": {
            "code": "NotFound",
            "message": "the thing is not there",
            "target": "policyId",
        }});
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let response = super::to_http_error::<()>(response).await;
        let err = response.unwrap_err();
        let want = ErrorDetail::default()
            .set_code("NotFound")
            .set_message("the thing is not there")
            .set_target("policyId");
        assert_eq!(err.service_error(), Some(&want));
        assert_eq!(err.http_status_code(), Some(404_u16));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "{}"; "204 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    async fn empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = response_from(code, content)?;
        assert!(response.status().is_success());

        let response = super::to_http_response::<crate::Empty>(response).await?;
        assert_eq!(response.into_body(), crate::Empty::default());
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, ""; "200 with empty content")]
    async fn empty_content_when_body_expected(
        code: reqwest::StatusCode,
        content: &str,
    ) -> TestResult {
        let response = response_from(code, content)?;
        assert!(response.status().is_success());

        let response = super::to_http_response::<crate::Empty>(response).await;
        let err = response.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn decode_failure_is_a_protocol_violation() -> TestResult {
        #[derive(Debug, Default, serde::Deserialize)]
        struct Output {
            #[allow(dead_code)]
            count: i64,
        }
        let response = response_from(reqwest::StatusCode::OK, r#"{"count": "not-a-number"}"#)?;
        let response = super::to_http_response::<Output>(response).await;
        let err = response.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    fn response_from(code: reqwest::StatusCode, content: &str) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;
        Ok(http_resp.into())
    }
}
