//! HTTP client bound to a running [`crate::TestHost`].

use std::time::Duration;

use reqwest::{StatusCode, header, redirect};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::HarnessError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options for [`crate::TestHost::create_client`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    /// Follow 3xx responses. When false the redirect itself is returned.
    pub allow_auto_redirect: bool,
    /// Per-request timeout; expiry surfaces as [`HarnessError::Transport`].
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            allow_auto_redirect: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientOptions {
    /// Options with redirects disabled.
    pub fn no_redirects() -> Self {
        Self {
            allow_auto_redirect: false,
            ..Self::default()
        }
    }
}

/// Client issuing requests against one host's base URL.
#[derive(Debug, Clone)]
pub struct TestClient {
    http: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub(crate) fn new(base_url: String, options: ClientOptions) -> Result<Self, HarnessError> {
        let policy = if options.allow_auto_redirect {
            redirect::Policy::default()
        } else {
            redirect::Policy::none()
        };

        let http = reqwest::Client::builder()
            .redirect(policy)
            .timeout(options.timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Absolute URL for a path such as `/api/colaborator`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// The host's base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET path`.
    pub async fn get(&self, path: &str) -> Result<TestResponse, HarnessError> {
        self.send(self.http.get(self.url(path))).await
    }

    /// `POST path` with a JSON body.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<TestResponse, HarnessError> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    /// `PUT path` with a JSON body.
    pub async fn put_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<TestResponse, HarnessError> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    /// `POST path` with a raw body and content type.
    pub async fn post_raw(
        &self,
        path: &str,
        content_type: &str,
        body: impl Into<String>,
    ) -> Result<TestResponse, HarnessError> {
        let request = self
            .http
            .post(self.url(path))
            .header(header::CONTENT_TYPE, content_type)
            .body(body.into());
        self.send(request).await
    }

    /// `DELETE path`.
    pub async fn delete(&self, path: &str) -> Result<TestResponse, HarnessError> {
        self.send(self.http.delete(self.url(path))).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<TestResponse, HarnessError> {
        let response = request.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        tracing::debug!(%status, content_type = ?content_type, bytes = body.len(), "Response received");

        Ok(TestResponse {
            status,
            content_type,
            body,
        })
    }
}

/// A fully read response.
#[derive(Debug, Clone)]
pub struct TestResponse {
    pub status: StatusCode,
    /// The raw `Content-Type` header, parameters included.
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Fail with [`HarnessError::HttpProtocol`] unless the status is 2xx.
    pub fn expect_success(self) -> Result<Self, HarnessError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(self.into_protocol_error())
        }
    }

    /// Fail with [`HarnessError::HttpProtocol`] unless the status matches.
    pub fn expect_status(self, expected: StatusCode) -> Result<Self, HarnessError> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(self.into_protocol_error())
        }
    }

    /// Decode the body as `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HarnessError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the body as a JSON array.
    ///
    /// Any other JSON value is reported as [`HarnessError::HttpProtocol`].
    pub fn json_array(&self) -> Result<Vec<Value>, HarnessError> {
        match self.json::<Value>()? {
            Value::Array(items) => Ok(items),
            _ => Err(self.clone().into_protocol_error()),
        }
    }

    fn into_protocol_error(self) -> HarnessError {
        HarnessError::HttpProtocol {
            status: self.status,
            content_type: self.content_type,
            body: self.body,
        }
    }
}
