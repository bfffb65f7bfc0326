/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! HTTP plumbing shared by the session manager and the endpoint façade
//!
//! The crate only talks to the network through the [`Transport`] trait. The
//! production implementation is [`ReqwestTransport`]; tests plug in their own.
//! Every call goes through an [`AuthorizedRequest`], which is rebuilt per call
//! from the immutable auth header and timeout captured at login.

use crate::constants::USER_AGENT;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// A fully described HTTP request handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute URL without query string
    pub url: String,
    /// Extra request headers
    pub headers: Vec<(String, String)>,
    /// Query parameters
    pub params: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<Value>,
    /// Per-request timeout
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Returns the value of a request header, matched case-insensitively
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the value of a query parameter
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response returned by a [`Transport`]
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Builds a response with a JSON body and no headers
    #[must_use]
    pub fn json_body(status: StatusCode, body: &Value) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.to_string().into_bytes(),
        }
    }

    /// Returns the value of a response header if it is present and valid UTF-8
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body decoded as (lossy) UTF-8
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserializes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Turns non-2xx responses into errors
    ///
    /// # Returns
    /// * `Ok(HttpResponse)` - The response itself when the status is 2xx
    /// * `Err(AppError::Unauthorized)` - On 401
    /// * `Err(AppError::NotFound)` - On 404
    /// * `Err(AppError::Unexpected)` - On any other status
    pub fn error_for_status(self) -> Result<Self, AppError> {
        let status = self.status;
        if status.is_success() {
            return Ok(self);
        }
        let body = self.text();
        error!("Request failed with status {}: {}", status, body);
        match status {
            StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized),
            StatusCode::NOT_FOUND => Err(AppError::NotFound(body)),
            _ => Err(AppError::Unexpected(status)),
        }
    }
}

/// The only network boundary of the crate
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request and returns the raw response
    ///
    /// Implementations report connection failures and timeouts as errors and
    /// return every received response, whatever its status.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError>;
}

/// [`Transport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the crate's user agent
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest` client
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
        let mut builder = self.client.request(request.method, &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Request capability bound to a fixed set of headers and a timeout
///
/// Built fresh for every call, it never mutates what it was built from.
pub struct AuthorizedRequest<'a, T: Transport + ?Sized> {
    transport: &'a T,
    headers: Vec<(String, String)>,
    timeout: Duration,
}

impl<'a, T: Transport + ?Sized> AuthorizedRequest<'a, T> {
    /// Binds `headers` and `timeout` to `transport`
    pub fn new(transport: &'a T, headers: Vec<(String, String)>, timeout: Duration) -> Self {
        Self {
            transport,
            headers,
            timeout,
        }
    }

    /// Request capability without any authentication header
    pub fn anonymous(transport: &'a T, timeout: Duration) -> Self {
        Self::new(transport, Vec::new(), timeout)
    }

    /// Headers attached to every request
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Sends a request and returns the raw response without checking its status
    ///
    /// # Arguments
    /// * `method` - HTTP verb
    /// * `url` - Absolute URL
    /// * `params` - Query parameters
    /// * `body` - Optional JSON body
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        params: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<HttpResponse, AppError> {
        debug!("{} {}", method, url);

        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers: self.headers.clone(),
            params: params
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
            body,
            timeout: Some(self.timeout),
        };

        let response = self.transport.send(request).await?;
        debug!("Response status: {}", response.status);
        Ok(response)
    }

    async fn request_json<R: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        params: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<R, AppError> {
        self.request(method, url, params, body)
            .await?
            .error_for_status()?
            .json()
    }

    /// GET returning a deserialized body
    pub async fn get<R: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<R, AppError> {
        self.request_json(Method::GET, url, params, None).await
    }

    /// POST with a JSON body returning a deserialized body
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<R, AppError> {
        let body = serde_json::to_value(body)?;
        self.request_json(Method::POST, url, &[], Some(body)).await
    }

    /// PUT with a JSON body returning a deserialized body
    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<R, AppError> {
        let body = serde_json::to_value(body)?;
        self.request_json(Method::PUT, url, &[], Some(body)).await
    }

    /// PATCH with a JSON body returning a deserialized body
    pub async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<R, AppError> {
        let body = serde_json::to_value(body)?;
        self.request_json(Method::PATCH, url, &[], Some(body)).await
    }

    /// DELETE returning a deserialized body
    pub async fn delete<R: DeserializeOwned>(&self, url: &str) -> Result<R, AppError> {
        self.request_json(Method::DELETE, url, &[], None).await
    }

    /// HEAD, returning the checked raw response
    pub async fn head(&self, url: &str) -> Result<HttpResponse, AppError> {
        self.request(Method::HEAD, url, &[], None)
            .await?
            .error_for_status()
    }

    /// OPTIONS, returning the checked raw response
    pub async fn options(&self, url: &str) -> Result<HttpResponse, AppError> {
        self.request(Method::OPTIONS, url, &[], None)
            .await?
            .error_for_status()
    }
}
