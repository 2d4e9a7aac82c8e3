//! HTTP client for communicating with the recharge backend
//!
//! Every reply is decoded into an explicit type here, so the controllers
//! never look at raw JSON.

use super::error::BackendError;
use super::traits::BackendApi;
use super::types::{
    ApiReply, CheckMobileReply, CreateProfileReply, CreateProfileRequest, LoginReply,
    LoginRequest,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Error body the backend sends alongside 4xx/5xx statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for communicating with the recharge backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client. No timeout is applied unless one is given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode the body as `T` regardless of the HTTP status
async fn decode_any_status<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiReply<T>, BackendError> {
    let http_status = response.status().as_u16();
    let text = response.text().await?;
    let body = serde_json::from_str(&text)?;
    Ok(ApiReply::new(http_status, body))
}

/// Decode the body as `T`, turning non-2xx statuses into `BackendError::Status`
async fn decode_success<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.error)
            .unwrap_or(text);
        return Err(BackendError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&text)?)
}

#[async_trait]
impl BackendApi for BackendClient {
    async fn login(&self, request: &LoginRequest) -> Result<ApiReply<LoginReply>, BackendError> {
        tracing::debug!(username = %request.username, "POST /login");

        let response = self
            .http
            .post(self.url("/login"))
            .json(request)
            .send()
            .await?;

        let reply = decode_any_status(response).await?;
        tracing::debug!(status = reply.http_status, "login reply");
        Ok(reply)
    }

    async fn check_mobile(&self, mobile: &str) -> Result<CheckMobileReply, BackendError> {
        tracing::debug!(%mobile, "GET /check-mobile");

        let response = self
            .http
            .get(self.url("/check-mobile"))
            .query(&[("mobile", mobile)])
            .send()
            .await?;

        decode_success(response).await
    }

    async fn create_profile(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<ApiReply<CreateProfileReply>, BackendError> {
        tracing::debug!(mobile = %request.mobile, "POST /create-profile");

        let response = self
            .http
            .post(self.url("/create-profile"))
            .json(request)
            .send()
            .await?;

        let reply = decode_any_status(response).await?;
        tracing::debug!(status = reply.http_status, "create-profile reply");
        Ok(reply)
    }
}
