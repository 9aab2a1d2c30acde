//! REST client for the SLA configuration endpoints
//!
//! Implements [`SlaBackend`] over HTTP so a policy editor can run against a
//! remote server. Reads and idempotent writes go through the retrying
//! [`HttpClient`]; holiday creation is sent once.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use servdesk_core::SlaBackend;
use servdesk_domain::{ClientConfig, Holiday, NewHoliday, Result as DomainResult, SlaPolicy};
use tracing::{debug, info, instrument};

use super::errors::ApiError;
use crate::http::HttpClient;

const CONFIGURATION_PATH: &str = "/api/sla/configuration";
const HOLIDAYS_PATH: &str = "/api/sla/holidays";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Server root, e.g. `http://127.0.0.1:8080`
    pub base_url: String,
    pub timeout: Duration,
    /// Total attempts for retryable calls
    pub max_attempts: usize,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl From<&ClientConfig> for ApiClientConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
            max_attempts: config.max_attempts as usize,
        }
    }
}

/// HTTP client for the SLA REST contract.
pub struct SlaApiClient {
    http: HttpClient,
    config: ApiClientConfig,
}

impl SlaApiClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .max_attempts(config.max_attempts)
            .user_agent(concat!("servdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;
        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// `/api/sla/holidays/{id}` with `id` encoded as a single path segment.
    fn holiday_url(&self, id: &str) -> Result<String, ApiError> {
        let mut url = Url::parse(&self.url(HOLIDAYS_PATH))
            .map_err(|e| ApiError::Config(format!("invalid base URL {}: {}", self.config.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Config(format!("base URL cannot hold a path: {}", self.config.base_url)))?
            .push(id);
        Ok(url.into())
    }

    /// `GET /health`
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<bool, ApiError> {
        let url = self.url("/health");
        let response = self.http.send(self.http.request(Method::GET, &url)).await?;
        let healthy = response.status().is_success();
        debug!(status = %response.status(), healthy, "health check");
        Ok(healthy)
    }

    #[instrument(skip(self))]
    pub async fn get_configuration(&self) -> Result<Value, ApiError> {
        let url = self.url(CONFIGURATION_PATH);
        let builder = self.http.request(Method::GET, &url);
        self.execute(builder, &url, true).await
    }

    #[instrument(skip(self, policy))]
    pub async fn post_configuration(&self, policy: &SlaPolicy) -> Result<SlaPolicy, ApiError> {
        let url = self.url(CONFIGURATION_PATH);
        let builder = self.http.request(Method::POST, &url).json(policy);
        let saved = self.execute(builder, &url, true).await?;
        info!("SLA configuration saved");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn get_holidays(&self) -> Result<Vec<Holiday>, ApiError> {
        let url = self.url(HOLIDAYS_PATH);
        let builder = self.http.request(Method::GET, &url);
        self.execute(builder, &url, true).await
    }

    #[instrument(skip(self, holiday), fields(date = %holiday.date))]
    pub async fn post_holiday(&self, holiday: &NewHoliday) -> Result<Holiday, ApiError> {
        let url = self.url(HOLIDAYS_PATH);
        let builder = self.http.request(Method::POST, &url).json(holiday);
        let created: Holiday = self.execute(builder, &url, false).await?;
        info!(holiday_id = %created.id, "holiday created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn remove_holiday(&self, id: &str) -> Result<(), ApiError> {
        let url = self.holiday_url(id)?;
        let builder = self.http.request(Method::DELETE, &url);
        let _: Option<Value> = self.execute(builder, &url, true).await?;
        info!(holiday_id = %id, "holiday deleted");
        Ok(())
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        url: &str,
        retry: bool,
    ) -> Result<T, ApiError> {
        let builder = builder.header("Accept", "application/json");
        let sent = if retry { self.http.send(builder).await } else { self.http.send_once(builder).await };
        let response = sent?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, url, &body));
        }

        // 204/205 carry no body
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(Value::Null).map_err(|_| {
                ApiError::Client(format!("{} returned {} with no body", url, status.as_u16()))
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Client(format!("Failed to parse response from {}: {}", url, e)))
    }
}

#[async_trait]
impl SlaBackend for SlaApiClient {
    async fn fetch_configuration(&self) -> DomainResult<Value> {
        Ok(self.get_configuration().await?)
    }

    async fn save_configuration(&self, policy: &SlaPolicy) -> DomainResult<SlaPolicy> {
        Ok(self.post_configuration(policy).await?)
    }

    async fn list_holidays(&self) -> DomainResult<Vec<Holiday>> {
        Ok(self.get_holidays().await?)
    }

    async fn create_holiday(&self, holiday: &NewHoliday) -> DomainResult<Holiday> {
        Ok(self.post_holiday(holiday).await?)
    }

    async fn delete_holiday(&self, id: &str) -> DomainResult<()> {
        Ok(self.remove_holiday(id).await?)
    }
}
