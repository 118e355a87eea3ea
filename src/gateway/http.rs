use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::gateway::Gateway;

/// Networked gateway issuing JSON requests against the backend API.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("wellspring/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

impl Gateway for HttpGateway {
    async fn load<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self.client.get(self.url(endpoint)).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} failed: HTTP {}", endpoint, status);
            return Err(AppError::Api {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    async fn create<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("POST {} failed: HTTP {}", endpoint, status);
            return Err(AppError::Api {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
