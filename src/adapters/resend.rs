use crate::core::{ConfigProvider, EmailParams, EmailSender};
use crate::domain::model::DeliveryReceipt;
use crate::utils::error::{ContactError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.resend.com/emails";

/// Resend transactional email API client.
#[derive(Debug, Clone)]
pub struct ResendClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl ResendClient {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_key(), config.api_endpoint())
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, params: &EmailParams) -> Result<DeliveryReceipt> {
        tracing::debug!("Making Resend API request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(params)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Resend API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContactError::ProviderError {
                status: status.as_u16(),
                body,
            });
        }

        let receipt: DeliveryReceipt = response.json().await?;
        Ok(receipt)
    }
}
