#![allow(dead_code)]

use async_trait::async_trait;
use contact_mailer::{ConfigProvider, ContactError, DeliveryReceipt, EmailParams, EmailSender, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const TO_ADDRESS: &str = "buzon@example.es";
pub const FROM_ADDRESS: &str = "onboarding@resend.dev";

/// Records every send instead of talking to a provider.
#[derive(Clone, Default)]
pub struct RecordingSender {
    sent: Arc<Mutex<Vec<EmailParams>>>,
    fail: bool,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn sent(&self) -> Vec<EmailParams> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, params: &EmailParams) -> Result<DeliveryReceipt> {
        self.sent.lock().await.push(params.clone());
        if self.fail {
            return Err(ContactError::ProviderError {
                status: 503,
                body: "service unavailable".to_string(),
            });
        }
        Ok(DeliveryReceipt {
            id: "test-message-id".to_string(),
        })
    }
}

#[derive(Clone)]
pub struct TestConfig {
    pub api_endpoint: String,
}

impl TestConfig {
    pub fn new() -> Self {
        Self::with_endpoint("http://127.0.0.1:1/emails")
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            api_endpoint: endpoint.into(),
        }
    }
}

impl ConfigProvider for TestConfig {
    fn api_key(&self) -> &str {
        "re_test_key"
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn from_address(&self) -> &str {
        FROM_ADDRESS
    }

    fn to_address(&self) -> &str {
        TO_ADDRESS
    }
}
