use crate::domain::model::{DeliveryReceipt, EmailParams};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound email capability. Implementations send exactly once per call and
/// never retry.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, params: &EmailParams) -> Result<DeliveryReceipt>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn api_endpoint(&self) -> &str;
    fn from_address(&self) -> &str;
    fn to_address(&self) -> &str;
}
