use super::{DEFAULT_API_ENDPOINT, DEFAULT_FROM_ADDRESS, DEFAULT_TO_ADDRESS};
use crate::core::ConfigProvider;
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{
    validate_email_address, validate_non_empty_string, validate_url, Validate,
};
use std::env;

#[derive(Clone)]
pub struct LambdaConfig {
    pub api_key: String,
    pub api_endpoint: String,
    pub from_address: String,
    pub to_address: String,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: env::var("RESEND_API_KEY").map_err(|_| ContactError::MissingConfigError {
                field: "RESEND_API_KEY".to_string(),
            })?,
            api_endpoint: env::var("RESEND_API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string()),
            from_address: env::var("CONTACT_FROM_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            to_address: env::var("CONTACT_TO_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_TO_ADDRESS.to_string()),
        })
    }
}

impl std::fmt::Debug for LambdaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LambdaConfig")
            .field("api_key", &"***")
            .field("api_endpoint", &self.api_endpoint)
            .field("from_address", &self.from_address)
            .field("to_address", &self.to_address)
            .finish()
    }
}

impl ConfigProvider for LambdaConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn from_address(&self) -> &str {
        &self.from_address
    }

    fn to_address(&self) -> &str {
        &self.to_address
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        // 驗證API金鑰與端點
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_url("api_endpoint", &self.api_endpoint)?;

        // 驗證寄件與收件地址
        validate_email_address("from_address", &self.from_address)?;
        validate_email_address("to_address", &self.to_address)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
