use super::{DEFAULT_API_ENDPOINT, DEFAULT_FROM_ADDRESS, DEFAULT_TO_ADDRESS};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_email_address, validate_non_empty_string, validate_url, Validate,
};
use clap::Parser;

#[derive(Clone, Parser)]
#[command(name = "contact-mailer")]
#[command(about = "Relays contact-form submissions to an inbox through Resend")]
pub struct ServerConfig {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    #[arg(long, env = "RESEND_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "RESEND_API_ENDPOINT", default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, env = "CONTACT_FROM_ADDRESS", default_value = DEFAULT_FROM_ADDRESS)]
    pub from_address: String,

    #[arg(long, env = "CONTACT_TO_ADDRESS", default_value = DEFAULT_TO_ADDRESS)]
    pub to_address: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

// The API key never reaches the logs.
impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"***")
            .field("api_endpoint", &self.api_endpoint)
            .field("from_address", &self.from_address)
            .field("to_address", &self.to_address)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl ConfigProvider for ServerConfig {
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

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_email_address("from_address", &self.from_address)?;
        validate_email_address("to_address", &self.to_address)?;

        tracing::info!("✅ Server configuration validation passed");
        Ok(())
    }
}
