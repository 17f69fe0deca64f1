#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;

pub use crate::adapters::resend::DEFAULT_API_ENDPOINT;

pub const DEFAULT_FROM_ADDRESS: &str = "onboarding@resend.dev";
pub const DEFAULT_TO_ADDRESS: &str = "franjimenezdiaz98@gmail.com";

#[cfg(feature = "cli")]
pub use cli::ServerConfig;
