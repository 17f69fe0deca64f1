// Adapters layer: concrete implementations for external systems (email provider, hosting surfaces).

pub mod http;
pub mod resend;

#[cfg(feature = "lambda")]
pub mod lambda;
