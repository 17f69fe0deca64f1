pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::ServerConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::{http::router, resend::ResendClient};
pub use core::contact::ContactHandler;
pub use domain::model::{ContactPayload, ContactReply, DeliveryReceipt, EmailParams, Submission};
pub use domain::ports::{ConfigProvider, EmailSender};
pub use utils::error::{ContactError, Result};
