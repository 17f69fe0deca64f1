pub mod contact;
pub mod template;

pub use crate::domain::model::{ContactPayload, ContactReply, ContactSubmission, EmailParams};
pub use crate::domain::ports::{ConfigProvider, EmailSender};
pub use crate::utils::error::Result;
