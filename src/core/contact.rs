use crate::core::template;
use crate::core::{ConfigProvider, EmailSender};
use crate::domain::model::{ContactPayload, ContactReply, EmailParams, Submission};
use crate::utils::error::{ContactError, Result};

pub const MAX_BODY_CHARS: usize = 4000;

/// Turns one form post into at most one outbound email.
pub struct ContactHandler<S: EmailSender, C: ConfigProvider> {
    sender: S,
    config: C,
}

impl<S: EmailSender, C: ConfigProvider> ContactHandler<S, C> {
    pub fn new(sender: S, config: C) -> Self {
        Self { sender, config }
    }

    /// Runs the submission and maps the outcome to what the form receives.
    /// Server-side failures are logged here and never reach the caller verbatim.
    pub async fn handle(&self, method: &str, payload: ContactPayload) -> ContactReply {
        match self.process(method, payload).await {
            Ok(Submission::Delivered(receipt)) => {
                tracing::info!("✅ Contact email sent (id: {})", receipt.id);
                ContactReply::accepted()
            }
            Ok(Submission::Absorbed) => ContactReply::accepted(),
            Err(e) => {
                if e.status_code() >= 500 {
                    tracing::error!(
                        "❌ Contact submission failed: {} (Category: {:?})",
                        e,
                        e.category()
                    );
                } else {
                    tracing::info!("Contact submission rejected: {}", e);
                }
                ContactReply::rejected(e.status_code(), e.user_friendly_message())
            }
        }
    }

    pub async fn process(&self, method: &str, payload: ContactPayload) -> Result<Submission> {
        if method != "POST" {
            return Err(ContactError::MethodNotAllowed {
                method: method.to_string(),
            });
        }

        let submission = payload.into_submission();

        // 反垃圾: 靜默接受
        if submission.is_spam() {
            tracing::warn!("Honeypot field filled, dropping submission silently");
            return Ok(Submission::Absorbed);
        }

        if !submission.has_required_fields() {
            return Err(ContactError::MissingFields);
        }

        let text = template::plain_text_body(&submission);
        let length = text.chars().count();
        if length > MAX_BODY_CHARS {
            return Err(ContactError::MessageTooLong {
                length,
                max: MAX_BODY_CHARS,
            });
        }

        let params = EmailParams {
            from: self.config.from_address().to_string(),
            to: vec![self.config.to_address().to_string()],
            reply_to: submission.email().map(str::to_string),
            subject: template::subject_line(&submission),
            html: template::html_body(&submission),
            text: Some(text).filter(|t| !t.is_empty()),
        };

        tracing::debug!(
            "Sending contact email to {} (subject: {})",
            self.config.to_address(),
            params.subject
        );
        let receipt = self.sender.send(&params).await?;

        Ok(Submission::Delivered(receipt))
    }
}
