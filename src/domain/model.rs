use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One contact-form submission. Every field is optional; a field only counts
/// as present when it holds a non-empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub honeypot: Option<String>,
}

impl ContactSubmission {
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    pub fn subject(&self) -> Option<&str> {
        present(&self.subject)
    }

    pub fn message(&self) -> Option<&str> {
        present(&self.message)
    }

    pub fn date(&self) -> Option<&str> {
        present(&self.date)
    }

    pub fn time(&self) -> Option<&str> {
        present(&self.time)
    }

    pub fn service(&self) -> Option<&str> {
        present(&self.service)
    }

    /// Bots fill the hidden honeypot input; humans never see it.
    pub fn is_spam(&self) -> bool {
        present(&self.honeypot).is_some()
    }

    pub fn has_required_fields(&self) -> bool {
        self.name().is_some() || self.message().is_some()
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Form posts are loosely typed: numbers and booleans are coerced to text,
/// `null` and `false` count as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(text)) => Some(text),
        Some(Value::Bool(true)) => Some("true".to_string()),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Request body as it arrives from the hosting surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactPayload {
    Empty,
    /// JSON-encoded text, not yet parsed.
    Text(String),
    /// Already parsed by the host or an embedding caller.
    Structured(Value),
}

impl ContactPayload {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return ContactPayload::Empty;
        }
        Self::from_text(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            ContactPayload::Empty
        } else {
            ContactPayload::Text(text)
        }
    }

    /// Never fails: unparseable or non-object bodies become an empty
    /// submission, which the handler then rejects as missing data.
    pub fn into_submission(self) -> ContactSubmission {
        match self {
            ContactPayload::Empty => ContactSubmission::default(),
            ContactPayload::Text(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(value) => ContactPayload::Structured(value).into_submission(),
                Err(e) => {
                    tracing::debug!("Request body is not valid JSON: {}", e);
                    ContactSubmission::default()
                }
            },
            ContactPayload::Structured(value @ Value::Object(_)) => {
                serde_json::from_value(value).unwrap_or_else(|e| {
                    tracing::debug!("Request body has an unexpected shape: {}", e);
                    ContactSubmission::default()
                })
            }
            ContactPayload::Structured(other) => {
                tracing::debug!("Ignoring non-object request body: {}", other);
                ContactSubmission::default()
            }
        }
    }
}

/// Parameters handed to the email provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailParams {
    pub from: String,
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub id: String,
}

/// What happened to an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Delivered(DeliveryReceipt),
    /// Honeypot hit: reported as success, nothing sent.
    Absorbed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReplyBody {
    Accepted { ok: bool },
    Rejected { error: String },
}

/// Status code and JSON body returned to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl ContactReply {
    pub fn accepted() -> Self {
        Self {
            status: 200,
            body: ReplyBody::Accepted { ok: true },
        }
    }

    pub fn rejected(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ReplyBody::Rejected {
                error: error.into(),
            },
        }
    }

    /// Same serialization axum's `Json` applies, for hosts that need the raw text.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}
