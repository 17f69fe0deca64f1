use thiserror::Error;

pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const MSG_MISSING_FIELDS: &str = "Faltan datos para procesar la solicitud";
pub const MSG_MESSAGE_TOO_LONG: &str = "Mensaje demasiado largo";
pub const MSG_DELIVERY_FAILED: &str = "No se pudo enviar el correo";

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Method not allowed: {method}")]
    MethodNotAllowed { method: String },

    #[error("Submission has neither a name nor a message")]
    MissingFields,

    #[error("Message too long: {length} characters (max {max})")]
    MessageTooLong { length: usize, max: usize },

    #[error("Email API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Email provider rejected the message with status {status}: {body}")]
    ProviderError { status: u16, body: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller sent something we refuse to process.
    Request,
    /// The email provider could not be reached or refused the message.
    Delivery,
    Configuration,
}

impl ContactError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContactError::MethodNotAllowed { .. }
            | ContactError::MissingFields
            | ContactError::MessageTooLong { .. } => ErrorCategory::Request,
            ContactError::ApiError(_) | ContactError::ProviderError { .. } => {
                ErrorCategory::Delivery
            }
            ContactError::MissingConfigError { .. }
            | ContactError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ContactError::MethodNotAllowed { .. } => 405,
            ContactError::MissingFields | ContactError::MessageTooLong { .. } => 400,
            _ => 500,
        }
    }

    /// Message safe to hand back to the caller. Server-side failures collapse
    /// to a single generic text so no provider detail leaks out.
    pub fn user_friendly_message(&self) -> &'static str {
        match self {
            ContactError::MethodNotAllowed { .. } => MSG_METHOD_NOT_ALLOWED,
            ContactError::MissingFields => MSG_MISSING_FIELDS,
            ContactError::MessageTooLong { .. } => MSG_MESSAGE_TOO_LONG,
            _ => MSG_DELIVERY_FAILED,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Request => "Fix the submitted form data and try again",
            ErrorCategory::Delivery => "Check the Resend API key, sender domain and provider status",
            ErrorCategory::Configuration => {
                "Check RESEND_API_KEY, RESEND_API_ENDPOINT and the contact addresses"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
