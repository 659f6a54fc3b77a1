//! Errors raised while capturing and delivering a lead.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    #[error("`{0}` is not a valid e-mail address")]
    InvalidEmail(String),

    #[error("bot verification client is not loaded yet")]
    VerifierNotReady,

    #[error("bot verification failed: {0}")]
    Verification(String),

    #[error("delivery rejected with HTTP {status}: {body}")]
    Delivery { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("payload encoding failed: {0}")]
    Encode(String),
}

impl LeadError {
    /// Errors the user can fix in the form itself.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::InvalidEmail(_))
    }
}

impl From<JsValue> for LeadError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Transport(text)
    }
}

impl From<serde_json::Error> for LeadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_error_mentions_status() {
        let err = LeadError::Delivery {
            status: 412,
            body: "reCAPTCHA: The g-recaptcha-response parameter not found".into(),
        };
        assert!(err.to_string().starts_with("delivery rejected with HTTP 412"));
    }

    #[test]
    fn only_field_errors_are_input_errors() {
        assert!(LeadError::MissingField("user_name").is_input_error());
        assert!(LeadError::InvalidEmail("nope".into()).is_input_error());
        assert!(!LeadError::VerifierNotReady.is_input_error());
        assert!(!LeadError::Transport("offline".into()).is_input_error());
    }
}
