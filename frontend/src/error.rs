//! Error taxonomy shared by the data-access layer and the panels.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// A form was rejected before anything was sent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network failure: {0}")]
    Network(String),

    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body carried `success: false`.
    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    /// Text suitable for the notification banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "An unexpected error occurred. Please try again.".to_string(),
            ApiError::Status { message, .. } | ApiError::Rejected(message) => message.clone(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Validation(err) => err.to_string(),
            ApiError::Aborted => String::new(),
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
            gloo_net::Error::JsError(js) => ApiError::Network(js.message),
            gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
            gloo_net::Error::GlooError(msg) => ApiError::Network(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_surface_the_server_message() {
        let err = ApiError::Status {
            status: 400,
            message: "Email Already registered".to_string(),
        };
        assert_eq!(err.user_message(), "Email Already registered");
    }

    #[test]
    fn network_errors_hide_transport_detail() {
        let err = ApiError::Network("TypeError: Failed to fetch".to_string());
        assert!(!err.user_message().contains("TypeError"));
    }

    #[test]
    fn validation_errors_convert_and_read_naturally() {
        let err: ApiError = ValidationError::MissingField("Amount").into();
        assert_eq!(err.user_message(), "Amount is required");
        assert!(!err.is_aborted());
    }
}
