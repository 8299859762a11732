use draft::OptionStep;
use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {}: {}", message, source)]
    Network {
        message: String,
        source: reqwest::Error,
    },

    #[error("request failed with status {}: {}", status, describe(.body))]
    RequestFailed {
        status: StatusCode,
        body: Option<Value>,
    },

    #[error("failed to parse response: {}: {}", message, source)]
    Parse {
        message: String,
        source: serde_json::Error,
    },

    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(
        "{} of {} poll option writes failed{}",
        .failures.len(),
        .attempted,
        rollback_note(.rolled_back)
    )]
    OptionSync {
        attempted: usize,
        failures: Vec<OptionSyncFailure>,
        rolled_back: bool,
    },

    #[error("{kind} has not been saved yet")]
    Unsaved { kind: &'static str },

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

#[derive(Debug)]
pub struct OptionSyncFailure {
    pub step: OptionStep,
    pub error: ClientError,
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn rollback_note(rolled_back: &bool) -> &'static str {
    if *rolled_back {
        ", poll was rolled back"
    } else {
        ""
    }
}

fn describe(body: &Option<Value>) -> String {
    body.as_ref()
        .map(Value::to_string)
        .unwrap_or_else(|| "<empty body>".to_string())
}

pub type Response<T> = Result<T, ClientError>;

/// Attaches a message while converting foreign errors into [`ClientError`].
pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, reqwest::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| ClientError::Network {
            message: message.to_string(),
            source: e,
        })
    }
}

impl<T> IntoResponse<T> for Result<T, serde_json::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| ClientError::Parse {
            message: message.to_string(),
            source: e,
        })
    }
}

impl<T> IntoResponse<T> for Result<T, url::ParseError> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| ClientError::Config {
            message: format!("{}: {}", message, e),
        })
    }
}

impl<T> IntoResponse<T> for Option<T> {
    fn into_response(self, message: &str) -> Response<T> {
        self.ok_or_else(|| ClientError::Config {
            message: message.to_string(),
        })
    }
}
