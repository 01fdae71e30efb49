pub mod response;
pub mod transport;

use serde::{Deserialize, Serialize};

use crate::types::{Failure, WrapperFailure};

/// Node error code reported when a dApp or account script rejects a call.
pub const SCRIPT_ERROR_CODE: i64 = 307;
/// Node error code reported when an asset script rejects a transaction.
///
/// Reserved: nothing in the cascade matches on it yet. A body carrying it is
/// classified by its message or its status like any other body.
pub const ASSET_SCRIPT_ERROR_CODE: i64 = 308;
pub const NOT_FOUND_STATUS: u16 = 404;

/// The closed set of outcomes application code branches on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ClassifiedError {
    #[error("unclassified failure")]
    None,
    #[error("{0}")]
    Message(String),
    #[error("not found")]
    NotFound,
    #[error("internet connection is not working")]
    InternetNotWorking,
    #[error("server error")]
    ServerError,
    #[error("script error")]
    ScriptError,
}

impl ClassifiedError {
    pub fn is_internet_not_working(&self) -> bool {
        matches!(self, Self::InternetNotWorking)
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ServerError)
    }
}

pub struct ErrorClassifier;

impl ErrorClassifier {
    /// Fold any failure into a [`ClassifiedError`].
    ///
    /// Total and deterministic; the first matching rule wins:
    /// 1. already classified: returned unchanged
    /// 2. wrapper with a response: status + body rules
    /// 3. wrapper without a response: the underlying failure, else `NotFound`
    /// 4. transport failure: fixed code table
    /// 5. anything else: `None`
    pub fn classify(failure: &Failure) -> ClassifiedError {
        match failure {
            Failure::Classified(error) => error.clone(),
            Failure::Wrapper(wrapper) => Self::classify_wrapper(wrapper),
            Failure::Transport(raw) => transport::classify_transport(raw),
            Failure::Unrecognized(description) => {
                tracing::debug!(%description, "unrecognised failure type");
                ClassifiedError::None
            }
        }
    }

    fn classify_wrapper(wrapper: &WrapperFailure) -> ClassifiedError {
        if let Some(response) = &wrapper.response {
            return response::classify_response(response);
        }
        match &wrapper.underlying {
            Some(underlying) => Self::classify(underlying),
            None => ClassifiedError::NotFound,
        }
    }
}

/// Shorthand for [`ErrorClassifier::classify`].
pub fn classify(failure: &Failure) -> ClassifiedError {
    ErrorClassifier::classify(failure)
}
