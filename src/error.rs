use crate::codec::ArgType;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("decode error: {reason}")]
    Decode { reason: String },

    #[error("type mismatch: declared {declared}, value is {found}")]
    TypeMismatch { declared: ArgType, found: ArgType },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }
}
