use crate::classify::ClassifiedError;

/// A completed HTTP exchange as handed over by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body. Expected to be UTF-8 JSON but may be anything, including empty.
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A low-level network failure, identified by an error domain and a numeric code.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct TransportFailure {
    /// Error domain the code belongs to (e.g. `"NSURLErrorDomain"`).
    pub domain: String,
    /// Domain-specific numeric code.
    pub code: i64,
}

/// A failure raised by the HTTP client library rather than by the socket layer.
///
/// When the request reached the server, `response` holds what came back.
/// Otherwise `underlying` may carry the failure that stopped the request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrapperFailure {
    pub response: Option<HttpResponse>,
    pub underlying: Option<Box<Failure>>,
}

impl WrapperFailure {
    pub fn with_response(response: HttpResponse) -> Self {
        Self {
            response: Some(response),
            underlying: None,
        }
    }

    pub fn with_underlying(underlying: Failure) -> Self {
        Self {
            response: None,
            underlying: Some(Box::new(underlying)),
        }
    }
}

/// Every failure family the classifier knows how to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Already normalized; passed through unchanged.
    Classified(ClassifiedError),
    Wrapper(WrapperFailure),
    Transport(TransportFailure),
    /// Anything else. The description is kept for logging only.
    Unrecognized(String),
}

impl From<ClassifiedError> for Failure {
    fn from(error: ClassifiedError) -> Self {
        Self::Classified(error)
    }
}

impl From<WrapperFailure> for Failure {
    fn from(failure: WrapperFailure) -> Self {
        Self::Wrapper(failure)
    }
}

impl From<TransportFailure> for Failure {
    fn from(failure: TransportFailure) -> Self {
        Self::Transport(failure)
    }
}

impl From<HttpResponse> for Failure {
    fn from(response: HttpResponse) -> Self {
        Self::Wrapper(WrapperFailure::with_response(response))
    }
}
