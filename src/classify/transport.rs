use std::io;

use crate::classify::ClassifiedError;
use crate::types::TransportFailure;

/// Error domain whose codes [`TransportCode`] describes.
pub const URL_ERROR_DOMAIN: &str = "NSURLErrorDomain";

/// Transport failure codes the classifier recognises, with their platform values.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(i64)]
pub enum TransportCode {
    BadUrl = -1000,
    TimedOut = -1001,
    UnsupportedUrl = -1002,
    CannotFindHost = -1003,
    CannotConnectToHost = -1004,
    NetworkConnectionLost = -1005,
    DnsLookupFailed = -1006,
    TooManyRedirects = -1007,
    ResourceUnavailable = -1008,
    NotConnectedToInternet = -1009,
    BadServerResponse = -1011,
}

/// Code used for io errors with no counterpart in the table.
const UNKNOWN_CODE: i64 = -1;

impl TransportCode {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1000 => Some(Self::BadUrl),
            -1001 => Some(Self::TimedOut),
            -1002 => Some(Self::UnsupportedUrl),
            -1003 => Some(Self::CannotFindHost),
            -1004 => Some(Self::CannotConnectToHost),
            -1005 => Some(Self::NetworkConnectionLost),
            -1006 => Some(Self::DnsLookupFailed),
            -1007 => Some(Self::TooManyRedirects),
            -1008 => Some(Self::ResourceUnavailable),
            -1009 => Some(Self::NotConnectedToInternet),
            -1011 => Some(Self::BadServerResponse),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    /// The client can only tell "no connectivity" apart from "server side is broken".
    pub fn classification(self) -> ClassifiedError {
        match self {
            Self::TimedOut | Self::NotConnectedToInternet => ClassifiedError::InternetNotWorking,
            Self::BadUrl
            | Self::UnsupportedUrl
            | Self::CannotFindHost
            | Self::CannotConnectToHost
            | Self::NetworkConnectionLost
            | Self::DnsLookupFailed
            | Self::TooManyRedirects
            | Self::ResourceUnavailable
            | Self::BadServerResponse => ClassifiedError::ServerError,
        }
    }
}

impl TransportFailure {
    pub fn new(domain: impl Into<String>, code: i64) -> Self {
        Self {
            domain: domain.into(),
            code,
        }
    }

    pub fn url(code: TransportCode) -> Self {
        Self::new(URL_ERROR_DOMAIN, code.code())
    }

    /// Translate a socket-level io error into the URL error domain.
    pub fn from_io_error(err: &io::Error) -> Self {
        let code = match err.kind() {
            io::ErrorKind::TimedOut => Some(TransportCode::TimedOut),
            io::ErrorKind::NotConnected
            | io::ErrorKind::NetworkUnreachable
            | io::ErrorKind::HostUnreachable => Some(TransportCode::NotConnectedToInternet),
            io::ErrorKind::ConnectionRefused => Some(TransportCode::CannotConnectToHost),
            io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::UnexpectedEof => Some(TransportCode::NetworkConnectionLost),
            io::ErrorKind::InvalidData => Some(TransportCode::BadServerResponse),
            _ => None,
        };
        Self::new(URL_ERROR_DOMAIN, code.map_or(UNKNOWN_CODE, TransportCode::code))
    }

    /// Recognised code, if this failure belongs to the URL error domain.
    pub fn transport_code(&self) -> Option<TransportCode> {
        if self.domain != URL_ERROR_DOMAIN {
            return None;
        }
        TransportCode::from_code(self.code)
    }
}

pub fn classify_transport(failure: &TransportFailure) -> ClassifiedError {
    match failure.transport_code() {
        Some(code) => code.classification(),
        None => {
            tracing::debug!(
                domain = %failure.domain,
                code = failure.code,
                "unrecognised transport failure"
            );
            ClassifiedError::None
        }
    }
}
