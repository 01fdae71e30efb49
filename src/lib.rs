#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod call;
pub mod classify;
pub mod codec;
pub mod error;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use call::{InvokeCall, Payment};
pub use classify::transport::{TransportCode, URL_ERROR_DOMAIN};
pub use classify::{
    ASSET_SCRIPT_ERROR_CODE, ClassifiedError, ErrorClassifier, NOT_FOUND_STATUS,
    SCRIPT_ERROR_CODE, classify,
};
pub use codec::{
    ArgType, CallArg, CallArgValue, decode_explicit, decode_implicit, encode_explicit,
    encode_implicit,
};
pub use error::Error;
pub use types::{Failure, HttpResponse, TransportFailure, WrapperFailure};
