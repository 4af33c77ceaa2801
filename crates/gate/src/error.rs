//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jsonwebtoken::errors::ErrorKind;

/// Failure raised while authenticating a request.
///
/// Extractor-level failures get their own variants; everything the
/// verification library reports is surfaced unchanged through [`Error::Jwt`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No credential was found on the request, or the extracted token was empty.
    #[error("empty token")]
    EmptyToken,

    /// A credential was present but not in the expected syntactic form.
    #[error("invalid token format")]
    TokenMalformed,

    /// Verification library error, propagated verbatim.
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl Error {
    /// The library's signature-invalid error, reused when the token's declared
    /// algorithm does not match the configured one.
    pub(crate) fn signature_invalid() -> Self {
        Error::Jwt(ErrorKind::InvalidSignature.into())
    }

    /// Raised at verification time when no decoding key was ever configured.
    pub(crate) fn missing_key() -> Self {
        Error::Jwt(ErrorKind::InvalidKeyFormat.into())
    }
}

/// Fixed response used by the default error handler.
///
/// Deliberately carries no detail about the underlying failure; callers who
/// want richer bodies install their own handler via
/// [`GateBuilder::error_handler`](crate::GateBuilder::error_handler).
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, "unauthorized").into_response()
    }
}
