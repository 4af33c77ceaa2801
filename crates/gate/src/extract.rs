//! Token extraction strategies
//!
//! An extractor locates the raw token string on an incoming request. The
//! built-ins cover the `Authorization: Bearer <token>` header and a named
//! query-string parameter; anything else can be supplied as a closure via
//! [`GateBuilder::extractor`](crate::GateBuilder::extractor).

use std::sync::Arc;

use axum::{extract::Request, http::header::AUTHORIZATION};

use crate::error::Error;

/// Pluggable strategy mapping a request to a raw token string.
pub type Extractor = Arc<dyn Fn(&Request) -> Result<String, Error> + Send + Sync>;

/// Extract a bearer token from the `Authorization` header.
///
/// Header lookup is case-insensitive (guaranteed by `http`'s header map).
/// The value must be exactly `<scheme> <token>` with a single space, the
/// scheme matching `bearer` case-insensitively and the token non-empty.
pub fn bearer(req: &Request) -> Result<String, Error> {
    let Some(value) = req.headers().get(AUTHORIZATION) else {
        return Err(Error::EmptyToken);
    };
    let value = value.to_str().map_err(|_| Error::TokenMalformed)?;
    if value.is_empty() {
        return Err(Error::EmptyToken);
    }

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None)
            if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() =>
        {
            Ok(token.to_owned())
        }
        _ => Err(Error::TokenMalformed),
    }
}

/// Build an extractor reading the token from the named query parameter.
///
/// The parameter name is fixed when the extractor is built, not per request.
/// Only the parameter's first occurrence is consulted; an absent parameter or
/// an empty first value fails with [`Error::EmptyToken`].
pub fn query(
    param: impl Into<String>,
) -> impl Fn(&Request) -> Result<String, Error> + Send + Sync + 'static {
    let param = param.into();
    move |req: &Request| {
        let raw = req.uri().query().unwrap_or("");
        url::form_urlencoded::parse(raw.as_bytes())
            .find(|(name, _)| *name == param)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .ok_or(Error::EmptyToken)
    }
}
