//! Gate configuration

use std::borrow::Cow;
use std::sync::Arc;

use axum::{
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{Algorithm, DecodingKey};

use crate::error::Error;
use crate::extract::{self, Extractor};
use crate::middleware::JwtGate;

/// Caller-supplied hook invoked with the original request and the failure;
/// its response is returned verbatim, and the inner handler never runs.
pub type ErrorHandler = Arc<dyn Fn(&Request, &Error) -> Response + Send + Sync>;

/// Resolved configuration, immutable once the gate is built.
pub(crate) struct GateConfig {
    pub(crate) key: Option<DecodingKey>,
    pub(crate) algorithm: Option<Algorithm>,
    pub(crate) context_key: Cow<'static, str>,
    pub(crate) extractor: Extractor,
    pub(crate) error_handler: ErrorHandler,
}

/// Builder for [`JwtGate`].
///
/// Defaults: no decoding key (every verification fails until one is set),
/// expected algorithm HS256, context key `"user"`, bearer-header extraction,
/// and a 401 `unauthorized` error handler. Setters overwrite, last write
/// wins; nothing is validated until request time.
pub struct GateBuilder {
    config: GateConfig,
}

impl Default for GateBuilder {
    fn default() -> Self {
        Self {
            config: GateConfig {
                key: None,
                algorithm: Some(Algorithm::HS256),
                context_key: Cow::Borrowed("user"),
                extractor: Arc::new(extract::bearer),
                error_handler: Arc::new(|_req, _err| {
                    (StatusCode::UNAUTHORIZED, "unauthorized").into_response()
                }),
            },
        }
    }
}

impl GateBuilder {
    /// Set the decoding key tokens are verified against.
    pub fn decoding_key(mut self, key: DecodingKey) -> Self {
        self.config.key = Some(key);
        self
    }

    /// Shorthand for an HMAC shared-secret key.
    pub fn hmac_secret(self, secret: impl AsRef<[u8]>) -> Self {
        self.decoding_key(DecodingKey::from_secret(secret.as_ref()))
    }

    /// Set the algorithm every accepted token must declare.
    ///
    /// Tokens whose declared algorithm differs are rejected as
    /// signature-invalid even when their signature verifies.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = Some(algorithm);
        self
    }

    /// Disable the expected-algorithm check and accept any algorithm the
    /// library can verify with the configured key.
    ///
    /// This removes half of the algorithm-confusion defense; prefer
    /// [`algorithm`](Self::algorithm) unless clients legitimately rotate
    /// between algorithms.
    pub fn allow_any_algorithm(mut self) -> Self {
        self.config.algorithm = None;
        self
    }

    /// Set the key the verified token is stored under in the request's
    /// [`AuthContext`](crate::AuthContext).
    pub fn context_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.config.context_key = key.into();
        self
    }

    /// Replace the token extraction strategy.
    pub fn extractor<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&Request) -> Result<String, Error> + Send + Sync + 'static,
    {
        self.config.extractor = Arc::new(extractor);
        self
    }

    /// Replace the error handler invoked on any authentication failure.
    pub fn error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Request, &Error) -> Response + Send + Sync + 'static,
    {
        self.config.error_handler = Arc::new(handler);
        self
    }

    pub fn build(self) -> JwtGate {
        JwtGate::from_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};

    #[test]
    fn test_defaults() {
        let builder = GateBuilder::default();
        assert!(builder.config.key.is_none());
        assert_eq!(builder.config.algorithm, Some(Algorithm::HS256));
        assert_eq!(builder.config.context_key, "user");
    }

    #[test]
    fn test_last_write_wins() {
        let builder = GateBuilder::default()
            .algorithm(Algorithm::ES384)
            .algorithm(Algorithm::HS512)
            .context_key("svc")
            .context_key("account");

        assert_eq!(builder.config.algorithm, Some(Algorithm::HS512));
        assert_eq!(builder.config.context_key, "account");
    }

    #[test]
    fn test_allow_any_algorithm_clears_expectation() {
        let builder = GateBuilder::default()
            .algorithm(Algorithm::ES384)
            .allow_any_algorithm();
        assert!(builder.config.algorithm.is_none());
    }

    #[tokio::test]
    async fn test_default_error_handler() {
        let builder = GateBuilder::default();
        let req = Request::builder().uri("/fake").body(Body::empty()).unwrap();

        let response = (builder.config.error_handler)(&req, &Error::EmptyToken);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"unauthorized");
    }

    #[tokio::test]
    async fn test_custom_error_handler() {
        let builder = GateBuilder::default().error_handler(|_req, _err| {
            (StatusCode::BAD_REQUEST, "bad request").into_response()
        });
        let req = Request::builder().uri("/fake").body(Body::empty()).unwrap();

        let response = (builder.config.error_handler)(&req, &Error::TokenMalformed);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
