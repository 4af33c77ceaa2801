//! JWT request-authentication middleware for axum/tower services
//!
//! A gate inspects each incoming request, extracts a bearer credential,
//! verifies it through `jsonwebtoken`, and either invokes the configured
//! error handler or attaches the verified token to the request's
//! [`AuthContext`] before delegating to the inner handler.
//!
//! Configure once with [`JwtGate::builder`], then mount the gate either as a
//! `tower::Layer` (`router.layer(gate)`) or through
//! `axum::middleware::from_fn_with_state(gate, require_auth)`; the two forms
//! behave identically.
//!
//! Verification uses the configured key unconditionally and, unless opted
//! out, requires the token's declared algorithm to equal the configured one.
//! Signing, key rotation, and claim-level authorization are out of scope.

mod config;
mod context;
mod error;
pub mod extract;
mod middleware;
mod verify;

pub use config::{ErrorHandler, GateBuilder};
pub use context::{AuthContext, VerifiedToken};
pub use error::Error;
pub use middleware::{require_auth, JwtGate, JwtGateService};
