//! Per-request token context
//!
//! The gate never mutates a request's transport state; it attaches an
//! [`AuthContext`] to the request's extensions, and downstream handlers pull
//! the verified token back out of it.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use jsonwebtoken::{Algorithm, Header};
use serde_json::Value;

/// A token that passed verification.
///
/// Owned by the request that presented it; dropped when the request finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedToken {
    /// Decoded JOSE header, including the declared algorithm.
    pub header: Header,
    /// Decoded claim set.
    pub claims: Value,
    /// The raw token string as presented on the request.
    pub raw: String,
}

impl VerifiedToken {
    /// Algorithm the token declared (and was verified with).
    pub fn algorithm(&self) -> Algorithm {
        self.header.alg
    }

    /// Look up a claim by name.
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }
}

/// Keyed side table carrying verified tokens through a request.
///
/// Each gate instance writes its token under its configured context key, so
/// independent gates layered on the same route coexist as long as their keys
/// differ. Keeping keys distinct across independent middleware authors is the
/// caller's responsibility; a reused key silently overwrites the earlier
/// entry, the same way reusing a map key would.
///
/// Handlers read it via `Extension<AuthContext>` or straight from the
/// request's extensions.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    entries: HashMap<Cow<'static, str>, Arc<VerifiedToken>>,
}

impl AuthContext {
    /// The verified token stored under `key`, if any.
    pub fn token(&self, key: &str) -> Option<&VerifiedToken> {
        self.entries.get(key).map(Arc::as_ref)
    }

    pub(crate) fn insert(&mut self, key: Cow<'static, str>, token: VerifiedToken) {
        self.entries.insert(key, Arc::new(token));
    }
}
