//! Gateway adapters for the hosted question-answering and translation
//! services.
//!
//! Both adapters are thin: one request per call, no caching, no retries.
//! Failures surface immediately and end the session.

mod qa;
mod translation;

pub use qa::{Answer, QaClient};
pub use translation::{Language, TranslationClient};

use std::collections::BTreeMap;
use std::fmt;

/// Errors produced by either gateway adapter.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The service answered with a non-success status (transport/auth).
    #[error("service unavailable ({code}): {message}")]
    ServiceUnavailable { code: u16, message: String },

    /// The operator requested shutdown while the call was in flight.
    #[error("request cancelled")]
    Cancelled,

    /// Connection, DNS, or timeout failure before a response arrived.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Abstraction for the answer lookup.
/// Implemented by [`QaClient`] for production; scripted fakes in tests.
#[allow(async_fn_in_trait)]
pub trait QaGateway {
    /// Returns the ranked candidate answers for a question, in the order
    /// defined by the remote service.
    async fn answers(&self, question: &str) -> Result<Vec<Answer>, GatewayError>;
}

/// Abstraction for the translation service.
/// Implemented by [`TranslationClient`] for production; scripted fakes in tests.
#[allow(async_fn_in_trait)]
pub trait TranslationGateway {
    /// Returns the language catalog: code to [`Language`].
    async fn languages(&self) -> Result<BTreeMap<String, Language>, GatewayError>;

    /// Translates `text` from `from` to `to`, returning the first
    /// alternative, or `None` when the service yields none.
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Option<String>, GatewayError>;
}

#[derive(Clone)]
pub(crate) struct ApiKey(String);

impl ApiKey {
    pub(crate) const fn new(key: String) -> Self {
        Self(key)
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Truncates an error body for inclusion in a message.
pub(crate) fn snippet(text: &str) -> String {
    const MAX: usize = 200;
    if text.len() <= MAX {
        return text.to_string();
    }
    let mut end = MAX;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
