use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Which path produced a token count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exactness {
    /// The provider's real encoding algorithm ran over the text.
    Exact,
    /// A deterministic heuristic stood in for the real encoder.
    Estimated,
}

impl std::fmt::Display for Exactness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exactness::Exact => write!(f, "exact"),
            Exactness::Estimated => write!(f, "estimated"),
        }
    }
}

/// A token count together with how trustworthy it is.
///
/// Value type: produced fresh per (text, model) pair, cached by value,
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCount {
    pub tokens: u64,
    pub exactness: Exactness,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TokenCount {
    pub fn exact(tokens: u64) -> Self {
        Self {
            tokens,
            exactness: Exactness::Exact,
            notes: None,
        }
    }

    pub fn estimated(tokens: u64, note: impl Into<String>) -> Self {
        Self {
            tokens,
            exactness: Exactness::Estimated,
            notes: Some(note.into()),
        }
    }
}

/// Capability interface for per-provider token counting.
///
/// Implementations are cheap to share (`Arc<dyn TokenProvider>`) and hold
/// no per-request state; encoder caches live inside the provider.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Stable machine identifier, matched against the provider segment of
    /// model identifiers.
    fn id(&self) -> &str;

    /// Human-readable name for UI pickers.
    fn label(&self) -> &str;

    /// Whether this provider can count for the given model identifier.
    fn supports_model(&self, model_id: &str) -> bool;

    /// Count tokens in `text` for `model_id`.
    ///
    /// May suspend while an encoder loads. Failures are recoverable: the
    /// memoization layer degrades to the estimated path rather than
    /// surfacing them.
    async fn count_tokens(&self, text: &str, model_id: &str) -> Result<TokenCount>;
}
