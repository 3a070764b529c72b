use async_trait::async_trait;

use super::provider::{TokenCount, TokenProvider};
use crate::text::count_characters;
use crate::Result;

/// Roughly four characters per token across modern BPE vocabularies.
const CHARS_PER_TOKEN: u64 = 4;

const ESTIMATE_NOTE: &str = "Estimated from character count (~4 chars per token)";

/// Universal fallback counter: `ceil(characters / 4)`.
///
/// Deterministic and reproducible, but makes no claim of matching any
/// vendor's real encoder. Accepts every model.
#[derive(Debug, Default, Clone)]
pub struct HeuristicProvider;

impl HeuristicProvider {
    pub fn new() -> Self {
        Self
    }

    /// Infallible counterpart to [`TokenProvider::count_tokens`], used by
    /// the memoization layer as the degradation target.
    pub fn estimate(&self, text: &str) -> TokenCount {
        if text.is_empty() {
            return TokenCount::estimated(0, ESTIMATE_NOTE);
        }
        let chars = count_characters(text) as u64;
        TokenCount::estimated(chars.div_ceil(CHARS_PER_TOKEN), ESTIMATE_NOTE)
    }
}

#[async_trait]
impl TokenProvider for HeuristicProvider {
    fn id(&self) -> &str {
        "heuristic"
    }

    fn label(&self) -> &str {
        "Estimated (chars / 4)"
    }

    fn supports_model(&self, _model_id: &str) -> bool {
        true
    }

    async fn count_tokens(&self, text: &str, _model_id: &str) -> Result<TokenCount> {
        Ok(self.estimate(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::provider::Exactness;

    #[test]
    fn empty_text_is_zero_tokens() {
        let count = HeuristicProvider::new().estimate("");
        assert_eq!(count.tokens, 0);
        assert_eq!(count.exactness, Exactness::Estimated);
    }

    #[test]
    fn counts_round_up() {
        let provider = HeuristicProvider::new();
        assert_eq!(provider.estimate("abcd").tokens, 1);
        assert_eq!(provider.estimate("abcde").tokens, 2);
        assert_eq!(provider.estimate(&"x".repeat(400)).tokens, 100);
    }

    #[test]
    fn estimate_carries_a_note() {
        let count = HeuristicProvider::new().estimate("hello");
        assert!(count.notes.is_some());
    }

    #[tokio::test]
    async fn accepts_any_model() {
        let provider = HeuristicProvider::new();
        assert!(provider.supports_model("anthropic:claude-sonnet-4"));
        assert!(provider.supports_model("whatever"));
        let count = provider.count_tokens("hello", "x:y").await.unwrap();
        assert_eq!(count.tokens, 2);
    }
}
