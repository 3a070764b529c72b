use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tiktoken_rs::CoreBPE;

use super::model_id::{normalize_provider_id, parse_model_id};
use super::provider::{TokenCount, TokenProvider};
use crate::{Error, Result};

/// Exact tokenization for OpenAI-compatible models via tiktoken
/// vocabularies.
///
/// Encoder resolution is model-family based: the 4o/o-series family uses
/// `o200k_base`, the gpt-4 / gpt-3.5 / embedding-3 family uses
/// `cl100k_base`, and unknown model names fall back to `cl100k_base`
/// rather than failing. Resolved encoders are cached per raw model name
/// because loading a vocabulary is the expensive step.
pub struct TiktokenProvider {
    provider_id: String,
    encoders: RwLock<HashMap<String, Arc<CoreBPE>>>,
}

impl TiktokenProvider {
    pub fn new() -> Self {
        Self::for_provider("openai")
    }

    /// Designate a different provider segment as the exact-tokenizer
    /// provider (useful for OpenAI-compatible gateways).
    pub fn for_provider(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: normalize_provider_id(&provider_id.into()),
            encoders: RwLock::new(HashMap::new()),
        }
    }

    fn encoder_for(&self, model: &str) -> Result<Arc<CoreBPE>> {
        {
            let encoders = self.encoders.read().unwrap();
            if let Some(bpe) = encoders.get(model) {
                return Ok(bpe.clone());
            }
        }
        let bpe = Arc::new(load_encoder(model)?);
        let mut encoders = self.encoders.write().unwrap();
        Ok(encoders.entry(model.to_string()).or_insert(bpe).clone())
    }
}

impl Default for TiktokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn load_encoder(model: &str) -> Result<CoreBPE> {
    let name = model.to_lowercase();
    let uses_o200k = name.contains("gpt-4o")
        || name.contains("chatgpt-4o")
        || name.starts_with("o1")
        || name.starts_with("o3")
        || name.starts_with("o4");
    if uses_o200k {
        if let Ok(bpe) = tiktoken_rs::o200k_base() {
            return Ok(bpe);
        }
        tracing::warn!(model = %model, "o200k_base unavailable, using base encoding");
    }
    // cl100k_base covers gpt-4, gpt-3.5 and text-embedding-3, and doubles
    // as the default for unrecognized model names.
    tiktoken_rs::cl100k_base()
        .map_err(|e| Error::Tokenizer(format!("failed to load base encoding: {}", e)))
}

#[async_trait]
impl TokenProvider for TiktokenProvider {
    fn id(&self) -> &str {
        &self.provider_id
    }

    fn label(&self) -> &str {
        "OpenAI (tiktoken)"
    }

    fn supports_model(&self, model_id: &str) -> bool {
        normalize_provider_id(&parse_model_id(model_id).provider_id) == self.provider_id
    }

    async fn count_tokens(&self, text: &str, model_id: &str) -> Result<TokenCount> {
        if text.is_empty() {
            return Ok(TokenCount::exact(0));
        }
        let model = parse_model_id(model_id).model;
        let bpe = self.encoder_for(&model)?;
        Ok(TokenCount::exact(bpe.encode_ordinary(text).len() as u64))
    }
}
