use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// A parsed model identifier: `"{provider_id}:{model}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId {
    pub provider_id: String,
    pub model: String,
}

/// Lowercase, trim, and collapse internal whitespace runs to single hyphens.
///
/// `"  Mistral AI "` → `"mistral-ai"`.
pub fn normalize_provider_id(provider: &str) -> String {
    WHITESPACE_RUNS
        .replace_all(provider.trim(), "-")
        .to_lowercase()
}

/// Build the composite identifier for a (provider, model) pair.
pub fn to_model_id(provider: &str, model: &str) -> String {
    format!("{}:{}", normalize_provider_id(provider), model)
}

/// Split a model identifier on the FIRST colon only.
///
/// Model names may themselves contain colons (`"org:ft-model:v2"`); the
/// remainder is kept whole, never truncated.
pub fn parse_model_id(model_id: &str) -> ModelId {
    match model_id.split_once(':') {
        Some((provider_id, model)) => ModelId {
            provider_id: provider_id.to_string(),
            model: model.to_string(),
        },
        None => ModelId {
            provider_id: model_id.to_string(),
            model: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_normalization() {
        assert_eq!(normalize_provider_id("OpenAI"), "openai");
        assert_eq!(normalize_provider_id("  Mistral AI "), "mistral-ai");
        assert_eq!(normalize_provider_id("Google  Cloud\tAI"), "google-cloud-ai");
    }

    #[test]
    fn model_id_round_trip() {
        let id = to_model_id("OpenAI", "gpt-4o");
        assert_eq!(id, "openai:gpt-4o");
        let parsed = parse_model_id(&id);
        assert_eq!(parsed.provider_id, "openai");
        assert_eq!(parsed.model, "gpt-4o");
    }

    #[test]
    fn model_with_embedded_colons_is_not_truncated() {
        let parsed = parse_model_id("openai:ft:gpt-4o:org:v2");
        assert_eq!(parsed.provider_id, "openai");
        assert_eq!(parsed.model, "ft:gpt-4o:org:v2");
    }

    #[test]
    fn identifier_without_colon_yields_empty_model() {
        let parsed = parse_model_id("anthropic");
        assert_eq!(parsed.provider_id, "anthropic");
        assert_eq!(parsed.model, "");
    }
}
