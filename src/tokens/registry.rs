use std::sync::Arc;

use serde::Serialize;

use super::heuristic::HeuristicProvider;
use super::model_id::to_model_id;
use super::provider::{Exactness, TokenProvider};
use super::tiktoken::TiktokenProvider;
use crate::pricing::PricingRow;

/// One pricing row resolved through the registry, ready for a UI picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedModel {
    pub model_id: String,
    pub provider_id: String,
    pub provider_label: String,
    pub exactness: Exactness,
}

/// Ordered list of token providers, exact before estimated.
///
/// Lookup is first-match on `supports_model`; the heuristic provider
/// accepts everything, so resolution never fails. Adding a provider means
/// appending a variant with its own predicate, not touching existing ones.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn TokenProvider>>,
    estimated: Arc<HeuristicProvider>,
}

impl ProviderRegistry {
    /// Registry over `providers` (tried in order) with the heuristic
    /// provider as the terminal fallback.
    pub fn new(providers: Vec<Arc<dyn TokenProvider>>) -> Self {
        Self {
            providers,
            estimated: Arc::new(HeuristicProvider::new()),
        }
    }

    /// First provider accepting `model_id`, else the heuristic fallback.
    pub fn provider_for_model(&self, model_id: &str) -> Arc<dyn TokenProvider> {
        self.providers
            .iter()
            .find(|p| p.supports_model(model_id))
            .cloned()
            .unwrap_or_else(|| self.estimated.clone() as Arc<dyn TokenProvider>)
    }

    /// Which accuracy tier `model_id` resolves to.
    pub fn exactness_for_model(&self, model_id: &str) -> Exactness {
        if self.provider_for_model(model_id).id() == self.estimated.id() {
            Exactness::Estimated
        } else {
            Exactness::Exact
        }
    }

    /// The degradation target for failed exact counts.
    pub fn estimated(&self) -> &HeuristicProvider {
        &self.estimated
    }

    /// Resolve every pricing row for UI model pickers. Pure function of
    /// the pricing table.
    pub fn list_supported_models(&self, rows: &[PricingRow]) -> Vec<SupportedModel> {
        rows.iter()
            .map(|row| {
                let model_id = to_model_id(&row.provider, &row.model);
                let provider = self.provider_for_model(&model_id);
                SupportedModel {
                    exactness: self.exactness_for_model(&model_id),
                    provider_id: provider.id().to_string(),
                    provider_label: provider.label().to_string(),
                    model_id,
                }
            })
            .collect()
    }
}

impl Default for ProviderRegistry {
    /// Exact tiktoken counting for OpenAI models, estimation elsewhere.
    fn default() -> Self {
        Self::new(vec![Arc::new(TiktokenProvider::new())])
    }
}
