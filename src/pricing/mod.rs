//! Pricing rows, schema-checked ingestion, cost computation, and sorting.
//!
//! The pricing table is a boundary contract: loaded once, validated by
//! [`validate_prices`], and treated as immutable afterward. Nothing here
//! mutates a row.

mod cost;
mod sort;
mod validate;

pub use cost::{compute_cost_usd, format_usd, CostBreakdown};
pub use sort::sort_models;
pub use validate::validate_prices;

use serde::{Deserialize, Serialize};

use crate::tokens::to_model_id;

/// One provider/model price point, in USD per million tokens.
///
/// `(provider, model)` is the natural key; duplicates are rejected at
/// ingestion, not by the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRow {
    pub provider: String,
    /// Display name; may differ from the stable `model_id`.
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    pub input_per_mtok: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_per_mtok: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_input_per_mtok: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieved_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_confidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PricingRow {
    /// A row with only the required fields set. Handy in tests and demos.
    pub fn minimal(provider: &str, model: &str, input_per_mtok: f64) -> Self {
        Self {
            provider: provider.to_string(),
            model: model.to_string(),
            model_id: None,
            input_per_mtok,
            output_per_mtok: None,
            cached_input_per_mtok: None,
            currency: None,
            source_url: None,
            retrieved_at: None,
            pricing_confidence: None,
            tier: None,
            modality: None,
            tokenization: None,
            notes: None,
        }
    }

    /// The machine key for caches: `model_id` when present, else `model`.
    pub fn model_key(&self) -> &str {
        self.model_id.as_deref().unwrap_or(&self.model)
    }

    /// The composite identifier built from the natural key.
    pub fn natural_id(&self) -> String {
        to_model_id(&self.provider, &self.model)
    }
}
