//! Token counting: provider abstraction, registry, and memoization.
//!
//! Two accuracy tiers behind one trait: [`TiktokenProvider`] runs the real
//! OpenAI encoding, [`HeuristicProvider`] is the universal estimated
//! fallback. [`ProviderRegistry`] picks one per model identifier and
//! [`TokenCountService`] memoizes lookups with in-flight deduplication.

mod heuristic;
mod model_id;
mod provider;
mod registry;
mod service;
mod tiktoken;

pub use heuristic::HeuristicProvider;
pub use model_id::{normalize_provider_id, parse_model_id, to_model_id, ModelId};
pub use provider::{Exactness, TokenCount, TokenProvider};
pub use registry::{ProviderRegistry, SupportedModel};
pub use service::TokenCountService;
pub use tiktoken::TiktokenProvider;
