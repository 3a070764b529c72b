//! # tokcost
//!
//! Token counting and cost estimation across LLM providers.
//!
//! Given arbitrary text and a table of pricing rows, this crate resolves a
//! token provider per model (exact tiktoken encoding for OpenAI models, a
//! deterministic heuristic everywhere else), memoizes counts behind a
//! bounded LRU cache with in-flight deduplication, and turns counts into
//! cost breakdowns.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`hash`] | FNV-1a text fingerprinting for cache keys |
//! | [`cache`] | Generic bounded LRU container |
//! | [`text`] | Normalization and character/grapheme/word/line counters |
//! | [`tokens`] | Provider abstraction, registry, memoizing service |
//! | [`pricing`] | Pricing rows, validation, cost computation, sorting |
//! | [`error`] | Unified error type and validation issues |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tokcost::{compute_cost_usd, PricingRow, TokenCountService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = TokenCountService::default();
//!     let mut row = PricingRow::minimal("OpenAI", "gpt-4o", 2.5);
//!     row.output_per_mtok = Some(10.0);
//!
//!     let count = service.count_for_row("Hello, world!", &row).await;
//!     let cost = compute_cost_usd(count.tokens as f64, 0.0, &row);
//!     println!("{} tokens ({}) → ${:.6}", count.tokens, count.exactness, cost.total_usd);
//! }
//! ```
//!
//! ## Error model
//!
//! Only construction-time configuration problems (a zero cache capacity)
//! are fatal. Pricing validation returns a structured issue list the UI
//! can render, and exact-tokenizer failures silently degrade to the
//! estimated tier — the `exactness` field on every result says which path
//! actually ran.

pub mod cache;
pub mod error;
pub mod hash;
pub mod pricing;
pub mod text;
pub mod tokens;

pub use cache::BoundedLru;
pub use error::{Error, ValidationIssue};
pub use hash::{hash_text, stable_text_key};
pub use pricing::{
    compute_cost_usd, format_usd, sort_models, validate_prices, CostBreakdown, PricingRow,
};
pub use text::{normalize_text, NormalizeOptions, TextStats};
pub use tokens::{
    normalize_provider_id, parse_model_id, to_model_id, Exactness, HeuristicProvider, ModelId,
    ProviderRegistry, SupportedModel, TiktokenProvider, TokenCount, TokenCountService,
    TokenProvider,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
