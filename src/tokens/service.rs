use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::future::{BoxFuture, FutureExt, Shared};

use super::heuristic::HeuristicProvider;
use super::model_id::{normalize_provider_id, to_model_id};
use super::provider::TokenCount;
use super::registry::ProviderRegistry;
use crate::cache::BoundedLru;
use crate::hash::stable_text_key;
use crate::pricing::PricingRow;
use crate::Result;

/// Sized for interactive comparison sessions, not batch processing.
const DEFAULT_CACHE_CAPACITY: usize = 64;

type SharedCount = Shared<BoxFuture<'static, TokenCount>>;

struct State {
    cache: BoundedLru<String, TokenCount>,
    in_flight: HashMap<String, SharedCount>,
}

/// Memoizing token-count lookups keyed by (provider, model, text
/// fingerprint).
///
/// Guarantees at most one concurrent computation per cache key: concurrent
/// misses on the same key attach to one shared future. Exact-provider
/// failures degrade to the heuristic instead of surfacing, so lookups
/// never fail; the `exactness` field always reflects which path ran.
///
/// Computations run as detached tasks that write the cache and clear the
/// in-flight marker from their own completion path, so work finishes and
/// benefits later lookups even if every waiter is dropped mid-flight.
/// All map mutations happen synchronously under one lock, never across an
/// await point. Discarding stale results is the caller's job.
pub struct TokenCountService {
    registry: Arc<ProviderRegistry>,
    state: Arc<Mutex<State>>,
}

impl std::fmt::Debug for TokenCountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCountService").finish_non_exhaustive()
    }
}

impl TokenCountService {
    /// A service over an injected registry with the given cache capacity.
    ///
    /// Zero capacity is a configuration error.
    pub fn new(registry: Arc<ProviderRegistry>, cache_capacity: usize) -> Result<Self> {
        Ok(Self {
            registry,
            state: Arc::new(Mutex::new(State {
                cache: BoundedLru::new(cache_capacity)?,
                in_flight: HashMap::new(),
            })),
        })
    }

    /// Count tokens in `text` for the model a pricing row describes.
    pub async fn count_for_row(&self, text: &str, row: &PricingRow) -> TokenCount {
        let key = cache_key(row, text);

        let pending = {
            let mut state = self.state.lock().unwrap();
            if let Some(hit) = state.cache.get(&key) {
                tracing::debug!(key = %key, "token count cache hit");
                return hit.clone();
            }
            if let Some(existing) = state.in_flight.get(&key) {
                tracing::debug!(key = %key, "joining in-flight token count");
                existing.clone()
            } else {
                tracing::debug!(key = %key, "token count cache miss");
                let fut = self.spawn_count(key.clone(), text.to_string(), row.clone());
                state.in_flight.insert(key, fut.clone());
                fut
            }
        };

        pending.await
    }

    /// Launch the computation detached from its callers: the spawned task
    /// writes the cache and clears the in-flight marker itself, so
    /// abandoned waiters can neither stall the work nor leak the entry.
    fn spawn_count(&self, key: String, text: String, row: PricingRow) -> SharedCount {
        let registry = Arc::clone(&self.registry);
        let state = Arc::clone(&self.state);
        let fallback = text.clone();
        let task = tokio::spawn(async move {
            let result = compute(registry, text, row).await;
            let mut state = state.lock().unwrap();
            state.in_flight.remove(&key);
            state.cache.set(key, result.clone());
            result
        });
        task.map(move |joined| {
            // Join errors mean the task panicked; estimate rather than
            // poisoning every waiter.
            joined.unwrap_or_else(|err| {
                tracing::warn!(error = %err, "token counting task failed");
                HeuristicProvider::new().estimate(&fallback)
            })
        })
        .boxed()
        .shared()
    }

    /// Drop every cached count and in-flight marker. Test isolation hook.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.cache.clear();
        state.in_flight.clear();
    }

    /// Current number of cached counts.
    pub fn cache_size(&self) -> usize {
        self.state.lock().unwrap().cache.len()
    }
}

impl Default for TokenCountService {
    fn default() -> Self {
        Self::new(Arc::new(ProviderRegistry::default()), DEFAULT_CACHE_CAPACITY)
            .expect("default cache capacity is non-zero")
    }
}

/// Composite cache key; the fingerprint stands in for the raw text so key
/// size stays bounded.
fn cache_key(row: &PricingRow, text: &str) -> String {
    format!(
        "{}:{}:{}",
        normalize_provider_id(&row.provider),
        row.model_key(),
        stable_text_key(text)
    )
}

async fn compute(registry: Arc<ProviderRegistry>, text: String, row: PricingRow) -> TokenCount {
    let model_id = to_model_id(&row.provider, &row.model);
    let provider = registry.provider_for_model(&model_id);
    match provider.count_tokens(&text, &model_id).await {
        Ok(count) => count,
        Err(err) => {
            tracing::warn!(
                model = %model_id,
                provider = provider.id(),
                error = %err,
                "exact tokenization failed, degrading to estimate"
            );
            registry.estimated().estimate(&text)
        }
    }
}
