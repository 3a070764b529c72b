//! Bounded in-memory caching.
//!
//! A single generic LRU container used to memoize token counts. Callers
//! that need shared access wrap it in their own lock; see
//! [`crate::tokens::TokenCountService`].

mod lru;

pub use lru::BoundedLru;
