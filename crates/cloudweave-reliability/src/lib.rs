//! cloudweave-reliability
//!
//! The shared reliability primitives every adapter is built on: retry with
//! exponential backoff (spec §4.2), an LRU+TTL cache (§4.3), and the
//! dependency/configuration validator (§4.4).

pub mod cache;
pub mod retry;
pub mod validator;

pub use cache::LruTtlCache;
pub use retry::{default_retryable, retry, RetryPolicy};
pub use validator::{
    BatchOutcome, BatchSummary, DependencyValidator, InvalidRecord, SchemaValidator,
    ValidationIssue, ValidationOutcome,
};
