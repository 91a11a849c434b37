//! Retrofn - side-effecting consumer callbacks with composition
//!
//! A small compatibility library for runtimes that lack the standard
//! single-argument consumer contract: an operation that accepts one value,
//! returns nothing, and exists purely for its side effects, plus an
//! `and_then` combinator that sequences two such operations into one.
//!
//! # Architecture
//!
//! One contract, offered as a family of otherwise-identical traits:
//! - [`I64Consumer`] - the primary specialization, accepts an `i64`
//! - [`I32Consumer`], [`F64Consumer`] - sibling primitive specializations
//! - [`Consumer<T>`](Consumer) - the general reference-typed case
//!
//! Each primitive specialization is monomorphic so invoking a consumer never
//! boxes or indirects the value. Implementing `accept` is all a consumer
//! does; `and_then` is a provided method, and closures of the matching shape
//! are consumers automatically.
//!
//! Composition semantics, which every contract in the family shares:
//! - the chain runs its first stage, then its second, both on the identical
//!   input value, strictly in that order
//! - a first-stage failure means the second stage never runs
//! - a second-stage failure propagates after the first stage's side effect
//!   has already taken place
//! - failures pass through unmodified; this layer never wraps or swallows
//!   them
//! - composing with an absent `after` fails fast with
//!   [`ConsumerError::MissingAfter`], before either consumer runs
//!
//! The library does NOT:
//! - Transform, schedule, or collect values
//! - Define any concurrency, retry, or cancellation policy
//! - Load, invoke, or rewrite the call sites that use these contracts
//!
//! All of that belongs to the callers and the consumers they supply.
//!
//! # Example Usage
//!
//! ```
//! use retrofn::I64Consumer;
//!
//! let mut peak = i64::MIN;
//! let audit = |v: i64| -> retrofn::Result<()> {
//!     log::debug!("observed {}", v);
//!     Ok(())
//! };
//! let track_peak = |v: i64| -> retrofn::Result<()> {
//!     peak = peak.max(v);
//!     Ok(())
//! };
//!
//! let mut chain = audit.and_then(Some(track_peak)).unwrap();
//! for sample in [3, 9, 4] {
//!     chain.accept(sample).unwrap();
//! }
//! drop(chain);
//! assert_eq!(peak, 9);
//! ```

// Public modules
pub mod consumer;
pub mod error;
pub mod f64_consumer;
pub mod i32_consumer;
pub mod i64_consumer;

// Re-export main types for convenience
pub use consumer::{Chain, Consumer};
pub use error::{ConsumerError, Result};
pub use f64_consumer::{F64Chain, F64Consumer};
pub use i32_consumer::{I32Chain, I32Consumer};
pub use i64_consumer::{I64Chain, I64Consumer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: a bare closure is already a consumer
        let mut count = 0u32;
        {
            let mut tick = |_: i64| -> Result<()> {
                count += 1;
                Ok(())
            };
            tick.accept(1).unwrap();
        }
        assert_eq!(count, 1);
        assert!(!VERSION.is_empty());
    }
}
