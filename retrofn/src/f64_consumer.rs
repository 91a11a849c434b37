//! 64-bit floating point consumer contract
//!
//! Identical to [`crate::i64_consumer`] with the value type varied; see that
//! module for the full contract documentation.

use crate::error::{ConsumerError, Result};

/// An operation that accepts a single `f64`-valued argument and returns no
/// result, operating via side effects.
pub trait F64Consumer {
    /// Perform this operation on the given value.
    fn accept(&mut self, value: f64) -> Result<()>;

    /// Returns a composed consumer running this operation, then `after`,
    /// on the identical input value. Fails with
    /// [`ConsumerError::MissingAfter`] if `after` is `None`, before either
    /// consumer runs. A first-stage failure means `after` never runs.
    fn and_then<A>(self, after: Option<A>) -> Result<F64Chain<Self, A>>
    where
        Self: Sized,
        A: F64Consumer,
    {
        let after = after.ok_or(ConsumerError::MissingAfter)?;
        Ok(F64Chain {
            first: self,
            second: after,
        })
    }
}

impl<F> F64Consumer for F
where
    F: FnMut(f64) -> Result<()>,
{
    fn accept(&mut self, value: f64) -> Result<()> {
        self(value)
    }
}

/// Two `f64` consumers sequenced into one
#[derive(Clone)]
pub struct F64Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> std::fmt::Debug for F64Chain<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("F64Chain").finish_non_exhaustive()
    }
}

impl<A, B> F64Consumer for F64Chain<A, B>
where
    A: F64Consumer,
    B: F64Consumer,
{
    fn accept(&mut self, value: f64) -> Result<()> {
        self.first.accept(value)?;
        self.second.accept(value)
    }
}
