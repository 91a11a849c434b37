//! 32-bit signed integer consumer contract
//!
//! Identical to [`crate::i64_consumer`] with the value type varied; see that
//! module for the full contract documentation. Kept monomorphic per type by
//! design.

use crate::error::{ConsumerError, Result};

/// An operation that accepts a single `i32`-valued argument and returns no
/// result, operating via side effects.
pub trait I32Consumer {
    /// Perform this operation on the given value.
    fn accept(&mut self, value: i32) -> Result<()>;

    /// Returns a composed consumer running this operation, then `after`,
    /// on the identical input value. Fails with
    /// [`ConsumerError::MissingAfter`] if `after` is `None`, before either
    /// consumer runs. A first-stage failure means `after` never runs.
    fn and_then<A>(self, after: Option<A>) -> Result<I32Chain<Self, A>>
    where
        Self: Sized,
        A: I32Consumer,
    {
        let after = after.ok_or(ConsumerError::MissingAfter)?;
        Ok(I32Chain {
            first: self,
            second: after,
        })
    }
}

impl<F> I32Consumer for F
where
    F: FnMut(i32) -> Result<()>,
{
    fn accept(&mut self, value: i32) -> Result<()> {
        self(value)
    }
}

/// Two `i32` consumers sequenced into one
#[derive(Clone)]
pub struct I32Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> std::fmt::Debug for I32Chain<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I32Chain").finish_non_exhaustive()
    }
}

impl<A, B> I32Consumer for I32Chain<A, B>
where
    A: I32Consumer,
    B: I32Consumer,
{
    fn accept(&mut self, value: i32) -> Result<()> {
        self.first.accept(value)?;
        self.second.accept(value)
    }
}
