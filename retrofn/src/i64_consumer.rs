//! 64-bit signed integer consumer contract
//!
//! This is the primary specialization of the consumer family: an operation
//! that accepts a single `i64` and returns no result. Unlike most contracts,
//! a consumer is expected to operate via side effects - there is no return
//! value for callers to observe.
//!
//! The specialization is monomorphic on purpose: each primitive type gets its
//! own otherwise-identical contract so invocation never goes through an
//! indirection the caller did not write. Do not fold these into one trait
//! generic over the value type.

use crate::error::{ConsumerError, Result};

/// An operation that accepts a single `i64`-valued argument and returns no
/// result, operating via side effects.
///
/// Implement [`accept`](I64Consumer::accept) and composition via
/// [`and_then`](I64Consumer::and_then) comes for free. Closures of shape
/// `FnMut(i64) -> Result<()>` are consumers automatically.
///
/// The contract imposes no concurrency model and defines no cancellation:
/// both are properties of the side effects a concrete consumer chooses to
/// perform.
pub trait I64Consumer {
    /// Perform this operation on the given value.
    ///
    /// Any failure raised by the side effect propagates to the caller
    /// unmodified - this layer never catches or translates it.
    fn accept(&mut self, value: i64) -> Result<()>;

    /// Returns a composed consumer that performs, in sequence, this
    /// operation followed by the `after` operation, both applied to the
    /// identical input value.
    ///
    /// If this operation fails, `after` is not invoked at all and the
    /// failure propagates to the caller of the composed consumer. If this
    /// operation succeeds and `after` fails, that failure propagates after
    /// this operation's side effect has already taken place (it is not
    /// undone).
    ///
    /// Composing performs no side effect itself; effects happen later, when
    /// the returned chain is invoked.
    ///
    /// # Arguments
    /// * `after` - the operation to perform after this one
    ///
    /// # Returns
    /// * `Result<I64Chain<Self, A>>` - the composed consumer, or
    ///   [`ConsumerError::MissingAfter`] if `after` is `None` (checked
    ///   before either consumer runs)
    ///
    /// # Example
    /// ```
    /// use retrofn::I64Consumer;
    ///
    /// let mut total = 0i64;
    /// let report = |v: i64| -> retrofn::Result<()> {
    ///     println!("sample: {}", v);
    ///     Ok(())
    /// };
    /// let accumulate = |v: i64| -> retrofn::Result<()> {
    ///     total += v;
    ///     Ok(())
    /// };
    ///
    /// let mut chain = report.and_then(Some(accumulate)).unwrap();
    /// chain.accept(5).unwrap();
    /// chain.accept(7).unwrap();
    /// drop(chain);
    ///
    /// assert_eq!(total, 12);
    /// ```
    fn and_then<A>(self, after: Option<A>) -> Result<I64Chain<Self, A>>
    where
        Self: Sized,
        A: I64Consumer,
    {
        let after = after.ok_or(ConsumerError::MissingAfter)?;
        Ok(I64Chain {
            first: self,
            second: after,
        })
    }
}

/// Closures are consumers without further ceremony
impl<F> I64Consumer for F
where
    F: FnMut(i64) -> Result<()>,
{
    fn accept(&mut self, value: i64) -> Result<()> {
        self(value)
    }
}

/// Two `i64` consumers sequenced into one.
///
/// Owns both stages and holds no state of its own; each stage's behavior is
/// preserved exactly. A chain is itself a consumer, so chains nest and
/// composition is associative: `(a.b).c` and `a.(b.c)` produce the same
/// effects in the same order.
#[derive(Clone)]
pub struct I64Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> std::fmt::Debug for I64Chain<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I64Chain").finish_non_exhaustive()
    }
}

impl<A, B> I64Consumer for I64Chain<A, B>
where
    A: I64Consumer,
    B: I64Consumer,
{
    fn accept(&mut self, value: i64) -> Result<()> {
        // `?` is the short-circuit: a first-stage failure means the second
        // stage never runs
        self.first.accept(value)?;
        self.second.accept(value)
    }
}
