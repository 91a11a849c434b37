//! General reference-typed consumer contract
//!
//! The non-specialized sibling of the primitive consumer family: an operation
//! that accepts a single value of any type `T` and returns no result. The
//! value is passed by shared reference so a composed chain can hand the
//! identical value to both stages without cloning it between them.
//!
//! For `i32`/`i64`/`f64` inputs prefer the monomorphic specializations in
//! this crate, which take the value itself.

use crate::error::{ConsumerError, Result};

/// An operation that accepts a single value of type `T` and returns no
/// result, operating via side effects.
pub trait Consumer<T> {
    /// Perform this operation on the given value.
    ///
    /// Failures propagate to the caller unmodified.
    fn accept(&mut self, value: &T) -> Result<()>;

    /// Returns a composed consumer that performs, in sequence, this
    /// operation followed by the `after` operation, both on the identical
    /// value.
    ///
    /// Fails with [`ConsumerError::MissingAfter`] if `after` is `None`,
    /// before either consumer runs. If this operation fails when the chain
    /// is invoked, `after` never runs; if `after` fails, this operation's
    /// side effect has already taken place and is not undone.
    fn and_then<A>(self, after: Option<A>) -> Result<Chain<Self, A>>
    where
        Self: Sized,
        A: Consumer<T>,
    {
        let after = after.ok_or(ConsumerError::MissingAfter)?;
        Ok(Chain {
            first: self,
            second: after,
        })
    }
}

impl<T, F> Consumer<T> for F
where
    F: FnMut(&T) -> Result<()>,
{
    fn accept(&mut self, value: &T) -> Result<()> {
        self(value)
    }
}

/// Two consumers of the same value type sequenced into one
#[derive(Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> std::fmt::Debug for Chain<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain").finish_non_exhaustive()
    }
}

impl<T, A, B> Consumer<T> for Chain<A, B>
where
    A: Consumer<T>,
    B: Consumer<T>,
{
    fn accept(&mut self, value: &T) -> Result<()> {
        self.first.accept(value)?;
        self.second.accept(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_both_stages_see_the_same_value() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (l1, l2) = (Rc::clone(&log), Rc::clone(&log));

        let a = move |v: &String| -> Result<()> {
            l1.borrow_mut().push(format!("A:{}", v));
            Ok(())
        };
        let b = move |v: &String| -> Result<()> {
            l2.borrow_mut().push(format!("B:{}", v));
            Ok(())
        };

        let mut chain = a.and_then(Some(b)).unwrap();
        chain.accept(&"frame".to_string()).unwrap();

        assert_eq!(*log.borrow(), vec!["A:frame", "B:frame"]);
    }

    #[test]
    fn test_absent_after_fails_fast() {
        let a = |_: &u8| -> Result<()> { Ok(()) };
        let err = a.and_then(None::<fn(&u8) -> Result<()>>).unwrap_err();
        assert!(err.is_missing_after());
    }

    #[test]
    fn test_first_stage_failure_short_circuits() {
        let ran = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&ran);

        let a = |_: &u32| -> Result<()> { Err(ConsumerError::callback(anyhow::anyhow!("boom"))) };
        let b = move |_: &u32| -> Result<()> {
            *flag.borrow_mut() = true;
            Ok(())
        };

        let mut chain = a.and_then(Some(b)).unwrap();
        let err = chain.accept(&7).unwrap_err();

        assert_eq!(err.to_string(), "boom");
        assert!(!*ran.borrow());
    }

    #[test]
    fn test_second_stage_failure_keeps_first_effect() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let l1 = Rc::clone(&log);

        let a = move |v: &i8| -> Result<()> {
            l1.borrow_mut().push(*v);
            Ok(())
        };
        let b = |_: &i8| -> Result<()> { Err(ConsumerError::callback(anyhow::anyhow!("late"))) };

        let mut chain = a.and_then(Some(b)).unwrap();
        let err = chain.accept(&3).unwrap_err();

        assert_eq!(err.to_string(), "late");
        assert_eq!(*log.borrow(), vec![3]);
    }
}
