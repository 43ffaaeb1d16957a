//! Adapting a less-than predicate into a three-way comparator.

use compare::Compare;
use std::cmp::Ordering::{self, Equal, Greater, Less};

/// A comparator built from a "less than" predicate.
///
/// Each comparison calls the predicate at most twice: `less(l, r)` yields `Less`, otherwise
/// `less(r, l)` yields `Greater`, otherwise the items are equivalent.
///
/// The predicate must be a strict weak ordering. If it is not, sets ordered by it end up with
/// an unspecified (but memory-safe) shape.
///
/// # Examples
///
/// ```
/// use avl::LessThan;
/// use compare::Compare;
/// use std::cmp::Ordering::*;
///
/// let by_len = LessThan::new(|l: &&str, r: &&str| l.len() < r.len());
/// assert_eq!(by_len.compare(&"a", &"bc"), Less);
/// assert_eq!(by_len.compare(&"bc", &"a"), Greater);
/// assert_eq!(by_len.compare(&"ab", &"cd"), Equal);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LessThan<F>(F);

impl<F> LessThan<F> {
    /// Wraps the given predicate.
    pub fn new(less: F) -> Self { LessThan(less) }

    /// Returns the wrapped predicate.
    pub fn into_inner(self) -> F { self.0 }
}

impl<T: ?Sized, F> Compare<T> for LessThan<F> where F: Fn(&T, &T) -> bool {
    fn compare(&self, l: &T, r: &T) -> Ordering {
        if (self.0)(l, r) {
            Less
        } else if (self.0)(r, l) {
            Greater
        } else {
            Equal
        }
    }
}

#[cfg(test)]
mod test {
    use compare::Compare;
    use std::cell::Cell;
    use std::cmp::Ordering::*;
    use super::LessThan;

    #[test]
    fn calls_the_predicate_at_most_twice() {
        let calls = Cell::new(0);
        let cmp = LessThan::new(|l: &i32, r: &i32| { calls.set(calls.get() + 1); l < r });

        assert_eq!(cmp.compare(&1, &2), Less);
        assert_eq!(calls.get(), 1);

        calls.set(0);
        assert_eq!(cmp.compare(&2, &1), Greater);
        assert_eq!(calls.get(), 2);

        calls.set(0);
        assert_eq!(cmp.compare(&2, &2), Equal);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn incomparable_items_are_equal() {
        let cmp = LessThan::new(|l: &(u8, char), r: &(u8, char)| l.0 < r.0);
        assert_eq!(cmp.compare(&(1, 'a'), &(1, 'b')), Equal);
        assert!(cmp.compares_lt(&(0, 'z'), &(1, 'a')));
    }
}
