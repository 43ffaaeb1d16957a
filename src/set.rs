//! An ordered set based on an AVL tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use super::{Cursor, LessThan, Result};
use super::node::{self, Tree};

/// An ordered set based on an AVL-balanced binary search tree.
///
/// Insertion, lookup and removal take `O(log n)` comparisons in the worst case: the tree's
/// height never exceeds `⌈1.44 log₂(n + 2)⌉ - 1`.
///
/// The set is ordered by a comparator of type `C`, which must be a strict weak ordering. Items
/// that compare equal are considered the same item, so the set never holds two of them.
///
/// The behavior of this set is undefined if an item's ordering relative to any other item changes
/// while the item is in the set. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct Set<T, C = Natural<T>> where C: Compare<T> {
    tree: Tree<T>,
    cmp: C,
}

impl<T> Set<T> where T: Ord {
    /// Creates an empty set ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Set::with_cmp(compare::natural()) }
}

impl<T, C> Set<T, C> where C: Compare<T> {
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut set = avl::Set::with_cmp(natural().rev());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Set { tree: Tree::new(), cmp } }

    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.tree.root().is_none() }

    /// Returns the number of items in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(2);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns the height of the underlying tree, counted in nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.height(), 0);
    ///
    /// set.extend(0..7);
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize { self.tree.height() }

    /// Returns a reference to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let set = avl::Set::new();
    /// assert!(set.cmp().compares_lt(&1, &2));
    ///
    /// let set: avl::Set<_, _> = avl::Set::with_cmp(natural().rev());
    /// assert!(set.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all items from the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(set.iter().next(), Some(&1));
    ///
    /// set.clear();
    ///
    /// assert_eq!(set.len(), 0);
    /// assert_eq!(set.iter().next(), None);
    /// ```
    pub fn clear(&mut self) { self.tree.clear(); }

    /// Inserts an item into the set, returning `true` if the set did not already contain the item.
    ///
    /// If the set already contains an equal item, the set is left untouched and the given item
    /// is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert!(!set.contains(&1));
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, item: T) -> bool { self.tree.insert(&self.cmp, item) }

    /// Inserts an item into the set, reporting allocation failure instead of aborting.
    ///
    /// Storage for the new node is reserved before the tree is touched, so on error the set is
    /// exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.try_insert(1).ok(), Some(true));
    /// assert_eq!(set.try_insert(1).ok(), Some(false));
    /// ```
    pub fn try_insert(&mut self, item: T) -> Result<bool> {
        self.tree.try_reserve()?;
        Ok(self.insert(item))
    }

    /// Removes the given item from the set, returning `true` if the set contained the item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(&1));
    /// assert!(set.remove(&1));
    ///
    /// assert_eq!(set.len(), 2);
    /// assert!(!set.contains(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> bool where C: Compare<Q, T> {
        self.take(item).is_some()
    }

    /// Removes the given item from the set and returns it, or `None` if the set did not contain
    /// the item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::with_less(|l: &(u8, char), r: &(u8, char)| l.0 < r.0);
    /// set.insert((1, 'a'));
    ///
    /// assert_eq!(set.take(&(1, 'z')), Some((1, 'a')));
    /// assert_eq!(set.take(&(1, 'a')), None);
    /// ```
    pub fn take<Q: ?Sized>(&mut self, item: &Q) -> Option<T> where C: Compare<Q, T> {
        self.tree.remove(&self.cmp, item)
    }

    /// Checks if the set contains the given item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert!(!set.contains(&1));
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.tree.find(&self.cmp, item).is_some()
    }

    /// Returns a reference to the set's item that is equal to the given one, or `None` if the
    /// set contains no such item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::with_less(|l: &(u8, char), r: &(u8, char)| l.0 < r.0);
    /// set.insert((1, 'a'));
    ///
    /// assert_eq!(set.get(&(1, 'z')), Some(&(1, 'a')));
    /// assert_eq!(set.get(&(2, 'a')), None);
    /// ```
    pub fn get<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.tree.find(&self.cmp, item).map(|id| self.tree.value(id))
    }

    /// Returns a reference to the set's maximum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.last(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    pub fn last(&self) -> Option<&T> { self.tree.last().map(|id| self.tree.value(id)) }

    /// Removes and returns the set's maximum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.pop_last(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.pop_last(), Some(3));
    /// ```
    pub fn pop_last(&mut self) -> Option<T> { self.tree.remove_last() }

    /// Returns a reference to the set's minimum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.first(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> { self.tree.first().map(|id| self.tree.value(id)) }

    /// Removes and returns the set's minimum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.pop_first(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.pop_first(), Some(1));
    /// ```
    pub fn pop_first(&mut self) -> Option<T> { self.tree.remove_first() }

    /// Returns an iterator over the set.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator.
    /// Reverse it for descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// assert_eq!(set.iter().rev().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn iter(&self) -> Iter<T> { Iter(node::Iter::new(&self.tree)) }

    /// Returns a cursor at the set's minimum item, or at the end position if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert!(set.cursor_front().is_end());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.cursor_front().get(), Some(&1));
    /// ```
    pub fn cursor_front(&self) -> Cursor<T> { Cursor::new(&self.tree, self.tree.first()) }

    /// Returns a cursor at the set's maximum item, or at the end position if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert!(set.cursor_back().is_end());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.cursor_back().get(), Some(&2));
    /// ```
    pub fn cursor_back(&self) -> Cursor<T> { Cursor::new(&self.tree, self.tree.last()) }

    /// Returns a cursor at the set's end position.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: avl::Set<_> = (1..4).collect();
    ///
    /// let mut cursor = set.cursor_end();
    /// assert_eq!(cursor.get(), None);
    ///
    /// cursor.move_prev();
    /// assert_eq!(cursor.get(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<T> { Cursor::new(&self.tree, None) }

    /// Returns a cursor at the set's item that is equal to the given one, or at the end position
    /// if the set contains no such item.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: avl::Set<_> = (1..4).collect();
    ///
    /// let mut cursor = set.cursor_at(&2);
    /// cursor.move_next();
    /// assert_eq!(cursor.get(), Some(&3));
    ///
    /// assert_eq!(set.cursor_at(&5), set.cursor_end());
    /// ```
    pub fn cursor_at<Q: ?Sized>(&self, item: &Q) -> Cursor<T> where C: Compare<Q, T> {
        Cursor::new(&self.tree, self.tree.find(&self.cmp, item))
    }
}

impl<T, F> Set<T, LessThan<F>> where F: Fn(&T, &T) -> bool {
    /// Creates an empty set ordered according to the given "less than" predicate, which must be
    /// a strict weak ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::with_less(|l: &i32, r: &i32| l.abs() < r.abs());
    ///
    /// set.insert(-2);
    /// set.insert(1);
    /// assert!(!set.insert(2));
    ///
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [&1, &-2]);
    /// ```
    pub fn with_less(less: F) -> Self { Set::with_cmp(LessThan::new(less)) }
}

impl<T, C> Debug for Set<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Default for Set<T, C> where C: Compare<T> + Default {
    fn default() -> Self { Set::with_cmp(C::default()) }
}

impl<T, C> Extend<T> for Set<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<T, C> iter::FromIterator<T> for Set<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut set = Set::default();
        set.extend(it);
        set
    }
}

impl<T, C> Hash for Set<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        self.len().hash(h);
        for item in self.iter() { item.hash(h); }
    }
}

impl<'a, T, C> IntoIterator for &'a Set<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for Set<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns an iterator that consumes the set.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.into_iter();
    /// assert_eq!(it.next(), Some(1));
    /// assert_eq!(it.next(), Some(2));
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(self) -> IntoIter<T> { IntoIter(node::IntoIter::new(self.tree)) }
}

impl<T, C> PartialEq for Set<T, C> where C: Compare<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() &&
            self.iter().zip(other.iter()).all(|(l, r)| self.cmp.compares_eq(l, r))
    }
}

impl<T, C> Eq for Set<T, C> where C: Compare<T> {}

impl<T, C> PartialOrd for Set<T, C> where C: Compare<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(Ord::cmp(self, other)) }
}

impl<T, C> Ord for Set<T, C> where C: Compare<T> {
    /// Compares the sets lexicographically, using the comparator of `self`.
    fn cmp(&self, other: &Self) -> Ordering {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(l), Some(r)) => match self.cmp.compare(l, r) {
                    Ordering::Equal => {}
                    order => return order,
                },
            }
        }
    }
}

/// An iterator that consumes the set.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// # Examples
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut set = avl::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for item in set {
///     println!("{:?}", item);
/// }
/// ```
#[derive(Clone)]
pub struct IntoIter<T>(node::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator over the set.
///
/// The iterator yields the items in ascending order according to the set's comparator. It is
/// double-ended, so `rev` yields them in descending order.
///
/// # Examples
///
/// Acquire through [`Set::iter`](struct.Set.html#method.iter) or the `IntoIterator` trait:
///
/// ```
/// let mut set = avl::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for item in &set {
///     println!("{:?}", item);
/// }
/// ```
pub struct Iter<'a, T: 'a>(node::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

#[cfg(test)]
mod test {
    use compare::{Compare, natural};
    use rand::SeedableRng;
    use rand::seq::SliceRandom;
    use rand_chacha::ChaCha8Rng;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::mem;
    use super::Set;

    fn init_logger() { let _ = env_logger::builder().is_test(true).try_init(); }

    fn hash<T: Hash>(t: &T) -> u64 {
        let mut h = DefaultHasher::new();
        t.hash(&mut h);
        h.finish()
    }

    #[test]
    fn iterates_both_ways() {
        init_logger();

        let mut values: Vec<u32> = (1..101).collect();
        values.shuffle(&mut ChaCha8Rng::seed_from_u64(100));
        let set: Set<_> = values.into_iter().collect();

        assert_eq!(set.iter().cloned().collect::<Vec<_>>(), (1..101).collect::<Vec<_>>());
        assert_eq!(set.iter().rev().cloned().collect::<Vec<_>>(),
                   (1..101).rev().collect::<Vec<_>>());

        let mut it = set.iter();
        assert_eq!(it.len(), 100);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&100));
        assert_eq!(it.len(), 98);
        assert_eq!(it.by_ref().count(), 98);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn iterators_meet_in_the_middle() {
        let set: Set<_> = (0..5).collect();
        let mut it = set.iter();

        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn into_iter_both_ways() {
        let set: Set<_> = vec![3, 1, 2].into_iter().collect();
        let mut it = set.into_iter();

        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn clones_are_independent() {
        let mut a: Set<_> = (0..20).collect();
        let mut b = a.clone();

        a.insert(20);
        a.remove(&0);
        assert_eq!(b.iter().cloned().collect::<Vec<_>>(), (0..20).collect::<Vec<_>>());

        b.remove(&10);
        b.insert(-1);
        assert_eq!(a.iter().cloned().collect::<Vec<_>>(), (1..21).collect::<Vec<_>>());
        assert_eq!(b.len(), 20);
        assert!(!b.contains(&10));
        assert!(a.contains(&10));
    }

    #[test]
    fn clone_preserves_shape() {
        let set: Set<_> = (0..100).collect();
        let copy = set.clone();

        assert_eq!(copy, set);
        assert_eq!(copy.height(), set.height());
        assert_eq!(copy.len(), set.len());
    }

    #[test]
    fn take_resets_the_source() {
        let mut a: Set<_> = (0..10).collect();
        let b = mem::take(&mut a);

        assert!(a.is_empty());
        assert_eq!(a.iter().next(), None);
        assert_eq!(b.len(), 10);

        a.insert(3);
        assert_eq!(a.len(), 1);
        assert!(!b.contains(&10));
    }

    #[test]
    fn clear_then_reuse() {
        let mut set: Set<_> = (0..1000).collect();
        set.clear();

        assert!(set.is_empty());
        assert_eq!(set.height(), 0);
        assert_eq!(set.first(), None);

        set.extend(vec![2, 1]);
        assert_eq!(set.iter().collect::<Vec<_>>(), [&1, &2]);
    }

    #[test]
    fn with_less_rejects_equivalent_items() {
        let mut set = Set::with_less(|l: &(u8, char), r: &(u8, char)| l.0 < r.0);

        assert!(set.insert((1, 'a')));
        assert!(!set.insert((1, 'b')));
        assert!(set.insert((0, 'z')));

        assert_eq!(set.get(&(1, 'c')), Some(&(1, 'a')));
        assert_eq!(set.iter().map(|e| e.1).collect::<String>(), "za");
    }

    #[test]
    fn reverse_order() {
        let mut set = Set::with_cmp(natural().rev());
        set.extend(vec![1, 3, 2]);

        assert_eq!(set.first(), Some(&3));
        assert_eq!(set.last(), Some(&1));
        assert!(set.cmp().compares_gt(&1, &2));
    }

    #[test]
    fn first_last_and_pops() {
        let mut set: Set<_> = (1..6).collect();

        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&5));
        assert_eq!(set.pop_first(), Some(1));
        assert_eq!(set.pop_last(), Some(5));
        assert_eq!(set.iter().collect::<Vec<_>>(), [&2, &3, &4]);

        let other: Set<_> = (0..2).collect();
        assert_eq!(Ord::max(set.clone(), other.clone()).first(), Some(&2));
        assert_eq!(Ord::min(set, other).last(), Some(&1));
    }

    #[test]
    fn equality_order_and_hash() {
        let a: Set<_> = vec![1, 2, 3].into_iter().collect();
        let b: Set<_> = vec![3, 2, 1].into_iter().collect();
        let c: Set<_> = vec![1, 2, 4].into_iter().collect();
        let d: Set<_> = vec![1, 2].into_iter().collect();

        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
        assert!(a != c);
        assert!(a < c);
        assert!(d < a);
        assert!(Set::<i32>::new() < d);
    }

    #[test]
    fn debug_format() {
        let set: Set<_> = vec![2, 1, 3].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{1, 2, 3}");
        assert_eq!(format!("{:?}", Set::<u8>::new()), "{}");
    }

    #[test]
    fn try_insert_agrees_with_insert() {
        let mut set = Set::new();

        for &item in &[5, 3, 8, 3, 5, 1] {
            let expected = !set.contains(&item);
            assert_eq!(set.try_insert(item).ok(), Some(expected));
        }

        assert_eq!(set.iter().collect::<Vec<_>>(), [&1, &3, &5, &8]);
    }

    #[test]
    fn lookups_by_reference() {
        let set: Set<String> = vec!["b", "a", "c"].into_iter().map(String::from).collect();
        let b = String::from("b");

        assert!(set.contains(&b));
        assert!(!set.contains(&String::from("d")));
        assert_eq!(set.get(&b), Some(&b));
        assert_eq!(set.cursor_at(&b).peek_next().get().map(String::as_str), Some("c"));
    }
}
