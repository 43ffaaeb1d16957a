//! Positions within a set.

use std::fmt::{self, Debug};
use std::ptr;
use super::node::{NodeId, Tree};

/// A position within a [`Set`](struct.Set.html): either an item or the end of the set.
///
/// A cursor can be moved in both directions. Moving forward from the maximum item, or backward
/// from the minimum item, reaches the end position; moving backward from the end reaches the
/// maximum item again.
///
/// Cursors borrow the set, so it cannot be modified while one is alive.
///
/// Two cursors are equal if they belong to the same set and refer to the same position. In
/// particular, end cursors of different sets are *not* equal.
///
/// # Examples
///
/// ```
/// let set: avl::Set<_> = (1..4).collect();
///
/// let mut cursor = set.cursor_front();
/// assert_eq!(cursor.get(), Some(&1));
///
/// cursor.move_next();
/// cursor.move_next();
/// assert_eq!(cursor.get(), Some(&3));
///
/// cursor.move_next();
/// assert!(cursor.is_end());
/// assert_eq!(cursor, set.cursor_end());
///
/// cursor.move_prev();
/// assert_eq!(cursor.get(), Some(&3));
/// ```
pub struct Cursor<'a, T: 'a> {
    tree: &'a Tree<T>,
    node: Option<NodeId>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, node: Option<NodeId>) -> Self { Cursor { tree, node } }

    /// Returns a reference to the item at the cursor, or `None` at the end position.
    pub fn get(&self) -> Option<&'a T> { self.node.map(|id| self.tree.value(id)) }

    /// Checks if the cursor is at the end position.
    pub fn is_end(&self) -> bool { self.node.is_none() }

    /// Moves the cursor to the next item in ascending order, or to the end position if the
    /// cursor is at the maximum item. Does nothing at the end position.
    pub fn move_next(&mut self) {
        if let Some(id) = self.node { self.node = self.tree.successor(id); }
    }

    /// Moves the cursor to the previous item in ascending order.
    ///
    /// From the end position this moves to the maximum item. From the minimum item this moves
    /// to the end position.
    ///
    /// Moving backward from the end of an empty set is a logic error: it panics in debug
    /// builds and leaves the cursor at the end position otherwise.
    pub fn move_prev(&mut self) {
        self.node = match self.node {
            Some(id) => self.tree.predecessor(id),
            None => {
                debug_assert!(self.tree.len() > 0, "moved backward from the end of an empty set");
                self.tree.last()
            }
        };
    }

    /// Returns a cursor at the next position, leaving this one in place.
    pub fn peek_next(&self) -> Cursor<'a, T> {
        let mut cursor = *self;
        cursor.move_next();
        cursor
    }

    /// Returns a cursor at the previous position, leaving this one in place.
    ///
    /// The same precondition as for `move_prev` applies.
    pub fn peek_prev(&self) -> Cursor<'a, T> {
        let mut cursor = *self;
        cursor.move_prev();
        cursor
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool { ptr::eq(self.tree, other.tree) && self.node == other.node }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T> Debug for Cursor<'a, T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(item) => write!(f, "Cursor({:?})", item),
            None => write!(f, "Cursor(end)"),
        }
    }
}
