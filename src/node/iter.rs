use std::vec;
use super::{NodeId, Tree};

/// Walks the tree in order by successor/predecessor steps, without an auxiliary stack.
pub struct Iter<'a, T: 'a> {
    tree: &'a Tree<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    size: usize,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(tree: &'a Tree<T>) -> Iter<'a, T> {
        Iter { tree, front: tree.first(), back: tree.last(), size: tree.len() }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter { ..*self } }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.size == 0 { return None; }

        let id = self.front?;
        self.size -= 1;
        self.front = self.tree.successor(id);
        Some(self.tree.value(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.size == 0 { return None; }

        let id = self.back?;
        self.size -= 1;
        self.back = self.tree.predecessor(id);
        Some(self.tree.value(id))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// Yields the values of a consumed tree in order.
#[derive(Clone)]
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> IntoIter<T> {
    pub fn new(tree: Tree<T>) -> IntoIter<T> { IntoIter(tree.into_sorted_values().into_iter()) }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
