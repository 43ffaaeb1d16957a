//! Index-stable node storage.
//!
//! Vacant slots form an intrusive free list, so freeing a node never allocates and handles of
//! live nodes stay valid across unrelated insertions and removals.

use std::collections::TryReserveError;
use std::ops::{Index, IndexMut};
use super::Node;

/// A handle to a node slot in an `Arena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize { self.0 }
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

#[derive(Clone)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self { Arena { slots: Vec::new(), free: None, len: 0 } }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize { self.len }

    /// Ensures that the next `alloc` will not need to grow the backing storage.
    pub fn try_reserve(&mut self) -> Result<(), TryReserveError> {
        if self.free.is_some() { Ok(()) } else { self.slots.try_reserve(1) }
    }

    pub fn alloc(&mut self, node: Node<T>) -> NodeId {
        self.len += 1;

        match self.free {
            Some(index) => {
                self.free = match self.slots[index] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                self.slots[index] = Slot::Occupied(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Frees the given slot and returns the node it held.
    pub fn free(&mut self, id: NodeId) -> Node<T> {
        let slot = std::mem::replace(&mut self.slots[id.0], Slot::Vacant { next_free: self.free });

        match slot {
            Slot::Occupied(node) => {
                self.free = Some(id.0);
                self.len -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("double free of node slot {}", id.0),
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    /// Consumes the arena, returning the payload of every slot in index order.
    pub fn into_values(self) -> Vec<Option<T>> {
        self.slots.into_iter().map(|slot| match slot {
            Slot::Occupied(node) => Some(node.value),
            Slot::Vacant { .. } => None,
        }).collect()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        match self.slots[id.0] {
            Slot::Occupied(ref node) => node,
            Slot::Vacant { .. } => panic!("access to vacant node slot {}", id.0),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots[id.0] {
            Slot::Occupied(ref mut node) => node,
            Slot::Vacant { .. } => panic!("access to vacant node slot {}", id.0),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Arena;
    use super::super::Node;

    #[test]
    fn reuses_freed_slots() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::new(1, None));
        let b = arena.alloc(Node::new(2, None));
        assert_eq!(arena.len(), 2);

        assert_eq!(arena.free(a).value, 1);
        assert_eq!(arena.len(), 1);

        let c = arena.alloc(Node::new(3, None));
        assert_eq!(c, a);
        assert_eq!(arena[b].value, 2);
        assert_eq!(arena[c].value, 3);
    }

    #[test]
    fn reserve_is_a_no_op_with_free_slots() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::new((), None));
        arena.free(a);
        assert!(arena.try_reserve().is_ok());
    }

    #[test]
    #[should_panic]
    fn vacant_access_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::new(0u8, None));
        arena.free(a);
        assert_eq!(arena[a].value, 0);
    }

    #[test]
    fn into_values_skips_vacant_slots() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::new('a', None));
        arena.alloc(Node::new('b', None));
        arena.free(a);
        assert_eq!(arena.into_values(), [None, Some('b')]);
    }
}
