mod arena;
mod balance;
mod iter;


use compare::Compare;
use log::{debug, trace};
use std::cmp::Ordering::*;
use std::collections::TryReserveError;
use self::arena::Arena;

pub use self::arena::NodeId;
pub use self::iter::{IntoIter, Iter};

#[derive(Clone)]
pub struct Node<T> {
    value: T,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
    // height(left) - height(right)
    factor: i8,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeId>) -> Self {
        Node { value, parent, left: None, right: None, factor: 0 }
    }
}

/// The AVL tree proper: an arena of nodes linked by handles, plus the root handle.
///
/// All algorithms that need an ordering take the comparator as an argument, so the same tree
/// can be driven by any `Compare` implementation the owning container holds.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Arena<T>,
    root: Option<NodeId>,
}

impl<T> Tree<T> {
    pub fn new() -> Self { Tree { nodes: Arena::new(), root: None } }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn root(&self) -> Option<NodeId> { self.root }

    pub fn value(&self, id: NodeId) -> &T { &self.nodes[id].value }

    pub fn try_reserve(&mut self) -> Result<(), TryReserveError> { self.nodes.try_reserve() }

    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.len());
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// Follows the taller child at every level, so this relies on the balance factors being
    /// exact.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut link = self.root;

        while let Some(id) = link {
            let node = &self.nodes[id];
            height += 1;
            link = if node.factor > 0 { node.left } else { node.right };
        }

        height
    }

    pub fn first(&self) -> Option<NodeId> { self.root.map(|root| self.extremum::<Left>(root)) }

    pub fn last(&self) -> Option<NodeId> { self.root.map(|root| self.extremum::<Right>(root)) }

    pub fn successor(&self, id: NodeId) -> Option<NodeId> { self.step::<Right>(id) }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> { self.step::<Left>(id) }

    fn extremum<D: Dir>(&self, mut id: NodeId) -> NodeId {
        while let Some(child) = D::child(&self.nodes[id]) { id = child; }
        id
    }

    // Moves one position in direction `D` using parent links only.
    fn step<D: Dir>(&self, id: NodeId) -> Option<NodeId> {
        if let Some(child) = D::child(&self.nodes[id]) {
            return Some(self.extremum::<D::Opposite>(child));
        }

        let mut current = id;

        while let Some(parent) = self.nodes[current].parent {
            if D::child(&self.nodes[parent]) != Some(current) { return Some(parent); }
            current = parent;
        }

        None
    }

    pub fn find<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Option<NodeId> where C: Compare<Q, T> {
        let mut link = self.root;

        while let Some(id) = link {
            let node = &self.nodes[id];

            link = match cmp.compare(key, &node.value) {
                Equal => return Some(id),
                Less => node.left,
                Greater => node.right,
            };
        }

        None
    }

    /// Inserts the value, returning `false` (and dropping the value) if an equal one is
    /// already present.
    pub fn insert<C>(&mut self, cmp: &C, value: T) -> bool where C: Compare<T> {
        match self.root {
            None => {
                self.root = Some(self.nodes.alloc(Node::new(value, None)));
                true
            }
            Some(root) => match self.insert_under(root, cmp, value) {
                Err(_) => false,
                Ok(_) => {
                    self.root = Some(self.check_tree(root));
                    true
                }
            },
        }
    }

    // Returns whether the subtree rooted at `id` grew by one level. The subtree itself is not
    // rebalanced here; that is left to the caller so it can tell whether a rotation absorbed
    // the growth.
    fn insert_under<C>(&mut self, id: NodeId, cmp: &C, value: T) -> Result<bool, T>
        where C: Compare<T> {

        match cmp.compare(&value, &self.nodes[id].value) {
            Equal => Err(value),
            Less => self.insert_side::<Left, C>(id, cmp, value),
            Greater => self.insert_side::<Right, C>(id, cmp, value),
        }
    }

    fn insert_side<D: Dir, C>(&mut self, id: NodeId, cmp: &C, value: T) -> Result<bool, T>
        where C: Compare<T> {

        match D::child(&self.nodes[id]) {
            None => {
                let child = self.nodes.alloc(Node::new(value, Some(id)));
                *D::child_mut(&mut self.nodes[id]) = Some(child);
            }
            Some(child) => {
                if !self.insert_under(child, cmp, value)? { return Ok(false); }
                // a rotation after an insertion restores the subtree's previous height
                if self.check_tree(child) != child { return Ok(false); }
            }
        }

        let node = &mut self.nodes[id];
        node.factor += D::GROW;
        Ok(node.factor != 0)
    }

    pub fn remove<C, Q: ?Sized>(&mut self, cmp: &C, key: &Q) -> Option<T>
        where C: Compare<Q, T> {

        self.find(cmp, key).map(|id| self.remove_node(id))
    }

    /// Unlinks the given node, rebalances every ancestor and returns the node's value.
    pub fn remove_node(&mut self, id: NodeId) -> T {
        let node = &self.nodes[id];

        if let (Some(left), Some(_)) = (node.left, node.right) {
            let pred = self.extremum::<Right>(left);
            self.swap_positions(id, pred);
        }

        let node = &self.nodes[id];
        debug_assert!(node.left.is_none() || node.right.is_none());
        let child = node.left.or(node.right);
        let parent = node.parent;
        let from_left = parent.map_or(false, |p| self.nodes[p].left == Some(id));

        self.relink(parent, id, child);
        let value = self.nodes.free(id).value;

        if let Some(parent) = parent {
            self.nodes[parent].factor -= if from_left { Left::GROW } else { Right::GROW };
            self.rebalance_upward(parent);
        }

        value
    }

    pub fn remove_first(&mut self) -> Option<T> { self.first().map(|id| self.remove_node(id)) }

    pub fn remove_last(&mut self) -> Option<T> { self.last().map(|id| self.remove_node(id)) }

    // Runs the balance engine on `id` and every ancestor above it. `id` has already had its
    // factor adjusted for a subtree that lost one level.
    fn rebalance_upward(&mut self, mut id: NodeId) {
        let mut shrinking = true;

        loop {
            let node = &self.nodes[id];
            let factor = node.factor;
            let heavy = match factor {
                2 => node.left,
                -2 => node.right,
                _ => None,
            };
            let heavy_factor = heavy.map(|heavy| self.nodes[heavy].factor);

            let top = self.check_tree(id);

            if shrinking {
                shrinking = match heavy_factor {
                    Some(heavy_factor) => heavy_factor != 0,
                    None => factor == 0,
                };
            }

            let parent = match self.nodes[top].parent {
                None => break,
                Some(parent) => parent,
            };

            if shrinking {
                let parent_node = &mut self.nodes[parent];
                parent_node.factor -=
                    if parent_node.left == Some(top) { Left::GROW } else { Right::GROW };
            }

            id = parent;
        }
    }

    // Points `parent`'s link to `old` (or the root, if there is no parent) at `new`.
    fn relink(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.nodes[parent];

                if node.left == Some(old) {
                    node.left = new;
                } else {
                    debug_assert_eq!(node.right, Some(old));
                    node.right = new;
                }
            }
        }

        if let Some(new) = new { self.nodes[new].parent = parent; }
    }

    // Exchanges the tree positions of two nodes: links and balance factors move, values stay
    // in their slots.
    fn swap_positions(&mut self, a: NodeId, b: NodeId) {
        trace!("swapping positions of {:?} and {:?}", a, b);

        let other = |id: Option<NodeId>| id.map(|id| if id == a { b } else if id == b { a } else { id });

        let (pa, la, ra, fa) = {
            let node = &self.nodes[a];
            (node.parent, node.left, node.right, node.factor)
        };
        let (pb, lb, rb, fb) = {
            let node = &self.nodes[b];
            (node.parent, node.left, node.right, node.factor)
        };

        let a_is_left = pa.map(|p| self.nodes[p].left == Some(a));
        let b_is_left = pb.map(|p| self.nodes[p].left == Some(b));

        for &(id, parent, is_left, replacement) in
            &[(a, pa, a_is_left, b), (b, pb, b_is_left, a)] {

            match (parent, is_left) {
                (Some(parent), _) if parent == a || parent == b => {}
                (Some(parent), Some(true)) => self.nodes[parent].left = Some(replacement),
                (Some(parent), _) => self.nodes[parent].right = Some(replacement),
                (None, _) => {
                    debug_assert_eq!(self.root, Some(id));
                    self.root = Some(replacement);
                }
            }
        }

        for &(children, new_parent) in &[([la, ra], b), ([lb, rb], a)] {
            for child in children.iter().flatten() {
                if *child != a && *child != b { self.nodes[*child].parent = Some(new_parent); }
            }
        }

        let node = &mut self.nodes[a];
        node.parent = other(pb);
        node.left = other(lb);
        node.right = other(rb);
        node.factor = fb;

        let node = &mut self.nodes[b];
        node.parent = other(pa);
        node.left = other(la);
        node.right = other(ra);
        node.factor = fa;
    }

    /// Consumes the tree, returning its values in ascending order.
    pub fn into_sorted_values(self) -> Vec<T> {
        let mut order = Vec::with_capacity(self.len());
        let mut link = self.first();

        while let Some(id) = link {
            order.push(id);
            link = self.successor(id);
        }

        let mut values = self.nodes.into_values();
        order.into_iter().filter_map(|id| values[id.index()].take()).collect()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self { Tree::new() }
}

/// One side of a node, for code that is written once and mirrored.
pub trait Dir {
    type Opposite: Dir<Opposite = Self>;

    /// Name of the side, used in rotation names (`LL`, `LR`, ...).
    const NAME: char;

    /// Change in the balance factor when the subtree on this side grows by one level.
    const GROW: i8;

    fn child<T>(node: &Node<T>) -> Option<NodeId>;
    fn child_mut<T>(node: &mut Node<T>) -> &mut Option<NodeId>;
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    const NAME: char = 'L';
    const GROW: i8 = 1;

    fn child<T>(node: &Node<T>) -> Option<NodeId> { node.left }
    fn child_mut<T>(node: &mut Node<T>) -> &mut Option<NodeId> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    const NAME: char = 'R';
    const GROW: i8 = -1;

    fn child<T>(node: &Node<T>) -> Option<NodeId> { node.right }
    fn child_mut<T>(node: &mut Node<T>) -> &mut Option<NodeId> { &mut node.right }
}
