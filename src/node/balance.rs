//! Rotations and the AVL balance engine.

use log::trace;
use super::{Dir, Left, NodeId, Right, Tree};

impl<T> Tree<T> {
    /// Restores the AVL property at `id` if its balance factor has reached +2 or -2, returning
    /// the root of the subtree afterwards.
    ///
    /// Balance factors of every node the rotation moves are reassigned. The parent's factor is
    /// left alone: whether the subtree's height changed is for the caller to account for.
    ///
    /// # Panics
    ///
    /// Panics if a factor outside the range the algorithms can produce is encountered, which
    /// means the tree has been corrupted.
    pub(super) fn check_tree(&mut self, id: NodeId) -> NodeId {
        match self.nodes[id].factor {
            -1..=1 => id,
            2 => self.rebalance::<Left>(id),
            -2 => self.rebalance::<Right>(id),
            factor => panic!("balance factor {} at {:?} is out of range", factor, id),
        }
    }

    // `D` is the overweight side.
    fn rebalance<D: Dir>(&mut self, id: NodeId) -> NodeId {
        let heavy = match D::child(&self.nodes[id]) {
            Some(heavy) => heavy,
            None => panic!("{:?} is {} heavy without a {} child", id, D::NAME, D::NAME),
        };
        let heavy_factor = self.nodes[heavy].factor;

        trace!("rebalancing {:?} (factor {}, child factor {})",
               id, self.nodes[id].factor, heavy_factor);

        if heavy_factor == D::GROW {
            self.nodes[id].factor = 0;
            self.nodes[heavy].factor = 0;
            self.rotate::<D>(id)
        } else if heavy_factor == 0 {
            // only reachable while removing
            self.nodes[id].factor = D::GROW;
            self.nodes[heavy].factor = -D::GROW;
            self.rotate::<D>(id)
        } else if heavy_factor == -D::GROW {
            let inner = match D::Opposite::child(&self.nodes[heavy]) {
                Some(inner) => inner,
                None => panic!("{:?} leans {} without a {} child",
                               heavy, D::Opposite::NAME, D::Opposite::NAME),
            };

            let (factor, heavy_factor) = match self.nodes[inner].factor {
                f if f == D::GROW => (-D::GROW, 0),
                0 => (0, 0),
                f if f == -D::GROW => (0, D::GROW),
                f => panic!("balance factor {} at {:?} is out of range", f, inner),
            };

            self.nodes[id].factor = factor;
            self.nodes[heavy].factor = heavy_factor;
            self.nodes[inner].factor = 0;
            self.rotate_double::<D>(id)
        } else {
            panic!("balance factor {} at {:?} is out of range", heavy_factor, heavy)
        }
    }

    /// Single rotation promoting the `D` child of `id`: `LL` for `Left`, `RR` for `Right`.
    ///
    /// The child's inner subtree moves across to `id`. Only links change; balance factors are
    /// the engine's business.
    pub(super) fn rotate<D: Dir>(&mut self, id: NodeId) -> NodeId {
        trace!("{}{} rotation at {:?}", D::NAME, D::NAME, id);

        let child = match D::child(&self.nodes[id]) {
            Some(child) => child,
            None => panic!("{}{} rotation at {:?} without a {} child", D::NAME, D::NAME, id, D::NAME),
        };

        let parent = self.nodes[id].parent;
        self.relink(parent, id, Some(child));

        let inner = D::Opposite::child(&self.nodes[child]);
        *D::child_mut(&mut self.nodes[id]) = inner;
        if let Some(inner) = inner { self.nodes[inner].parent = Some(id); }

        *D::Opposite::child_mut(&mut self.nodes[child]) = Some(id);
        self.nodes[id].parent = Some(child);

        child
    }

    /// Double rotation: `LR` for `Left` (RR on the left child, then LL), `RL` for `Right`.
    pub(super) fn rotate_double<D: Dir>(&mut self, id: NodeId) -> NodeId {
        trace!("{}{} rotation at {:?}", D::NAME, D::Opposite::NAME, id);

        let child = match D::child(&self.nodes[id]) {
            Some(child) => child,
            None => panic!("{}{} rotation at {:?} without a {} child",
                           D::NAME, D::Opposite::NAME, id, D::NAME),
        };

        self.rotate::<D::Opposite>(child);
        self.rotate::<D>(id)
    }
}
