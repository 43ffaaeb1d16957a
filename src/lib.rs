//! An ordered set based on an AVL-balanced binary search tree.
//!
//! Nodes live in an index-stable arena and refer to their parent and children by handle, so
//! iteration steps through successors and predecessors without an auxiliary stack, and
//! cloning or dropping a set never recurses.
//!
//! # Examples
//!
//! ```
//! let mut set = avl::Set::new();
//!
//! for item in vec![5, 3, 8, 1, 4, 7, 9, 2, 6] {
//!     set.insert(item);
//! }
//!
//! assert!(set.remove(&5));
//! assert!(!set.contains(&5));
//! assert_eq!(set.iter().rev().next(), Some(&9));
//! assert_eq!(set.len(), 8);
//! ```

#![deny(missing_docs)]

mod cursor;
mod error;
mod less;
mod node;
pub mod set;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use cursor::Cursor;
pub use error::{Error, Result};
pub use less::LessThan;
pub use set::Set;
