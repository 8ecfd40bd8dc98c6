//! An ordered collection of elements implemented with an AVL tree.
//!
//! [`BalancedTree`] keeps its elements sorted by their [`Ord`] ordering and
//! rebalances itself on every insert and remove, so search, insertion and
//! removal all stay logarithmic. Equal elements are permitted and keep
//! their insertion order. The elements can be visited in preorder, inorder,
//! postorder or level-order, either through a lazy iterator or rendered to
//! a string.
//!
//! ```
//! use balanced_tree::{BalancedTree, Traversal};
//!
//! let tree: BalancedTree<i32> = [10, 20, 30].into_iter().collect();
//! assert_eq!(tree.min(), Some(&10));
//! assert_eq!(tree.max(), Some(&30));
//! assert_eq!(tree.display(Traversal::LevelOrder).to_string(), "20 10 30");
//! ```
//!
//! The tree is not internally synchronized. It is `Send`/`Sync` when the
//! element type is, and the usual Rust aliasing rules apply: mutating it
//! from several threads requires external synchronization, for example a
//! `Mutex`, exactly as with the std collections.

mod tree;

pub use tree::iter::{Display, IntoIter, Iter, Traversal, Traverse};
pub use tree::BalancedTree;
