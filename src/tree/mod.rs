//! Binary trees: traversals over heap-indexed arrays and the BST
//! operations, all running on the [`LogicTree`] arena.

pub mod bst;
pub mod logic;
pub mod traversal;

pub use bst::{Bound, Extreme};
pub use logic::{LogicTree, NodeIndex, Side, TreeNode};
pub use traversal::TraversalOrder;
