//! Path tree construction.
//!
//! Turns a flat list of delimited paths into a tree of [`Node`]s, grouping
//! paths that share a leading segment under a common parent. Siblings are
//! ordered by name, independent of input order.

mod builder;
mod delimiter;
mod node;
mod observer;

pub use builder::{TreeBuilder, build_tree, paths_to_tree};
pub use delimiter::{DEFAULT_DELIMITER, Delimiter, InvalidInputError};
pub use node::{DepthFirst, Node};
pub use observer::{NodeObserver, NoopObserver};
