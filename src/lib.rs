//! Group flat delimited path listings into an ordered tree.
//!
//! ```
//! use pathtree::{Node, build_tree};
//!
//! let mut observed = 0;
//! let root = build_tree(["dir1/file1", "dir1/file2", "dir2/file3"], "/", |_: &Node| {
//!     observed += 1
//! })
//! .unwrap();
//!
//! assert_eq!(root.children()[0].path(), "/dir1");
//! assert_eq!(root.children()[1].children()[0].name(), "file3");
//! assert_eq!(observed, 2 * root.node_count() + 1);
//! ```

pub mod tree;

pub use tree::{
    Delimiter, InvalidInputError, Node, NodeObserver, NoopObserver, TreeBuilder, build_tree,
    paths_to_tree,
};
