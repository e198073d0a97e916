use pathtree::{Node, NodeObserver};
use tracing::trace;

/// Tracks which nodes are still being built while the tree is assembled.
///
/// A node is open between its first and second observation; the root is
/// only ever observed once and never opens.
#[derive(Debug, Default)]
pub struct BuildProgress {
    open: Vec<String>,
    completed: usize,
    leaves: usize,
    max_depth: usize,
}

impl BuildProgress {
    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn leaves(&self) -> usize {
        self.leaves
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl NodeObserver for BuildProgress {
    fn observe(&mut self, node: &Node) {
        if node.is_root() {
            trace!("Started building tree");
            return;
        }

        if self.open.last().map(String::as_str) == Some(node.path()) {
            self.open.pop();
            self.completed += 1;
            if node.is_leaf() {
                self.leaves += 1;
            }
            trace!("Finished '{}' ({} open)", node.path(), self.open.len());
        } else {
            self.open.push(node.path().to_string());
            self.max_depth = self.max_depth.max(self.open.len());
            trace!("Entered '{}'", node.path());
        }
    }
}
