use super::Node;

/// Hook invoked by the builder at fixed points of construction.
///
/// Every non-root node is observed twice: once right after it is created,
/// before any of its children exist, and once after its subtree is complete.
/// The root is observed once, before anything is attached to it.
pub trait NodeObserver {
    fn observe(&mut self, node: &Node);
}

impl<F> NodeObserver for F
where
    F: FnMut(&Node),
{
    fn observe(&mut self, node: &Node) {
        self(node)
    }
}

/// Observer that ignores every node.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl NodeObserver for NoopObserver {
    fn observe(&mut self, _node: &Node) {}
}
