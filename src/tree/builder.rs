use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::{Delimiter, InvalidInputError, Node, NodeObserver, NoopObserver};

/// Builds a tree from `paths`, splitting each on `delimiter`.
///
/// `delimiter` must be exactly one character. `on_node` sees the root once
/// and every other node twice (see [`NodeObserver`]); pass [`NoopObserver`]
/// when no hook is needed.
pub fn build_tree<I, S, O>(
    paths: I,
    delimiter: &str,
    mut on_node: O,
) -> Result<Node, InvalidInputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    O: NodeObserver,
{
    let builder = TreeBuilder::try_with_delimiter(delimiter)?;
    Ok(builder.build_observed(paths, &mut on_node))
}

/// Builds a tree from `paths` using `/` and no observer.
pub fn paths_to_tree<I, S>(paths: I) -> Node
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TreeBuilder::default().build(paths)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeBuilder {
    delimiter: Delimiter,
}

impl TreeBuilder {
    pub fn new(delimiter: impl Into<Delimiter>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn try_with_delimiter(delimiter: &str) -> Result<Self, InvalidInputError> {
        Ok(Self::new(Delimiter::try_from(delimiter)?))
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn build<I, S>(&self, paths: I) -> Node
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build_observed(paths, &mut NoopObserver)
    }

    pub fn build_observed<I, S, O>(&self, paths: I, on_node: &mut O) -> Node
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        O: NodeObserver + ?Sized,
    {
        let paths: Vec<S> = paths.into_iter().collect();
        let suffixes: Vec<&str> = paths.iter().map(AsRef::as_ref).collect();
        debug!(
            "Building tree from {} paths with delimiter '{}'",
            suffixes.len(),
            self.delimiter
        );

        let mut root = Node::root();
        on_node.observe(&root);
        self.fill(&mut root, &suffixes, on_node);

        debug!("Built tree with {} nodes", root.node_count());
        root
    }

    /// Groups `suffixes` by their first segment and attaches one child per
    /// group to `node`, in ascending order of segment.
    fn fill<O>(&self, node: &mut Node, suffixes: &[&str], on_node: &mut O)
    where
        O: NodeObserver + ?Sized,
    {
        let delimiter = self.delimiter.as_char();

        // A suffix without a delimiter still opens its bucket, it just adds no rest.
        let mut buckets: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for &suffix in suffixes {
            match suffix.split_once(delimiter) {
                Some((segment, rest)) => buckets.entry(segment).or_default().push(rest),
                None => {
                    buckets.entry(suffix).or_default();
                }
            }
        }

        for (segment, rest) in buckets {
            let mut child = Node::child_of(node, segment, self.delimiter);
            trace!("Created node '{}'", child.path());

            on_node.observe(&child);
            self.fill(&mut child, &rest, on_node);
            on_node.observe(&child);

            node.push_child(child);
        }
    }
}
