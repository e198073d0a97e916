use std::fmt::{self, Display, Write};

use super::Delimiter;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// One segment of the tree.
///
/// The root has an empty `name` and `path`. Every other node's `path` is its
/// parent's `path` followed by the delimiter and its own `name`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    path: String,
    name: String,
    children: Vec<Node>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self::default()
    }

    pub(crate) fn child_of(parent: &Node, name: &str, delimiter: Delimiter) -> Self {
        let mut path = String::with_capacity(parent.path.len() + name.len() + 1);
        path.push_str(&parent.path);
        path.push(delimiter.as_char());
        path.push_str(name);

        Node {
            path,
            name: name.to_string(),
            children: Vec::new(),
        }
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes below this one, not counting itself.
    pub fn node_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.node_count())
            .sum()
    }

    /// Pre-order traversal of every descendant, siblings in stored order.
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            stack: vec![self.children.iter()],
        }
    }

    /// Writes the subtree as indented ASCII art, one child per line.
    ///
    /// `label` decides how each node is shown, which lets callers decorate
    /// names (e.g. with terminal colors) without re-implementing the layout.
    pub fn write_tree<W, L>(&self, out: &mut W, label: L) -> fmt::Result
    where
        W: Write,
        L: Fn(&Node) -> String,
    {
        let mut prefix = String::new();
        self.write_children(out, &label, &mut prefix)
    }

    fn write_children<W, L>(&self, out: &mut W, label: &L, prefix: &mut String) -> fmt::Result
    where
        W: Write,
        L: Fn(&Node) -> String,
    {
        let count = self.children.len();
        for (index, child) in self.children.iter().enumerate() {
            let is_last = index + 1 == count;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            writeln!(out, "{prefix}{connector}{}", label(child))?;

            let previous_len = prefix.len();
            prefix.push_str(if is_last { SPACE } else { PIPE });
            child.write_children(out, label, prefix)?;
            prefix.truncate(previous_len);
        }
        Ok(())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, |node| node.name().to_string())
    }
}

pub struct DepthFirst<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(node) => {
                    self.stack.push(node.children.iter());
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        let slash = Delimiter::default();
        let mut root = Node::root();

        let mut dir = Node::child_of(&root, "dir", slash);
        let file_a = Node::child_of(&dir, "a.txt", slash);
        let file_b = Node::child_of(&dir, "b.txt", slash);
        dir.push_child(file_a);
        dir.push_child(file_b);

        let readme = Node::child_of(&root, "readme", slash);
        root.push_child(dir);
        root.push_child(readme);
        root
    }

    #[test]
    fn root_has_empty_name_and_path() {
        let root = Node::root();
        assert_eq!(root.name(), "");
        assert_eq!(root.path(), "");
        assert!(root.is_root());
        assert!(root.is_leaf());
    }

    #[test]
    fn child_path_extends_parent_path() {
        let root = sample();
        let dir = &root.children()[0];
        assert_eq!(dir.path(), "/dir");
        assert_eq!(dir.children()[1].path(), "/dir/b.txt");
        assert_eq!(dir.children()[1].name(), "b.txt");
        assert!(!dir.is_root());
    }

    #[test]
    fn node_count_excludes_self() {
        let root = sample();
        assert_eq!(root.node_count(), 4);
        assert_eq!(root.children()[0].node_count(), 2);
        assert_eq!(root.children()[1].node_count(), 0);
    }

    #[test]
    fn depth_first_visits_in_pre_order() {
        let root = sample();
        let visited: Vec<&str> = root.depth_first().map(Node::path).collect();
        assert_eq!(
            visited,
            vec!["/dir", "/dir/a.txt", "/dir/b.txt", "/readme"]
        );
    }

    #[test]
    fn depth_first_of_leaf_is_empty() {
        assert_eq!(Node::root().depth_first().count(), 0);
    }

    #[test]
    fn display_draws_ascii_tree() {
        let rendered = sample().to_string();
        assert_eq!(
            rendered,
            "├── dir\n│   ├── a.txt\n│   └── b.txt\n└── readme\n"
        );
    }

    #[test]
    fn write_tree_uses_custom_labels() {
        let mut out = String::new();
        sample()
            .write_tree(&mut out, |node| node.path().to_string())
            .expect("Writing to a String cannot fail");
        assert_eq!(
            out,
            "├── /dir\n│   ├── /dir/a.txt\n│   └── /dir/b.txt\n└── /readme\n"
        );
    }
}
