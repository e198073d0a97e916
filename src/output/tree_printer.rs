use colored::Colorize;
use pathtree::Node;

/// Renders a built tree for the terminal, branches highlighted when colored.
#[derive(Debug, Clone)]
pub struct TreePrinter {
    root_label: String,
    colorize: bool,
}

impl TreePrinter {
    pub fn new(root_label: impl Into<String>, colorize: bool) -> Self {
        Self {
            root_label: root_label.into(),
            colorize,
        }
    }

    pub fn render(&self, root: &Node) -> String {
        let mut out = String::new();
        out.push_str(&self.root_label);
        out.push('\n');
        // Writing into a String cannot fail
        let _ = root.write_tree(&mut out, |node| self.label(node));
        out
    }

    fn label(&self, node: &Node) -> String {
        if self.colorize && !node.is_leaf() {
            node.name().blue().bold().to_string()
        } else {
            node.name().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathtree::paths_to_tree;

    #[test]
    fn renders_label_then_tree() {
        let root = paths_to_tree(["dir1/file1", "dir1/file2", "dir2/file3"]);
        let rendered = TreePrinter::new(".", false).render(&root);

        assert_eq!(
            rendered,
            ".\n├── dir1\n│   ├── file1\n│   └── file2\n└── dir2\n    └── file3\n"
        );
    }

    #[test]
    fn empty_tree_renders_only_label() {
        let root = paths_to_tree(Vec::<String>::new());
        assert_eq!(TreePrinter::new("archive", false).render(&root), "archive\n");
    }

    #[test]
    fn colored_output_highlights_branches_only() {
        colored::control::set_override(true);
        let root = paths_to_tree(["dir/file"]);
        let rendered = TreePrinter::new(".", true).render(&root);

        assert!(rendered.contains(&"dir".blue().bold().to_string()));
        assert!(rendered.contains("└── file\n"));
        assert_ne!(rendered, TreePrinter::new(".", false).render(&root));
    }
}
