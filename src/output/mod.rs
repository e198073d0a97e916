mod tree_printer;

pub use tree_printer::TreePrinter;
