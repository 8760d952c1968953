pub mod binary_tree;
pub mod error;
pub mod layout;
pub mod tree;

pub use binary_tree::Tree;
pub use error::{Error, Result};
pub use layout::{Layout, LayoutConfig};
pub use tree::{Insertion, Removal, TreeOps};
