//! Rendering: directory-tree view and Markdown assembly

pub mod assembler;
pub mod tree;
pub(crate) mod vocab;

pub use assembler::{assemble, AssembleContext};
pub use tree::render_tree;
