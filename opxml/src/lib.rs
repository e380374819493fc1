//! XML document building and writing primitives for op-mode commands.

pub mod tree;
pub mod writer;

pub use tree::XmlNode;
pub use writer::{write, write_file, write_string, WriteError};
