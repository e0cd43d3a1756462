pub mod loader;
pub mod node;

pub use loader::{LoadError, Loader};
pub use node::{AttrValue, Attribute, Block, Element, Node};
