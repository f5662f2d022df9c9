//! vEB node structure and main API.

mod iter;
mod node;
mod tree;

pub use iter::{Iter, Members};
pub(crate) use node::Node;
pub use tree::VebTree;
