mod block;
pub mod blocks;
mod page;
pub mod properties;
pub mod tree;

pub use block::{Block, BlockKind};
pub use blocks::*;
pub use page::{Page, PropertyValue};
pub use properties::{parse_timestamp, PageProperties};
pub use tree::{BlockNode, BlockTree, NodeIndex};
