//! Block tree in first-child / next-sibling form, stored in an arena.
//!
//! Every node lives in one `Vec` and links to other nodes by index, so the
//! tree needs no recursive ownership. Index 0 is always the synthetic root
//! that stands for the page itself; it carries the page id and no block.

use super::Block;
use crate::types::BlockId;

/// Position of a node inside its `BlockTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the tree: a block (or the root placeholder) plus its links.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockNode {
    pub id: BlockId,
    /// `None` only for the synthetic root.
    pub value: Option<Block>,
    pub first_child: Option<NodeIndex>,
    pub next_sibling: Option<NodeIndex>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockTree {
    nodes: Vec<BlockNode>,
}

impl BlockTree {
    /// Creates a tree holding only the synthetic root for `root_id`.
    pub fn new(root_id: BlockId) -> Self {
        Self {
            nodes: vec![BlockNode {
                id: root_id,
                value: None,
                first_child: None,
                next_sibling: None,
            }],
        }
    }

    pub fn root(&self) -> NodeIndex {
        NodeIndex(0)
    }

    /// Returns the node at `index`.
    ///
    /// Indices are only handed out by this tree, so a foreign index is a bug.
    pub fn node(&self, index: NodeIndex) -> &BlockNode {
        &self.nodes[index.0]
    }

    /// Number of real blocks (the root placeholder is not counted).
    pub fn block_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Appends `blocks` to the end of `parent`'s child sequence, in order.
    ///
    /// Returns the indices of the new nodes in the same order.
    pub fn attach_children<I>(&mut self, parent: NodeIndex, blocks: I) -> Vec<NodeIndex>
    where
        I: IntoIterator<Item = Block>,
    {
        let mut tail = self.children(parent).last();
        let mut attached = Vec::new();

        for block in blocks {
            let index = NodeIndex(self.nodes.len());
            self.nodes.push(BlockNode {
                id: block.id.clone(),
                value: Some(block),
                first_child: None,
                next_sibling: None,
            });

            match tail {
                Some(previous) => self.nodes[previous.0].next_sibling = Some(index),
                None => self.nodes[parent.0].first_child = Some(index),
            }
            tail = Some(index);
            attached.push(index);
        }

        attached
    }

    /// Iterates over the direct children of `parent` in sibling order.
    pub fn children(&self, parent: NodeIndex) -> Siblings<'_> {
        Siblings {
            tree: self,
            next: self.node(parent).first_child,
        }
    }
}

/// Iterator following `next_sibling` links.
pub struct Siblings<'a> {
    tree: &'a BlockTree,
    next: Option<NodeIndex>,
}

impl Iterator for Siblings<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.node(current).next_sibling;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockKind, TextBlockContent};
    use crate::types::RichTextItem;

    fn block_id(n: u32) -> BlockId {
        BlockId::parse(&format!("{:032x}", n)).unwrap()
    }

    fn paragraph(n: u32) -> Block {
        Block::new(
            block_id(n),
            BlockKind::Paragraph(TextBlockContent::new(vec![RichTextItem::plain_text(
                &n.to_string(),
            )])),
        )
    }

    #[test]
    fn test_new_tree_has_only_root() {
        let tree = BlockTree::new(block_id(1));
        let root = tree.node(tree.root());
        assert_eq!(root.id, block_id(1));
        assert!(root.value.is_none());
        assert!(root.first_child.is_none());
        assert_eq!(tree.block_count(), 0);
    }

    #[test]
    fn test_attach_children_links_in_order() {
        let mut tree = BlockTree::new(block_id(1));
        let root = tree.root();
        let attached = tree.attach_children(root, vec![paragraph(2), paragraph(3), paragraph(4)]);

        assert_eq!(tree.node(root).first_child, Some(attached[0]));
        assert_eq!(tree.node(attached[0]).next_sibling, Some(attached[1]));
        assert_eq!(tree.node(attached[1]).next_sibling, Some(attached[2]));
        assert_eq!(tree.node(attached[2]).next_sibling, None);
        assert_eq!(tree.children(root).collect::<Vec<_>>(), attached);
        assert_eq!(tree.block_count(), 3);
    }

    #[test]
    fn test_attach_children_appends_to_existing_chain() {
        let mut tree = BlockTree::new(block_id(1));
        let root = tree.root();
        let first = tree.attach_children(root, vec![paragraph(2)]);
        let second = tree.attach_children(root, vec![paragraph(3)]);

        assert_eq!(tree.node(first[0]).next_sibling, Some(second[0]));
        let ids: Vec<_> = tree
            .children(root)
            .map(|i| tree.node(i).id.clone())
            .collect();
        assert_eq!(ids, vec![block_id(2), block_id(3)]);
    }

    #[test]
    fn test_attach_nothing_leaves_parent_childless() {
        let mut tree = BlockTree::new(block_id(1));
        let root = tree.root();
        assert!(tree.attach_children(root, Vec::new()).is_empty());
        assert!(tree.node(root).first_child.is_none());
    }

    #[test]
    fn test_nested_children_belong_to_their_parent() {
        let mut tree = BlockTree::new(block_id(1));
        let root = tree.root();
        let top = tree.attach_children(root, vec![paragraph(2), paragraph(3)]);
        let nested = tree.attach_children(top[0], vec![paragraph(4)]);

        assert_eq!(tree.node(top[0]).first_child, Some(nested[0]));
        assert_eq!(tree.children(root).count(), 2);
        assert_eq!(tree.children(top[0]).collect::<Vec<_>>(), nested);
    }
}
