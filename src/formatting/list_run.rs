// src/formatting/list_run.rs
//! Rendering of a contiguous run of bulleted and numbered list items.
//!
//! A run starts at a list item and follows sibling links until a node that
//! is not a list item. Children of an item are rendered one level deeper,
//! before the item's next sibling. The walk keeps its own stack of pending
//! levels instead of recursing.

use crate::constants::LIST_INDENT_SPACES;
use crate::formatting::rich_text_to_markdown;
use crate::model::{BlockKind, BlockNode, BlockTree, NodeIndex, TextBlockContent};

/// Output of one list run.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRun {
    /// All lines of the run joined by `\n`.
    pub text: String,
    /// First node after the run at its top level, to be processed next.
    pub continuation: Option<NodeIndex>,
}

/// A level left to descend into an item's children.
struct PendingLevel {
    resume: Option<NodeIndex>,
    level: usize,
    counter: usize,
}

struct ListItem<'a> {
    node: &'a BlockNode,
    numbered: bool,
    content: &'a TextBlockContent,
}

/// The list item at `cursor`, or `None` when the run ends there.
fn list_item(tree: &BlockTree, cursor: Option<NodeIndex>) -> Option<ListItem<'_>> {
    let node = tree.node(cursor?);
    let (numbered, content) = match &node.value.as_ref()?.kind {
        BlockKind::NumberedListItem(content) => (true, content),
        BlockKind::BulletedListItem(content) => (false, content),
        _ => return None,
    };
    Some(ListItem {
        node,
        numbered,
        content,
    })
}

/// Renders the list run starting at `start`.
pub fn render_list_run(tree: &BlockTree, start: NodeIndex) -> ListRun {
    let mut lines = Vec::new();
    let mut pending: Vec<PendingLevel> = Vec::new();

    let mut cursor = Some(start);
    let mut level = 0;
    let mut counter = 1;

    loop {
        match list_item(tree, cursor) {
            Some(ListItem {
                node,
                numbered,
                content,
            }) => {
                let indent = " ".repeat(LIST_INDENT_SPACES * level);
                let text = rich_text_to_markdown(&content.rich_text);
                if numbered {
                    lines.push(format!("{}{}. {}", indent, counter, text));
                    counter += 1;
                } else {
                    lines.push(format!("{}- {}", indent, text));
                }

                match node.first_child {
                    Some(child) => {
                        pending.push(PendingLevel {
                            resume: node.next_sibling,
                            level,
                            counter,
                        });
                        cursor = Some(child);
                        level += 1;
                        counter = 1;
                    }
                    None => cursor = node.next_sibling,
                }
            }
            None => match pending.pop() {
                Some(parent) => {
                    if let Some(dropped) = cursor {
                        log::debug!(
                            "Dropping non-list block {} nested in a list item",
                            tree.node(dropped).id
                        );
                    }
                    cursor = parent.resume;
                    level = parent.level;
                    counter = parent.counter;
                }
                None => {
                    return ListRun {
                        text: lines.join("\n"),
                        continuation: cursor,
                    }
                }
            },
        }
    }
}
