// src/formatting/translator.rs
//! Block tree to Markdown translation.
//!
//! Nodes are visited in document order: a node, then its children, then its
//! next sibling. Each rendered block becomes one paragraph; paragraphs are
//! separated by a blank line. Images are not rendered inline but collected
//! for the front matter.

use super::list_run::render_list_run;
use super::rich_text::{plain_text, rich_text_to_markdown};
use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::model::{Block, BlockKind, BlockTree, TextBlockContent};
use serde::Serialize;
use std::collections::VecDeque;

/// Markdown body and image URLs of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TranslatedDocument {
    pub md_text: String,
    /// In traversal order; repeated images are kept.
    pub images: Vec<String>,
}

/// Translates a fetched block tree.
pub fn translate(tree: &BlockTree) -> TranslatedDocument {
    let mut translator = BlockTreeTranslator {
        paragraphs: Vec::with_capacity(tree.block_count()),
        images: Vec::new(),
    };

    let mut queue = VecDeque::from([tree.root()]);
    while let Some(index) = queue.pop_front() {
        let node = tree.node(index);

        match &node.value {
            Some(block) if block.is_list_item() => {
                let run = render_list_run(tree, index);
                translator.paragraphs.push(run.text);
                if let Some(next) = run.continuation {
                    queue.push_front(next);
                }
                continue;
            }
            Some(block) => translator.render_block(block),
            None => {}
        }

        if let Some(sibling) = node.next_sibling {
            queue.push_front(sibling);
        }
        if let Some(child) = node.first_child {
            queue.push_front(child);
        }
    }

    translator.finish(tree.block_count())
}

struct BlockTreeTranslator {
    paragraphs: Vec<String>,
    images: Vec<String>,
}

impl BlockTreeTranslator {
    fn render_block(&mut self, block: &Block) {
        match &block.kind {
            BlockKind::Paragraph(content) => {
                self.paragraphs.push(rich_text_to_markdown(&content.rich_text));
            }
            BlockKind::Image(image) => self.images.push(image.url().to_string()),
            BlockKind::Code(code) => self.paragraphs.push(format!(
                "```{}\n{}\n```",
                code.language,
                plain_text(&code.rich_text)
            )),
            BlockKind::Quote(content) => self.paragraphs.push(render_quote(content)),
            // List items are consumed whole by the list run.
            BlockKind::BulletedListItem(_) | BlockKind::NumberedListItem(_) => {}
            BlockKind::Unsupported { .. } => {}
        }
    }

    fn finish(self, block_count: usize) -> TranslatedDocument {
        let mut md_text = String::with_capacity(block_count * CHARS_PER_BLOCK_ESTIMATE);
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                md_text.push_str("\n\n");
            }
            md_text.push_str(paragraph);
        }

        TranslatedDocument {
            md_text,
            images: self.images,
        }
    }
}

/// Prefixes each line with `> ` and keeps lines apart with an empty quote line.
fn render_quote(content: &TextBlockContent) -> String {
    rich_text_to_markdown(&content.rich_text)
        .split('\n')
        .map(|line| format!("> {}", line))
        .collect::<Vec<_>>()
        .join("\n>\n")
}
