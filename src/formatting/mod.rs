// src/formatting/mod.rs
//! Renders fetched block trees into Markdown and assembles moment documents.

mod front_matter;
mod list_run;
mod rich_text;
mod translator;

pub use front_matter::{compose_moment_markdown, MomentTemplate};
pub use list_run::{render_list_run, ListRun};
pub use rich_text::{plain_text, rich_text_to_markdown};
pub use translator::{translate, TranslatedDocument};
