//! Mini-Book: chapter pagination core for a multiplayer text game
//!
//! This crate provides the text-to-pages transformation behind an in-game
//! book:
//! - Greedy word wrap to a fixed text column, preserving deliberate blank
//!   lines
//! - Fixed-height pagination with uniform blank-line padding
//! - Bordered page chrome with centered title, heading, and page number
//!
//! The game framework around it (object lifecycle, command sets, web
//! delivery) stays outside: it hands content in as plain strings and
//! receives finished pages back, persisting chapter attributes through the
//! injected [`AttributeStore`] seam.

pub mod document;
pub mod layout;
pub mod render;
pub mod store;

// Re-export primary types
pub use document::{ChapterContent, ChapterMeta};
pub use layout::{ChapterLayout, LayoutError};
pub use render::{render_chapter, Page};
pub use store::{AttributeStore, MemoryStore};

use serde_json::{json, Value};

// Attribute keys a chapter persists under.
const KEY_NUM: &str = "chapter_num";
const KEY_TITLE: &str = "chapter_title";
const KEY_SUMMARY: &str = "chapter_summary";
const KEY_CONTENT: &str = "content";

/// A chapter combining metadata and content, ready to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chapter {
    pub meta: ChapterMeta,
    pub content: ChapterContent,
}

impl Chapter {
    /// Create an empty chapter.
    pub fn new(number: u32, title: &str) -> Self {
        Self {
            meta: ChapterMeta::new(number, title),
            content: ChapterContent::new(),
        }
    }

    /// Create a chapter with initial content.
    pub fn with_content(number: u32, title: &str, text: &str) -> Self {
        Self {
            meta: ChapterMeta::new(number, title),
            content: ChapterContent::from_text(text),
        }
    }

    /// One-line description of this chapter.
    pub fn describe(&self) -> String {
        format!(
            "This is a collection of pages organized into a chapter entitled: {}.",
            self.meta.title
        )
    }

    /// Render all pages under the book `title` with the given layout.
    pub fn render(&self, title: &str, layout: &ChapterLayout) -> Result<Vec<Page>, LayoutError> {
        render_chapter(self.content.as_str(), title, &self.meta.heading(), layout)
    }

    /// Number of pages this chapter occupies under the given layout.
    pub fn page_count(&self, layout: &ChapterLayout) -> Result<usize, LayoutError> {
        layout.validate()?;
        let lines = layout::flatten_content(self.content.as_str(), layout.text_width());
        Ok(layout::page_count(lines.len(), layout.content_height))
    }

    /// Persist metadata and content into the attribute store.
    pub fn save(&self, store: &mut dyn AttributeStore) {
        store.set(KEY_NUM, json!(self.meta.number));
        store.set(KEY_TITLE, Value::String(self.meta.title.clone()));
        store.set(KEY_SUMMARY, Value::String(self.meta.summary.clone()));
        store.set(KEY_CONTENT, Value::String(self.content.as_str().to_string()));
    }

    /// Rebuild a chapter from the attribute store. Missing or mistyped
    /// attributes fall back to empty defaults.
    pub fn load(store: &dyn AttributeStore) -> Self {
        let number = store.get(KEY_NUM).and_then(Value::as_u64).unwrap_or(0) as u32;
        let mut meta = ChapterMeta::new(number, &string_attr(store, KEY_TITLE));
        meta.summary = string_attr(store, KEY_SUMMARY);

        Self {
            meta,
            content: ChapterContent::from_text(&string_attr(store, KEY_CONTENT)),
        }
    }
}

fn string_attr(store: &dyn AttributeStore, key: &str) -> String {
    store
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
