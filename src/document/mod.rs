//! Chapter content and metadata model

use serde::{Deserialize, Serialize};

/// Chapter identity rendered into each page's heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterMeta {
    pub number: u32,
    pub title: String,
    pub summary: String,
}

impl ChapterMeta {
    /// Create metadata with an empty summary.
    pub fn new(number: u32, title: &str) -> Self {
        Self {
            number,
            title: title.to_string(),
            summary: String::new(),
        }
    }

    /// Heading line shown under the book title on every page.
    pub fn heading(&self) -> String {
        format!("Ch. {}: {}", self.number, self.title)
    }
}

/// Raw chapter text, logically partitioned into paragraphs by explicit
/// newlines. An empty paragraph is a deliberate blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterContent {
    text: String,
}

impl ChapterContent {
    /// Create empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create content from raw text.
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    /// The raw text as stored.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Paragraphs in insertion order. A trailing newline does not produce
    /// a trailing empty paragraph.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Append a paragraph on its own line.
    pub fn append_paragraph(&mut self, paragraph: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(paragraph);
    }

    /// Append a deliberate blank line. It becomes visible once another
    /// paragraph follows it.
    pub fn push_blank_line(&mut self) {
        self.append_paragraph("");
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
