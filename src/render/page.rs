//! Page assembly: borders, centered chrome, padded content rows

use crate::layout::{display_width, flatten_content, paginate, ChapterLayout, LayoutError};
use log::debug;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// One fully rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based position in the chapter
    pub number: usize,
    /// Rendered rows, each newline-terminated
    pub text: String,
}

/// Render a chapter into its ordered page sequence.
///
/// `title` is the book-level decoration repeated on every page, `heading`
/// the chapter line below it. The result is never empty: a chapter with no
/// content still renders one blank page.
pub fn render_chapter(
    content: &str,
    title: &str,
    heading: &str,
    layout: &ChapterLayout,
) -> Result<Vec<Page>, LayoutError> {
    layout.validate()?;

    let lines = flatten_content(content, layout.text_width());
    let groups = paginate(&lines, layout.content_height);
    debug!(
        "laying out {} wrapped lines into {} pages",
        lines.len(),
        groups.len()
    );

    let frame = PageFrame {
        title,
        heading,
        layout,
    };
    Ok(groups
        .iter()
        .enumerate()
        .map(|(index, group)| Page {
            number: index + 1,
            text: frame.render(group, index + 1),
        })
        .collect())
}

/// Per-chapter chrome shared by every rendered page.
struct PageFrame<'a> {
    title: &'a str,
    heading: &'a str,
    layout: &'a ChapterLayout,
}

impl PageFrame<'_> {
    fn render(&self, lines: &[String], number: usize) -> String {
        let height = self.layout.content_height;
        let mut page = String::new();

        self.push_rule(&mut page, '-');
        self.push_centered(&mut page, self.title);
        self.push_rule(&mut page, '~');
        self.push_centered(&mut page, self.heading);

        for line in lines {
            self.push_content(&mut page, line);
        }
        // Pages are uniform height even when the text runs out.
        for _ in lines.len()..height {
            self.push_content(&mut page, "");
        }

        self.push_centered(&mut page, &format!("Pg. {}", number));
        self.push_rule(&mut page, '-');

        page
    }

    /// Horizontal rule: `+` corner columns around a filled field.
    fn push_rule(&self, page: &mut String, fill: char) {
        let corner = "+".repeat(self.layout.border);
        page.push_str(&corner);
        for _ in 0..self.layout.inner_width() {
            page.push(fill);
        }
        page.push_str(&corner);
        page.push('\n');
    }

    /// Centered field between the border columns. Text wider than the
    /// field is clipped so the row never widens.
    fn push_centered(&self, page: &mut String, text: &str) {
        let inner = self.layout.inner_width();
        let text = clip(text, inner);
        let avail = inner - display_width(&text);
        let leading = avail / 2;

        let edge = "|".repeat(self.layout.border);
        page.push_str(&edge);
        page.push_str(&" ".repeat(leading));
        page.push_str(&text);
        page.push_str(&" ".repeat(avail - leading));
        page.push_str(&edge);
        page.push('\n');
    }

    /// Content row: left-aligned text padded right to the text column.
    fn push_content(&self, page: &mut String, line: &str) {
        let fill = self.layout.text_width().saturating_sub(display_width(line));
        let pad = " ".repeat(self.layout.padding);

        let edge = "|".repeat(self.layout.border);
        page.push_str(&edge);
        page.push_str(&pad);
        page.push_str(line);
        page.push_str(&" ".repeat(fill));
        page.push_str(&pad);
        page.push_str(&edge);
        page.push('\n');
    }
}

/// Truncate to `max` grapheme clusters.
fn clip(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        text.to_string()
    } else {
        text.graphemes(true).take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_layout() -> ChapterLayout {
        ChapterLayout {
            width: 14,
            padding: 2,
            border: 2,
            content_height: 2,
        }
    }

    fn book_layout() -> ChapterLayout {
        ChapterLayout {
            width: 20,
            padding: 1,
            border: 1,
            content_height: 5,
        }
    }

    fn row_widths(page: &Page) -> Vec<usize> {
        page.text.lines().map(display_width).collect()
    }

    #[test]
    fn test_two_lines_fill_one_page() {
        let pages =
            render_chapter("abcdef ghijkl", "BOOK", "Ch. 1: Test", &scenario_layout()).unwrap();
        assert_eq!(pages.len(), 1);

        let rows: Vec<&str> = pages[0].text.lines().collect();
        // 6 chrome rows around content_height content rows.
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[4], "||  abcdef  ||");
        assert_eq!(rows[5], "||  ghijkl  ||");
        assert!(rows[6].contains("Pg. 1"));
    }

    #[test]
    fn test_uniform_row_width() {
        let pages = render_chapter(
            "Some content that wraps over several lines of the page.",
            "BOOK",
            "Ch. 2: Width",
            &book_layout(),
        )
        .unwrap();
        for page in &pages {
            for width in row_widths(page) {
                assert_eq!(width, 20);
            }
        }
    }

    #[test]
    fn test_uniform_height_with_padding_rows() {
        let pages = render_chapter("one line", "BOOK", "Ch. 3: Pad", &book_layout()).unwrap();
        let rows: Vec<&str> = pages[0].text.lines().collect();
        assert_eq!(rows.len(), 5 + 6);
        // Rows after the single content line are blank fill.
        for row in &rows[5..9] {
            assert_eq!(*row, format!("|{}|", " ".repeat(18)));
        }
    }

    #[test]
    fn test_empty_content_yields_one_blank_page() {
        let pages = render_chapter("", "BOOK", "Ch. 4: Empty", &book_layout()).unwrap();
        assert_eq!(pages.len(), 1);
        let rows: Vec<&str> = pages[0].text.lines().collect();
        for row in &rows[4..9] {
            assert_eq!(*row, format!("|{}|", " ".repeat(18)));
        }
    }

    #[test]
    fn test_blank_paragraph_renders_blank_row() {
        let pages = render_chapter("A\n\nB", "T", "S", &book_layout()).unwrap();
        let rows: Vec<&str> = pages[0].text.lines().collect();
        assert!(rows[4].starts_with("| A"));
        assert_eq!(rows[5], format!("|{}|", " ".repeat(18)));
        assert!(rows[6].starts_with("| B"));
    }

    #[test]
    fn test_footer_numbering() {
        // 7 one-line paragraphs over a 5-line page: two pages.
        let content = "a\nb\nc\nd\ne\nf\ng";
        let pages = render_chapter(content, "BOOK", "Ch. 5: Pages", &book_layout()).unwrap();
        assert_eq!(pages.len(), 2);
        for (k, page) in pages.iter().enumerate() {
            assert_eq!(page.number, k + 1);
            let rows: Vec<&str> = page.text.lines().collect();
            assert!(rows[9].contains(&format!("Pg. {}", k + 1)));
        }
    }

    #[test]
    fn test_centering_floors_leading_gap() {
        let layout = ChapterLayout {
            width: 15,
            padding: 1,
            border: 1,
            content_height: 1,
        };
        let pages = render_chapter("x", "ab", "cd", &layout).unwrap();
        let rows: Vec<&str> = pages[0].text.lines().collect();
        // inner field is 13 columns; 11 spare around "ab" splits 5/6.
        assert_eq!(rows[1], "|     ab      |");
    }

    #[test]
    fn test_overlong_title_clipped_not_widened() {
        let layout = ChapterLayout {
            width: 10,
            padding: 1,
            border: 1,
            content_height: 1,
        };
        let pages = render_chapter("x", "ABCDEFGHIJKL", "S", &layout).unwrap();
        let rows: Vec<&str> = pages[0].text.lines().collect();
        assert_eq!(rows[1], "|ABCDEFGH|");
        for row in &rows {
            assert_eq!(display_width(row), 10);
        }
    }

    #[test]
    fn test_rule_rows() {
        let pages = render_chapter("x", "T", "S", &book_layout()).unwrap();
        let rows: Vec<&str> = pages[0].text.lines().collect();
        assert_eq!(rows[0], format!("+{}+", "-".repeat(18)));
        assert_eq!(rows[2], format!("+{}+", "~".repeat(18)));
        assert_eq!(rows[rows.len() - 1], format!("+{}+", "-".repeat(18)));
    }

    #[test]
    fn test_deterministic() {
        let layout = book_layout();
        let a = render_chapter("Same input twice.", "T", "S", &layout).unwrap();
        let b = render_chapter("Same input twice.", "T", "S", &layout).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_layout_refused() {
        let layout = ChapterLayout {
            width: 4,
            padding: 1,
            border: 1,
            content_height: 3,
        };
        assert!(render_chapter("x", "T", "S", &layout).is_err());
    }
}
