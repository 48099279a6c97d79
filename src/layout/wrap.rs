//! Greedy word wrapping for chapter text

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// Display width of a string in character cells, one per grapheme cluster.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Split text into alternating runs of whitespace and non-whitespace.
fn runs(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        let mut indices = rest.char_indices();
        let (_, first) = indices.next()?;
        let first_ws = first.is_whitespace();
        let end = indices
            .find(|(_, c)| c.is_whitespace() != first_ws)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(run)
    })
}

/// Wrap a single paragraph to `text_width` columns.
///
/// Breaks greedily at whitespace runs. Whitespace inside a line is kept as
/// written; whitespace at a wrap point is dropped. Leading whitespace of the
/// paragraph survives as indentation on the first line. A word wider than
/// the column is hard-broken at grapheme-cluster boundaries.
///
/// A paragraph of only whitespace wraps to no lines at all; forced blank
/// lines come from empty paragraphs, which the caller emits separately.
pub fn wrap_paragraph(paragraph: &str, text_width: usize) -> SmallVec<[String; 4]> {
    debug_assert!(text_width > 0);

    let mut lines: SmallVec<[String; 4]> = SmallVec::new();
    let mut line = String::new();
    let mut width = 0usize;

    for run in runs(paragraph) {
        let run_width = display_width(run);

        if run.chars().all(char::is_whitespace) {
            // Indentation at the very start of the paragraph is content;
            // any other whitespace that overflows the column marks a break.
            if width + run_width <= text_width && (width > 0 || lines.is_empty()) {
                line.push_str(run);
                width += run_width;
            } else if width > 0 {
                flush(&mut lines, &mut line, &mut width);
            }
            continue;
        }

        if width + run_width <= text_width {
            line.push_str(run);
            width += run_width;
        } else if run_width <= text_width {
            flush(&mut lines, &mut line, &mut width);
            line.push_str(run);
            width = run_width;
        } else {
            // The word alone exceeds the column: hard break.
            for grapheme in run.graphemes(true) {
                if width + 1 > text_width {
                    flush(&mut lines, &mut line, &mut width);
                }
                line.push_str(grapheme);
                width += 1;
            }
        }
    }

    flush(&mut lines, &mut line, &mut width);
    lines
}

fn flush(lines: &mut SmallVec<[String; 4]>, line: &mut String, width: &mut usize) {
    let trimmed = line.trim_end();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
    line.clear();
    *width = 0;
}

/// Flatten chapter text into the ordered line sequence to paginate.
///
/// Paragraph boundaries disappear: each non-empty paragraph contributes its
/// wrapped lines, each empty paragraph contributes one space-filled line so
/// deliberate blank lines survive the wrap.
pub fn flatten_content(content: &str, text_width: usize) -> Vec<String> {
    let mut flattened = Vec::new();
    for paragraph in content.lines() {
        if paragraph.is_empty() {
            flattened.push(" ".repeat(text_width));
        } else {
            flattened.extend(wrap_paragraph(paragraph, text_width));
        }
    }
    flattened
}
