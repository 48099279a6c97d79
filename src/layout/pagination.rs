//! Grouping of wrapped lines into fixed-height pages

/// Partition the flattened line sequence into page-sized groups.
///
/// The last group may be shorter than `content_height`; the renderer pads it
/// back to full height. An empty sequence still yields one empty group, so
/// an empty chapter renders as a single blank page.
pub fn paginate(lines: &[String], content_height: usize) -> Vec<&[String]> {
    debug_assert!(content_height > 0);
    if lines.is_empty() {
        return vec![&lines[0..0]];
    }
    lines.chunks(content_height).collect()
}

/// Number of pages `line_count` flattened lines occupy.
pub fn page_count(line_count: usize, content_height: usize) -> usize {
    debug_assert!(content_height > 0);
    if line_count == 0 {
        1
    } else {
        line_count.div_ceil(content_height)
    }
}
