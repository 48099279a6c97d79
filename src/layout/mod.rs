//! Page geometry, word wrapping, and pagination

mod pagination;
mod wrap;

pub use pagination::{page_count, paginate};
pub use wrap::{display_width, flatten_content, wrap_paragraph};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected page geometry. Checked once at the start of a render call;
/// everything past the check is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error(
        "invalid layout: width {width} with padding {padding} and border {border} \
         per side leaves no text column (content height {content_height})"
    )]
    InvalidLayout {
        width: usize,
        padding: usize,
        border: usize,
        content_height: usize,
    },
}

/// Page geometry for a rendered chapter.
///
/// All horizontal quantities are in character cells; `padding` and `border`
/// count one side each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterLayout {
    /// Total page width, borders included
    pub width: usize,
    /// Blank columns between border and text, per side
    pub padding: usize,
    /// Border columns, per side
    pub border: usize,
    /// Lines of text a page's content region holds
    pub content_height: usize,
}

impl Default for ChapterLayout {
    fn default() -> Self {
        // Book-like geometry: 75 columns, one border and one padding
        // column per side, ten lines of text per page.
        Self {
            width: 75,
            padding: 1,
            border: 1,
            content_height: 10,
        }
    }
}

impl ChapterLayout {
    /// Columns available for wrapped text.
    pub fn text_width(&self) -> usize {
        self.width.saturating_sub(2 * self.padding + 2 * self.border)
    }

    /// Columns between the border columns; the title, heading, and footer
    /// are centered within this field.
    pub fn inner_width(&self) -> usize {
        self.width.saturating_sub(2 * self.border)
    }

    /// Reject geometry that cannot hold any text.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.width == 0 || self.content_height == 0 || self.text_width() == 0 {
            return Err(LayoutError::InvalidLayout {
                width: self.width,
                padding: self.padding,
                border: self.border,
                content_height: self.content_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let layout = ChapterLayout::default();
        assert_eq!(layout.text_width(), 71);
        assert_eq!(layout.inner_width(), 73);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_zero_width_rejected() {
        let layout = ChapterLayout {
            width: 0,
            ..ChapterLayout::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_zero_height_rejected() {
        let layout = ChapterLayout {
            content_height: 0,
            ..ChapterLayout::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_padding_consuming_width_rejected() {
        // 2*2 padding + 2*1 border = 6 columns, nothing left for text.
        let layout = ChapterLayout {
            width: 6,
            padding: 2,
            border: 1,
            content_height: 10,
        };
        assert_eq!(layout.text_width(), 0);
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::InvalidLayout { width: 6, .. })
        ));
    }

    #[test]
    fn test_scenario_geometry() {
        // 14 wide with two padding and two border columns per side
        // leaves a six-column text field.
        let layout = ChapterLayout {
            width: 14,
            padding: 2,
            border: 2,
            content_height: 2,
        };
        assert_eq!(layout.text_width(), 6);
        assert!(layout.validate().is_ok());
    }
}
