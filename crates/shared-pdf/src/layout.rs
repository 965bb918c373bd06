//! Line wrapping and pagination for generated documents
//!
//! Positions are in PDF points with the origin at the bottom-left corner.
//! Lines are measured with the Helvetica metrics in [`crate::fonts`], so
//! wrapped text stays inside the margins.

use crate::fonts;

/// US Letter width in points
pub const PAGE_WIDTH: f32 = 612.0;
/// US Letter height in points
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 72.0;
/// Space reserved above the bottom margin for the page footer
pub const FOOTER_HEIGHT: f32 = 24.0;

/// Width available to text between the margins
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Text styles available to documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Heading,
    Body,
    Footer,
}

impl TextStyle {
    pub fn font_size(&self) -> f32 {
        match self {
            TextStyle::Title => 20.0,
            TextStyle::Heading => 14.0,
            TextStyle::Body => 11.0,
            TextStyle::Footer => 9.0,
        }
    }

    /// Vertical distance between baselines
    pub fn leading(&self) -> f32 {
        self.font_size() * 1.4
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, TextStyle::Title | TextStyle::Heading)
    }

    /// Width of `text` in points when set in this style
    pub fn text_width(&self, text: &str) -> f32 {
        fonts::text_width(text, self.is_bold(), self.font_size())
    }
}

/// A unit of document content, before wrapping
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text { style: TextStyle, text: String },
    Spacer(f32),
}

impl Block {
    pub fn text(style: TextStyle, text: impl Into<String>) -> Self {
        Block::Text {
            style,
            text: text.into(),
        }
    }
}

/// A wrapped line placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub style: TextStyle,
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Split text into lines no wider than `max_width` as reported by
/// `measure`, breaking on whitespace. Words wider than a line are split
/// between characters.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if measure(&candidate) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        // A single glyph wider than the line still gets a line of its own
        for c in word.chars() {
            current.push(c);
            if current.chars().count() > 1 && measure(&current) > max_width {
                current.pop();
                lines.push(std::mem::replace(&mut current, c.to_string()));
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Wrap blocks and distribute the resulting lines over pages.
///
/// Always returns at least one page.
pub fn paginate(blocks: &[Block]) -> Vec<Vec<PlacedLine>> {
    let top = PAGE_HEIGHT - MARGIN;
    let bottom = MARGIN + FOOTER_HEIGHT;

    let mut pages: Vec<Vec<PlacedLine>> = vec![Vec::new()];
    let mut cursor = top;

    for block in blocks {
        match block {
            Block::Spacer(height) => {
                // Spacing at the top of a fresh page is dropped
                if cursor < top {
                    cursor -= height;
                }
            }
            Block::Text { style, text } => {
                for line in wrap_text(text, CONTENT_WIDTH, |line| style.text_width(line)) {
                    let baseline = cursor - style.leading();
                    let baseline = if baseline < bottom && cursor < top {
                        pages.push(Vec::new());
                        top - style.leading()
                    } else {
                        baseline
                    };

                    if let Some(page) = pages.last_mut() {
                        page.push(PlacedLine {
                            style: *style,
                            text: line,
                            x: MARGIN,
                            y: baseline,
                        });
                    }
                    cursor = baseline;
                }
            }
        }
    }

    pages
}
