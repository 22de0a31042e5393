//! Bordered text banners for terminal output.
//!
//! Frames a multiline string in a box drawn with eight border glyphs,
//! with configurable blank margins between the text and the border.

use std::str::FromStr;

use crate::error::CaesarError;

/// The eight glyphs of a border.
///
/// The textual order, used by [`FromStr`], is top-left, top, top-right,
/// left, bottom-right, bottom, bottom-left, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Top-left corner.
    pub top_left: char,
    /// Top edge.
    pub top: char,
    /// Top-right corner.
    pub top_right: char,
    /// Left edge.
    pub left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Bottom edge.
    pub bottom: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Right edge.
    pub right: char,
}

/// Unicode double-line box glyphs: `╔═╗║╝═╚║`.
pub const DOUBLE_LINE: BorderGlyphs = BorderGlyphs {
    top_left: '╔',
    top: '═',
    top_right: '╗',
    left: '║',
    bottom_right: '╝',
    bottom: '═',
    bottom_left: '╚',
    right: '║',
};

impl Default for BorderGlyphs {
    fn default() -> Self {
        DOUBLE_LINE
    }
}

impl FromStr for BorderGlyphs {
    type Err = CaesarError;

    /// Parses exactly eight glyphs.
    ///
    /// # Errors
    /// Returns [`CaesarError::InvalidGlyphSet`] for any other length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs: Vec<char> = s.chars().collect();
        match glyphs.as_slice() {
            &[top_left, top, top_right, left, bottom_right, bottom, bottom_left, right] => {
                Ok(BorderGlyphs {
                    top_left,
                    top,
                    top_right,
                    left,
                    bottom_right,
                    bottom,
                    bottom_left,
                    right,
                })
            }
            _ => Err(CaesarError::InvalidGlyphSet { len: glyphs.len() }),
        }
    }
}

/// Blank cells between the text and each side of the border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margins {
    /// Blank lines above the text.
    pub top: usize,
    /// Blank cells right of the text.
    pub right: usize,
    /// Blank lines below the text.
    pub bottom: usize,
    /// Blank cells left of the text.
    pub left: usize,
}

impl Margins {
    /// Same margin on all four sides.
    pub fn uniform(margin: usize) -> Self {
        Self::symmetric(margin, margin)
    }

    /// `horizontal` cells left and right, `vertical` lines above and below.
    pub fn symmetric(horizontal: usize, vertical: usize) -> Self {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Layout options for [`border`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BannerStyle {
    /// Blank space between the text and the border.
    pub margins: Margins,
    /// Glyphs the border is drawn with.
    pub glyphs: BorderGlyphs,
}

impl BannerStyle {
    /// Double-line border with symmetric margins.
    pub fn with_margins(horizontal: usize, vertical: usize) -> Self {
        BannerStyle {
            margins: Margins::symmetric(horizontal, vertical),
            glyphs: DOUBLE_LINE,
        }
    }
}

/// Frames `text` in a border.
///
/// Each line is trimmed and right-padded to the width of the longest line,
/// measured in chars. Empty text still yields one blank row. The result
/// has no trailing newline.
///
/// # Examples
///
/// ```
/// use caesarcrypt::utils::banner::{border, BannerStyle};
///
/// let framed = border("hi", &BannerStyle::with_margins(1, 0));
/// assert_eq!(framed, "╔════╗\n║ hi ║\n╚════╝");
/// ```
pub fn border(text: &str, style: &BannerStyle) -> String {
    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    if lines.is_empty() {
        lines.push("");
    }
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let BannerStyle { margins, glyphs } = *style;
    let inner = margins.left + width + margins.right;

    let mut out = String::new();
    push_rule(&mut out, glyphs.top_left, glyphs.top, glyphs.top_right, inner);
    out.push('\n');
    for _ in 0..margins.top {
        push_blank(&mut out, &glyphs, inner);
    }
    for line in &lines {
        out.push(glyphs.left);
        out.push_str(&" ".repeat(margins.left));
        out.push_str(line);
        out.push_str(&" ".repeat(width - line.chars().count() + margins.right));
        out.push(glyphs.right);
        out.push('\n');
    }
    for _ in 0..margins.bottom {
        push_blank(&mut out, &glyphs, inner);
    }
    push_rule(
        &mut out,
        glyphs.bottom_left,
        glyphs.bottom,
        glyphs.bottom_right,
        inner,
    );
    out
}

fn push_rule(out: &mut String, start: char, fill: char, end: char, width: usize) {
    out.push(start);
    out.extend(std::iter::repeat_n(fill, width));
    out.push(end);
}

fn push_blank(out: &mut String, glyphs: &BorderGlyphs, width: usize) {
    out.push(glyphs.left);
    out.push_str(&" ".repeat(width));
    out.push(glyphs.right);
    out.push('\n');
}
