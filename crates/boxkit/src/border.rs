//! Glyph sets for each [`BorderStyle`].

use crate::BorderStyle;

/// The eight glyphs that make up a border.
///
/// Every glyph occupies exactly one terminal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Top-left corner
    pub top_left: char,
    /// Top edge, repeated across the width
    pub top: char,
    /// Top-right corner
    pub top_right: char,
    /// Right edge
    pub right: char,
    /// Bottom-right corner
    pub bottom_right: char,
    /// Bottom edge, repeated across the width
    pub bottom: char,
    /// Bottom-left corner
    pub bottom_left: char,
    /// Left edge
    pub left: char,
}

impl BorderGlyphs {
    const fn new(corners: [char; 4], horizontal: [char; 2], vertical: [char; 2]) -> Self {
        let [top_left, top_right, bottom_right, bottom_left] = corners;
        let [top, bottom] = horizontal;
        let [left, right] = vertical;
        Self {
            top_left,
            top,
            top_right,
            right,
            bottom_right,
            bottom,
            bottom_left,
            left,
        }
    }

    /// Top border line spanning `width` interior columns.
    pub fn top_line(&self, width: usize) -> String {
        Self::line(self.top_left, self.top, self.top_right, width)
    }

    /// Bottom border line spanning `width` interior columns.
    pub fn bottom_line(&self, width: usize) -> String {
        Self::line(self.bottom_left, self.bottom, self.bottom_right, width)
    }

    fn line(start: char, fill: char, end: char, width: usize) -> String {
        let mut line = String::with_capacity((width + 2) * fill.len_utf8());
        line.push(start);
        line.extend(std::iter::repeat_n(fill, width));
        line.push(end);
        line
    }
}

impl BorderStyle {
    /// Glyphs used to draw this style.
    pub const fn glyphs(&self) -> BorderGlyphs {
        match self {
            Self::Single => BorderGlyphs::new(['┌', '┐', '┘', '└'], ['─', '─'], ['│', '│']),
            Self::Double => BorderGlyphs::new(['╔', '╗', '╝', '╚'], ['═', '═'], ['║', '║']),
            Self::Round => BorderGlyphs::new(['╭', '╮', '╯', '╰'], ['─', '─'], ['│', '│']),
            Self::Bold => BorderGlyphs::new(['┏', '┓', '┛', '┗'], ['━', '━'], ['┃', '┃']),
            Self::SingleDouble => {
                BorderGlyphs::new(['╓', '╖', '╜', '╙'], ['─', '─'], ['║', '║'])
            }
            Self::DoubleSingle => {
                BorderGlyphs::new(['╒', '╕', '╛', '╘'], ['═', '═'], ['│', '│'])
            }
            Self::Classic => BorderGlyphs::new(['+', '+', '+', '+'], ['-', '-'], ['|', '|']),
            // Arrows point inward at the content
            Self::Arrow => BorderGlyphs::new(['↘', '↙', '↖', '↗'], ['↓', '↑'], ['→', '←']),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_glyphs() {
        let glyphs = BorderStyle::Round.glyphs();
        assert_eq!(glyphs.top_line(3), "╭───╮");
        assert_eq!(glyphs.bottom_line(3), "╰───╯");
        assert_eq!((glyphs.left, glyphs.right), ('│', '│'));
    }

    #[test]
    fn test_classic_glyphs_are_ascii() {
        let glyphs = BorderStyle::Classic.glyphs();
        assert_eq!(glyphs.top_line(2), "+--+");
        assert!(glyphs.bottom_line(4).is_ascii());
    }

    #[test]
    fn test_arrow_edges_point_inward() {
        let glyphs = BorderStyle::Arrow.glyphs();
        assert_eq!(glyphs.top_line(1), "↘↓↙");
        assert_eq!(glyphs.bottom_line(1), "↗↑↖");
        assert_eq!((glyphs.left, glyphs.right), ('→', '←'));
    }

    #[test]
    fn test_zero_width_line_is_just_corners() {
        assert_eq!(BorderStyle::Double.glyphs().top_line(0), "╔╗");
    }

    #[test]
    fn test_every_glyph_is_one_column() {
        for style in BorderStyle::ALL {
            let line = style.glyphs().top_line(4);
            assert_eq!(console::measure_text_width(&line), 6, "{style}");
        }
    }
}
