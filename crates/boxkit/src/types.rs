//! Core types describing how a box is drawn.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Lowercase a name and drop `-` and `_` so `singleDouble`,
/// `single-double` and `single_double` all compare equal. Inner spaces are
/// kept, so `"sin gle"` stays unknown.
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Spacing
// ============================================================================

/// Blank cells on each side of something: padding inside the border or
/// margin outside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    /// Blank rows above
    pub top: usize,
    /// Blank columns to the right
    pub right: usize,
    /// Blank rows below
    pub bottom: usize,
    /// Blank columns to the left
    pub left: usize,
}

impl Spacing {
    /// No spacing on any side.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create spacing with explicit values, in CSS order.
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Spacing from a single number.
    ///
    /// Terminal cells are about three times taller than they are wide, so the
    /// horizontal sides get `3 * n` columns to look even with `n` rows.
    /// The horizontal value saturates instead of overflowing.
    pub const fn uniform(n: usize) -> Self {
        let horizontal = n.saturating_mul(3);
        Self::new(n, horizontal, n, horizontal)
    }

    /// Largest single side value.
    pub fn max_side(&self) -> usize {
        self.top.max(self.right).max(self.bottom).max(self.left)
    }

    /// Total columns added (left + right).
    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }

    /// Total rows added (top + bottom).
    pub const fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

impl From<usize> for Spacing {
    fn from(n: usize) -> Self {
        Self::uniform(n)
    }
}

// ============================================================================
// Border Style
// ============================================================================

/// Named set of glyphs used to draw the border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// `┌─┐` thin lines, square corners
    Single,
    /// `╔═╗` double lines
    Double,
    /// `╭─╮` thin lines, rounded corners
    #[default]
    Round,
    /// `┏━┓` heavy lines
    Bold,
    /// `╓─╖` single horizontal, double vertical
    SingleDouble,
    /// `╒═╕` double horizontal, single vertical
    DoubleSingle,
    /// `+-+` plain ASCII
    Classic,
    /// `↘↓↙` arrows pointing at the content
    Arrow,
}

impl BorderStyle {
    /// Every style, in the order they are listed in errors and help text.
    pub const ALL: [Self; 8] = [
        Self::Single,
        Self::Double,
        Self::Round,
        Self::Bold,
        Self::SingleDouble,
        Self::DoubleSingle,
        Self::Classic,
        Self::Arrow,
    ];

    /// Canonical names, matching [`BorderStyle::ALL`].
    pub const NAMES: [&'static str; 8] = [
        "single",
        "double",
        "round",
        "bold",
        "singleDouble",
        "doubleSingle",
        "classic",
        "arrow",
    ];

    /// Canonical name of this style.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Round => "round",
            Self::Bold => "bold",
            Self::SingleDouble => "singleDouble",
            Self::DoubleSingle => "doubleSingle",
            Self::Classic => "classic",
            Self::Arrow => "arrow",
        }
    }
}

impl FromStr for BorderStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|style| normalize(style.name()) == key)
            .ok_or_else(|| Error::UnknownBorderStyle(s.to_string()))
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Color
// ============================================================================

/// Color for the border or the box background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// ANSI black
    Black,
    /// ANSI red
    Red,
    /// ANSI green
    Green,
    /// ANSI yellow
    Yellow,
    /// ANSI blue
    Blue,
    /// ANSI magenta
    Magenta,
    /// ANSI cyan
    Cyan,
    /// ANSI white
    White,
    /// Bright black, also known as gray
    BrightBlack,
    /// Bright red
    BrightRed,
    /// Bright green
    BrightGreen,
    /// Bright yellow
    BrightYellow,
    /// Bright blue
    BrightBlue,
    /// Bright magenta
    BrightMagenta,
    /// Bright cyan
    BrightCyan,
    /// Bright white
    BrightWhite,
    /// 24-bit color from a hex value
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a `#RGB` or `#RRGGBB` hex value.
    pub fn from_hex(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidHex(value.to_string());
        let digits = value.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |i: usize| channel(digits[i..=i].repeat(2).as_str());
                Ok(Self::Rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::Rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    fn base(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "gray" | "grey" => Self::BrightBlack,
            _ => return None,
        };
        Some(color)
    }

    fn brighten(self) -> Option<Self> {
        let color = match self {
            Self::Black => Self::BrightBlack,
            Self::Red => Self::BrightRed,
            Self::Green => Self::BrightGreen,
            Self::Yellow => Self::BrightYellow,
            Self::Blue => Self::BrightBlue,
            Self::Magenta => Self::BrightMagenta,
            Self::Cyan => Self::BrightCyan,
            Self::White => Self::BrightWhite,
            _ => return None,
        };
        Some(color)
    }

    pub(crate) fn to_colored(self) -> colored::Color {
        use colored::Color as C;
        match self {
            Self::Black => C::Black,
            Self::Red => C::Red,
            Self::Green => C::Green,
            Self::Yellow => C::Yellow,
            Self::Blue => C::Blue,
            Self::Magenta => C::Magenta,
            Self::Cyan => C::Cyan,
            Self::White => C::White,
            Self::BrightBlack => C::BrightBlack,
            Self::BrightRed => C::BrightRed,
            Self::BrightGreen => C::BrightGreen,
            Self::BrightYellow => C::BrightYellow,
            Self::BrightBlue => C::BrightBlue,
            Self::BrightMagenta => C::BrightMagenta,
            Self::BrightCyan => C::BrightCyan,
            Self::BrightWhite => C::BrightWhite,
            Self::Rgb(r, g, b) => C::TrueColor { r, g, b },
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim_start().starts_with('#') {
            return Self::from_hex(s);
        }

        let key = normalize(s);
        let unknown = || Error::UnknownColor(s.to_string());

        if let Some(color) = Self::base(&key) {
            return Ok(color);
        }

        // redBright, bright-red and bright_red all mean the same thing
        let base = key
            .strip_suffix("bright")
            .or_else(|| key.strip_prefix("bright"))
            .ok_or_else(unknown)?;
        Self::base(base)
            .and_then(Self::brighten)
            .ok_or_else(unknown)
    }
}

// ============================================================================
// Text Alignment
// ============================================================================

/// Placement of lines narrower than the widest content line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Flush left (default)
    #[default]
    Left,
    /// Centered, extra column on the right when the gap is odd
    Center,
    /// Flush right
    Right,
}

impl TextAlignment {
    /// Split `gap` blank columns into (before, after) the line.
    pub const fn split(&self, gap: usize) -> (usize, usize) {
        match self {
            Self::Left => (0, gap),
            Self::Center => (gap / 2, gap - gap / 2),
            Self::Right => (gap, 0),
        }
    }
}

impl FromStr for TextAlignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(Error::UnknownAlignment(s.to_string())),
        }
    }
}

// ============================================================================
// Box Options
// ============================================================================

/// Everything that controls how a box is drawn.
///
/// The default is a round border with one unit of padding and no margin or
/// colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxOptions {
    /// Blank space between the border and the content
    pub padding: Spacing,
    /// Blank space outside the border
    pub margin: Spacing,
    /// Border glyph set
    pub border_style: BorderStyle,
    /// Color applied to the border glyphs
    pub border_color: Option<Color>,
    /// Color applied behind the content and padding
    pub background_color: Option<Color>,
    /// Placement of lines narrower than the widest one
    pub text_alignment: TextAlignment,
    /// Draw the border dimmed
    pub dim_border: bool,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            padding: Spacing::uniform(1),
            margin: Spacing::ZERO,
            border_style: BorderStyle::default(),
            border_color: None,
            background_color: None,
            text_alignment: TextAlignment::default(),
            dim_border: false,
        }
    }
}

impl BoxOptions {
    /// Build options from plain numbers and names, validating each name.
    ///
    /// Fails on the first unknown border style or color instead of falling
    /// back to a default.
    pub fn from_names(
        padding: usize,
        margin: usize,
        border_style: &str,
        border_color: Option<&str>,
        background_color: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            padding: Spacing::uniform(padding),
            margin: Spacing::uniform(margin),
            border_style: border_style.parse()?,
            border_color: border_color.map(str::parse).transpose()?,
            background_color: background_color.map(str::parse).transpose()?,
            ..Self::default()
        })
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: impl Into<Spacing>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin: impl Into<Spacing>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Set the border style.
    pub fn with_border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    /// Set the border color.
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Set the background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set the text alignment.
    pub fn with_text_alignment(mut self, alignment: TextAlignment) -> Self {
        self.text_alignment = alignment;
        self
    }

    /// Dim the border.
    pub fn with_dim_border(mut self, dim: bool) -> Self {
        self.dim_border = dim;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_uniform_triples_horizontal() {
        let spacing = Spacing::uniform(2);
        assert_eq!(spacing, Spacing::new(2, 6, 2, 6));
        assert_eq!(spacing.vertical(), 4);
        assert_eq!(spacing.horizontal(), 12);
        assert_eq!(Spacing::from(0), Spacing::ZERO);
    }

    #[test]
    fn test_spacing_uniform_saturates() {
        let spacing = Spacing::uniform(usize::MAX / 2);
        assert_eq!(spacing.left, usize::MAX);
        assert_eq!(spacing.top, usize::MAX / 2);
        assert_eq!(spacing.max_side(), usize::MAX);
    }

    #[test]
    fn test_border_style_parse_all_names() {
        for (style, name) in BorderStyle::ALL.iter().zip(BorderStyle::NAMES) {
            assert_eq!(name.parse::<BorderStyle>().unwrap(), *style);
            assert_eq!(style.name(), name);
        }
    }

    #[test]
    fn test_border_style_parse_case_variants() {
        assert_eq!("ROUND".parse::<BorderStyle>().unwrap(), BorderStyle::Round);
        assert_eq!(
            "single-double".parse::<BorderStyle>().unwrap(),
            BorderStyle::SingleDouble
        );
        assert_eq!(
            "double_single".parse::<BorderStyle>().unwrap(),
            BorderStyle::DoubleSingle
        );
    }

    #[test]
    fn test_border_style_rejects_unknown() {
        let err = "not-a-style".parse::<BorderStyle>().unwrap_err();
        assert_eq!(err, Error::UnknownBorderStyle("not-a-style".to_string()));
        assert!("".parse::<BorderStyle>().is_err());
    }

    #[test]
    fn test_border_style_rejects_inner_spaces() {
        for name in ["sin gle", "ro und", "single double"] {
            assert_eq!(
                name.parse::<BorderStyle>().unwrap_err(),
                Error::UnknownBorderStyle(name.to_string())
            );
        }
        assert_eq!(" round ".parse::<BorderStyle>().unwrap(), BorderStyle::Round);
    }

    #[test]
    fn test_color_named() {
        assert_eq!("green".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("White".parse::<Color>().unwrap(), Color::White);
        assert_eq!("gray".parse::<Color>().unwrap(), Color::BrightBlack);
        assert_eq!("grey".parse::<Color>().unwrap(), Color::BrightBlack);
    }

    #[test]
    fn test_color_bright_variants() {
        assert_eq!("redBright".parse::<Color>().unwrap(), Color::BrightRed);
        assert_eq!("bright-red".parse::<Color>().unwrap(), Color::BrightRed);
        assert_eq!("cyan_bright".parse::<Color>().unwrap(), Color::BrightCyan);
        assert!("grayBright".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(
            "#555555".parse::<Color>().unwrap(),
            Color::Rgb(0x55, 0x55, 0x55)
        );
        assert_eq!("#fA0".parse::<Color>().unwrap(), Color::Rgb(0xff, 0xaa, 0x00));
    }

    #[test]
    fn test_color_hex_invalid() {
        for value in ["#", "#12", "#1234", "#gggggg", "#12345678"] {
            assert_eq!(
                value.parse::<Color>().unwrap_err(),
                Error::InvalidHex(value.to_string())
            );
        }
    }

    #[test]
    fn test_color_unknown() {
        assert_eq!(
            "chartreuse".parse::<Color>().unwrap_err(),
            Error::UnknownColor("chartreuse".to_string())
        );
        assert!("bright".parse::<Color>().is_err());
    }

    #[test]
    fn test_text_alignment_split() {
        assert_eq!(TextAlignment::Left.split(5), (0, 5));
        assert_eq!(TextAlignment::Center.split(5), (2, 3));
        assert_eq!(TextAlignment::Right.split(5), (5, 0));
        assert_eq!("centre".parse::<TextAlignment>().unwrap(), TextAlignment::Center);
        assert!("justify".parse::<TextAlignment>().is_err());
    }

    #[test]
    fn test_from_names_valid() {
        let options =
            BoxOptions::from_names(1, 1, "round", Some("green"), Some("#555555")).unwrap();
        assert_eq!(options.padding, Spacing::new(1, 3, 1, 3));
        assert_eq!(options.margin, Spacing::new(1, 3, 1, 3));
        assert_eq!(options.border_style, BorderStyle::Round);
        assert_eq!(options.border_color, Some(Color::Green));
        assert_eq!(options.background_color, Some(Color::Rgb(0x55, 0x55, 0x55)));
    }

    #[test]
    fn test_from_names_rejects_bad_style() {
        let err = BoxOptions::from_names(1, 1, "not-a-style", None, None).unwrap_err();
        assert!(matches!(err, Error::UnknownBorderStyle(_)));
    }

    #[test]
    fn test_from_names_rejects_bad_color() {
        let err = BoxOptions::from_names(1, 1, "round", Some("nope"), None).unwrap_err();
        assert!(matches!(err, Error::UnknownColor(_)));
        let err = BoxOptions::from_names(1, 1, "round", None, Some("#xyz")).unwrap_err();
        assert!(matches!(err, Error::InvalidHex(_)));
    }
}
