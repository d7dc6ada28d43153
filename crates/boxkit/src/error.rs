//! Error types for box configuration.
//!
//! Rendering itself never fails. Every error here is raised while turning
//! user-supplied names (border styles, colors) into typed options, so a bad
//! configuration is rejected before anything is drawn.

use thiserror::Error;

/// Errors that can occur while building [`BoxOptions`](crate::BoxOptions).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Border style name is not one of the known glyph sets
    #[error("unknown border style \"{0}\" (expected one of: {expected})", expected = crate::BorderStyle::NAMES.join(", "))]
    UnknownBorderStyle(String),

    /// Color name is not a known ANSI color
    #[error("unknown color \"{0}\" (expected a color name like \"green\" or a hex value like \"#555555\")")]
    UnknownColor(String),

    /// Value starts with `#` but is not a 3 or 6 digit hex color
    #[error("invalid hex color \"{0}\" (expected #RGB or #RRGGBB)")]
    InvalidHex(String),

    /// Text alignment is not left, center or right
    #[error("unknown text alignment \"{0}\" (expected left, center or right)")]
    UnknownAlignment(String),
}

/// Result type for box configuration.
pub type Result<T> = std::result::Result<T, Error>;
