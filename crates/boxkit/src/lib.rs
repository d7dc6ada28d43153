//! # boxkit
//!
//! Draw bordered boxes around terminal text.
//!
//! This crate frames a block of text with:
//! - **Borders**: round, single, double, bold, mixed, classic ASCII, arrows
//! - **Spacing**: padding inside the border, margin outside it
//! - **Colors**: border color and interior background, named or hex
//! - **Alignment**: left, center or right placement of short lines
//!
//! ## Quick Start
//!
//! ```no_run
//! use boxkit::{BoxOptions, render};
//!
//! let options = BoxOptions::from_names(1, 1, "round", Some("green"), Some("#555555"))
//!     .expect("valid options");
//! println!("{}", render("Hello! ", &options));
//! ```
//!
//! ## Width Measurement
//!
//! Widths are measured in visible terminal cells, so content that is already
//! styled with ANSI escapes (or contains wide characters) lines up with the
//! border. Colors are emitted through `colored`, which honors its global
//! override and the usual `NO_COLOR` / `CLICOLOR` conventions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod border;
pub mod error;
pub mod render;
pub mod types;

// Re-export commonly used items at crate root for convenience
pub use border::BorderGlyphs;
pub use error::{Error, Result};
pub use render::{Layout, layout, render};
pub use types::{BorderStyle, BoxOptions, Color, Spacing, TextAlignment};
