use anyhow::{Context, Result, ensure};
use boxkit::{BorderStyle, BoxOptions, Color, Spacing, TextAlignment};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::greeting::DEFAULT_MESSAGE;

// ============================================================================
// Greet Config
// ============================================================================

/// Top-level config file.
///
/// ```toml
/// message = "Hello! "
///
/// [box]
/// padding = 1
/// margin = { top = 1, left = 2 }
/// border_style = "round"
/// border_color = "green"
/// background_color = "#555555"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreetConfig {
    /// Text shown inside the box
    pub message: String,
    /// How the box is drawn
    #[serde(rename = "box")]
    pub box_options: BoxConfig,
}

impl Default for GreetConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            box_options: BoxConfig::default(),
        }
    }
}

impl GreetConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid TOML")
    }
}

// ============================================================================
// Box Config
// ============================================================================

/// Box options as written in the config file.
///
/// Names are kept as strings here and validated by [`BoxConfig::to_options`]
/// so errors can say which option was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxConfig {
    pub padding: SpacingConfig,
    pub margin: SpacingConfig,
    #[serde(alias = "borderStyle")]
    pub border_style: String,
    #[serde(alias = "borderColor")]
    pub border_color: Option<String>,
    #[serde(alias = "backgroundColor")]
    pub background_color: Option<String>,
    #[serde(alias = "textAlignment")]
    pub text_alignment: Option<String>,
    #[serde(alias = "dimBorder")]
    pub dim_border: bool,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            padding: SpacingConfig::Uniform(1),
            margin: SpacingConfig::Uniform(1),
            border_style: "round".to_string(),
            border_color: Some("green".to_string()),
            background_color: Some("#555555".to_string()),
            text_alignment: None,
            dim_border: false,
        }
    }
}

impl BoxConfig {
    /// Validate every name and build renderer options.
    ///
    /// `border_style` replaces the configured style when given (from
    /// `--border-style`).
    pub fn to_options(&self, border_style: Option<&str>) -> Result<BoxOptions> {
        let style_name = border_style.unwrap_or(&self.border_style);
        let style: BorderStyle = style_name.parse().context("Invalid border_style")?;

        let mut options = BoxOptions::default()
            .with_padding(self.padding.to_spacing("padding")?)
            .with_margin(self.margin.to_spacing("margin")?)
            .with_border_style(style)
            .with_dim_border(self.dim_border);

        if let Some(name) = &self.border_color {
            let color: Color = name.parse().context("Invalid border_color")?;
            options = options.with_border_color(color);
        }
        if let Some(name) = &self.background_color {
            let color: Color = name.parse().context("Invalid background_color")?;
            options = options.with_background_color(color);
        }
        if let Some(name) = &self.text_alignment {
            let alignment: TextAlignment = name.parse().context("Invalid text_alignment")?;
            options = options.with_text_alignment(alignment);
        }

        Ok(options)
    }
}

/// Largest padding or margin accepted on any side, in cells.
pub const MAX_SPACING: usize = 256;

/// Padding or margin: a single number or per-side values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SpacingConfig {
    /// `padding = 1`
    Uniform(usize),
    /// `padding = { top = 1, left = 2 }`
    Sides(SpacingSides),
}

/// Per-side spacing; missing sides are 0, unknown keys are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacingSides {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl SpacingConfig {
    /// Convert to renderer spacing, rejecting values above [`MAX_SPACING`].
    pub fn to_spacing(self, option: &str) -> Result<Spacing> {
        let spacing = match self {
            SpacingConfig::Uniform(n) => {
                ensure!(
                    n <= MAX_SPACING,
                    "Invalid {option}: {n} is larger than {MAX_SPACING}"
                );
                Spacing::uniform(n)
            }
            SpacingConfig::Sides(sides) => {
                Spacing::new(sides.top, sides.right, sides.bottom, sides.left)
            }
        };
        ensure!(
            spacing.max_side() <= MAX_SPACING * 3,
            "Invalid {option}: {} is larger than {}",
            spacing.max_side(),
            MAX_SPACING * 3
        );
        Ok(spacing)
    }
}

// ============================================================================
// Tests
// ============================================================================
