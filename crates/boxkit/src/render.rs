//! Turning content and [`BoxOptions`] into a framed block of text.

use crate::{BoxOptions, border::BorderGlyphs};
use colored::{ColoredString, Colorize};
use console::measure_text_width;

/// Measured size of a rendered box, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Visible width of the widest content line
    pub content_width: usize,
    /// Number of content lines
    pub content_rows: usize,
    /// Columns between the left and right border
    pub inner_width: usize,
    /// Visible width of every output line, margins included
    pub total_width: usize,
    /// Number of output lines, margins included
    pub total_rows: usize,
}

/// Split content into lines, measuring each one.
///
/// Empty content has no lines at all.
fn measured_lines(content: &str) -> Vec<(&str, usize)> {
    if content.is_empty() {
        return Vec::new();
    }
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| (line, measure_text_width(line)))
        .collect()
}

/// Compute the size of the box `render` would draw.
pub fn layout(content: &str, options: &BoxOptions) -> Layout {
    let lines = measured_lines(content);
    layout_of(&lines, options)
}

fn layout_of(lines: &[(&str, usize)], options: &BoxOptions) -> Layout {
    let content_width = lines.iter().map(|(_, width)| *width).max().unwrap_or(0);
    let inner_width = content_width + options.padding.horizontal();
    Layout {
        content_width,
        content_rows: lines.len(),
        inner_width,
        total_width: inner_width + 2 + options.margin.horizontal(),
        total_rows: lines.len() + 2 + options.padding.vertical() + options.margin.vertical(),
    }
}

/// Applies the configured colors to border and interior segments.
struct Painter<'a> {
    options: &'a BoxOptions,
}

impl Painter<'_> {
    fn border(&self, text: &str) -> ColoredString {
        let mut styled = text.normal();
        if let Some(color) = self.options.border_color {
            styled = styled.color(color.to_colored());
        }
        if self.options.dim_border {
            styled = styled.dimmed();
        }
        styled
    }

    fn interior(&self, text: &str) -> ColoredString {
        let styled = text.normal();
        match self.options.background_color {
            Some(color) => styled.on_color(color.to_colored()),
            None => styled,
        }
    }
}

/// Draw `content` inside a box.
///
/// Width is measured on visible cells, so content that already carries
/// ANSI styling is framed correctly. Every returned line has the same
/// visible width and the block has no trailing newline.
///
/// ```
/// use boxkit::{BoxOptions, render};
///
/// colored::control::set_override(false);
/// let boxed = render("hi", &BoxOptions::default().with_padding(0));
/// assert_eq!(boxed, "╭──╮\n│hi│\n╰──╯");
/// ```
pub fn render(content: &str, options: &BoxOptions) -> String {
    let lines = measured_lines(content);
    let layout = layout_of(&lines, options);
    let glyphs: BorderGlyphs = options.border_style.glyphs();
    let painter = Painter { options };

    let padding = options.padding;
    let margin = options.margin;
    let margin_left = " ".repeat(margin.left);
    let margin_right = " ".repeat(margin.right);
    let blank_row = " ".repeat(layout.total_width);

    // One interior row framed by side borders and margins
    let framed = |interior: String| {
        format!(
            "{margin_left}{}{}{}{margin_right}",
            painter.border(&glyphs.left.to_string()),
            painter.interior(&interior),
            painter.border(&glyphs.right.to_string()),
        )
    };

    let mut rows = Vec::with_capacity(layout.total_rows);
    rows.extend(std::iter::repeat_n(blank_row.clone(), margin.top));
    rows.push(format!(
        "{margin_left}{}{margin_right}",
        painter.border(&glyphs.top_line(layout.inner_width))
    ));
    for _ in 0..padding.top {
        rows.push(framed(" ".repeat(layout.inner_width)));
    }
    for (line, width) in &lines {
        let (before, after) = options
            .text_alignment
            .split(layout.content_width - width);
        rows.push(framed(format!(
            "{}{line}{}",
            " ".repeat(padding.left + before),
            " ".repeat(after + padding.right),
        )));
    }
    for _ in 0..padding.bottom {
        rows.push(framed(" ".repeat(layout.inner_width)));
    }
    rows.push(format!(
        "{margin_left}{}{margin_right}",
        painter.border(&glyphs.bottom_line(layout.inner_width))
    ));
    rows.extend(std::iter::repeat_n(blank_row, margin.bottom));

    rows.join("\n")
}

// ============================================================================
// Tests
// ============================================================================
