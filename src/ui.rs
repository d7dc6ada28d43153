use colored::Colorize;

use crate::cli::ColorChoice;

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Decide whether to emit colors.
///
/// `auto` follows the terminal: `NO_COLOR` (non-empty) turns styling off,
/// otherwise `console` decides from whether stdout is a color-capable
/// terminal and from `CLICOLOR` / `CLICOLOR_FORCE`.
pub fn should_colorize(choice: ColorChoice) -> bool {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    resolve_color(choice, no_color, console::colors_enabled())
}

fn resolve_color(choice: ColorChoice, no_color: bool, terminal_colors: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => !no_color && terminal_colors,
    }
}

/// Apply the color decision to both styling crates.
pub fn apply_color_choice(choice: ColorChoice) {
    let enabled = should_colorize(choice);
    colored::control::set_override(enabled);
    console::set_colors_enabled(enabled);
    log::debug!("Color choice {choice:?} resolved to {enabled}");
}

// ============================================================================
// Tests
// ============================================================================
