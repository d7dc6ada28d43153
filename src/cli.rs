use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::paths::ENV_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "greetbox")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Print a greeting inside a rounded, colored box", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// When to emit colors and text styling
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    /// TOML file with box options (defaults to <config dir>/greetbox/config.toml)
    #[arg(short, long, env = ENV_CONFIG_FILE)]
    pub config: Option<PathBuf>,

    /// Border style, overriding the config file
    /// (single, double, round, bold, singleDouble, doubleSingle, classic, arrow)
    #[arg(long)]
    pub border_style: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["greetbox"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert!(cli.border_style.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "greetbox",
            "-vv",
            "--color",
            "never",
            "--border-style",
            "double",
            "--config",
            "/tmp/greetbox.toml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.border_style.as_deref(), Some("double"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/greetbox.toml")));
    }

    #[test]
    fn test_completions_subcommand() {
        let cli = Cli::try_parse_from(["greetbox", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Completions { shell: Shell::Bash })
        ));
    }

    #[test]
    fn test_invalid_color_choice() {
        assert!(Cli::try_parse_from(["greetbox", "--color", "sometimes"]).is_err());
    }
}
