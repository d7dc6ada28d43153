mod cli;
mod config;
mod greeting;
mod output;
mod paths;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use config::GreetConfig;
use greeting::Greeting;
use paths::ConfigSource;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(Command::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "greetbox", &mut io::stdout());
        return Ok(());
    }

    ui::apply_color_choice(cli.color);

    let config = match paths::config_source(cli.config.as_deref()) {
        ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => {
            log::debug!("Loading config from {}", path.display());
            GreetConfig::load(&path)?
        }
        ConfigSource::Defaults => {
            log::debug!("No config file, using built-in defaults");
            GreetConfig::default()
        }
    };

    let options = config
        .box_options
        .to_options(cli.border_style.as_deref())?;
    let greeting = Greeting::new(config.message);
    log::info!("Greeting: {:?}", greeting.text());
    let content = greeting.render();

    let layout = boxkit::layout(&content, &options);
    log::debug!(
        "Rendering {}x{} box ({} border)",
        layout.total_width,
        layout.total_rows,
        options.border_style
    );

    let block = boxkit::render(&content, &options);
    output::emit(&mut io::stdout().lock(), &block)
}
