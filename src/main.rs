//! Standalone planetscape viewer.
//!
//! Opens a window with the animated backdrop. The mouse wheel scrolls a
//! virtual page; Shift+D (by default) toggles the debug orbit camera.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use planetscape::{Options, PlanetscapeError, Viewer};

/// Animated planet backdrop with a scroll-driven camera.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML options file; missing fields keep their defaults.
    #[arg(short, long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Window title.
    #[arg(long, default_value = "Planetscape")]
    title: String,

    /// Print the JSON schema of the tunable options and exit.
    #[arg(long)]
    print_schema: bool,

    /// Print the default options as TOML and exit.
    #[arg(long)]
    print_defaults: bool,
}

fn write_stdout(text: &str) -> Result<(), PlanetscapeError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), PlanetscapeError> {
    if cli.print_schema {
        let schema = serde_json::to_string_pretty(&Options::json_schema())
            .map_err(|e| PlanetscapeError::OptionsParse(e.to_string()))?;
        return write_stdout(&schema);
    }
    if cli.print_defaults {
        return write_stdout(&Options::default().to_toml()?);
    }

    let options = match &cli.options {
        Some(path) => {
            log::info!("loading options from {}", path.display());
            Options::load(path)?
        }
        None => Options::default(),
    };

    Viewer::builder()
        .with_options(options)
        .with_title(cli.title)
        .build()
        .run()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
