#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate, clippy::module_name_repetitions)]

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use pixel_engine_edit::{Color, DrawingSession};

use crate::options::{OutputFormat, Options};

mod options;
mod render;
mod script;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(help = "Draw script to run, reads stdin if omitted.")]
    path: Option<PathBuf>,

    #[arg(help = "Grid size (cells per side).", long, short)]
    size: Option<i32>,

    #[arg(help = "Background color, e.g. #ffffff or rgb(255,255,255).", long, short, value_parser = parse_color)]
    background: Option<Color>,

    #[arg(help = "Options file to use instead of the one in the config directory.", long)]
    config: Option<PathBuf>,

    #[arg(help = "Print the effective options as toml and exit.", long, default_value_t = false)]
    print_config: bool,

    #[arg(help = "Store the effective options in the config directory.", long, default_value_t = false)]
    save_config: bool,

    #[arg(help = "Output format of the grid.", long, value_enum)]
    format: Option<OutputFormat>,
}

fn parse_color(text: &str) -> Result<Color, String> {
    Color::from_hex(text).map_err(|e| e.to_string())
}

fn start_logger() -> Option<LoggerHandle> {
    let Some(log_dir) = Options::log_dir() else {
        eprintln!("Failed to create log file");
        return Logger::try_with_env_or_str("warn").ok()?.start().ok();
    };
    Logger::try_with_env_or_str("info")
        .ok()?
        .log_to_file(FileSpec::default().directory(&log_dir).basename("pixel_play").suffix("log").suppress_timestamp())
        .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
        .create_symlink(log_dir.join("pixel_play.log"))
        .duplicate_to_stderr(Duplicate::Warn)
        .start()
        .ok()
}

fn load_options(args: &Cli) -> anyhow::Result<Options> {
    let mut options = match &args.config {
        Some(path) => Options::load_from(path)?,
        None => Options::load_options(),
    };
    if let Some(size) = args.size {
        options.session.grid_size = size;
    }
    if let Some(background) = args.background {
        options.session.background = background;
    }
    if let Some(format) = args.format {
        options.format = format;
    }
    Ok(options)
}

fn read_script(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading script {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("reading script from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let _logger = start_logger();

    let options = load_options(&args)?;
    if args.save_config {
        options.store_options();
    }
    if args.print_config {
        print!("{}", toml::to_string(&options)?);
        return Ok(());
    }

    let mut session = DrawingSession::from_settings(&options.session).context("creating drawing session")?;
    let text = read_script(args.path.as_ref())?;
    let commands = script::parse_script(&text)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = script::run(&mut session, &commands, options.format, &mut out)?;
    log::info!(
        "ran {} commands, {} cells changed, {} rejected",
        report.commands,
        report.changed_cells,
        report.rejected
    );

    render::write_grid(&mut out, &session, options.format)?;
    out.flush()?;
    Ok(())
}
