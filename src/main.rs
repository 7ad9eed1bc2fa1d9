use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use conlog::{Fragment, Level, Logger, LoggerConfig};

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
enum Command {
    #[value(name = "info", help = "Informational message (stdout, cyan)")]
    Info,
    #[value(name = "warn", help = "Warning (stderr, yellow)")]
    Warn,
    #[value(name = "error", help = "Error, renders traces (stderr, red)")]
    Error,
    #[value(name = "debug", help = "Debug output (stdout, green)")]
    Debug,
    #[value(name = "clear", help = "Clear the terminal (no-op when not a TTY)")]
    Clear,
}

impl Command {
    fn level(self) -> Option<Level> {
        match self {
            Command::Info => Some(Level::Info),
            Command::Warn => Some(Level::Warn),
            Command::Error => Some(Level::Error),
            Command::Debug => Some(Level::Debug),
            Command::Clear => None,
        }
    }
}

#[derive(Parser)]
#[command(name = "conlog")]
#[command(about = "Print leveled, colored, timestamped console messages")]
#[command(version)]
struct Args {
    /// Message level (or `clear`)
    #[arg(value_enum, value_name = "LEVEL")]
    command: Command,

    /// Message fragments, joined with a single space. Everything after LEVEL
    /// is message text, including words that start with `-`.
    #[arg(value_name = "MESSAGE", trailing_var_arg = true, allow_hyphen_values = true)]
    message: Vec<String>,

    /// Logger options file (.json, .yaml, .yml or .toml)
    #[arg(short = 'c', long = "config", conflicts_with = "options")]
    config_file: Option<PathBuf>,

    /// Logger options as an inline JSON object
    #[arg(long, value_name = "JSON")]
    options: Option<String>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Disable the time-of-day prefix
    #[arg(long)]
    no_timestamps: bool,

    /// Print the short description of errors instead of their trace
    #[arg(long)]
    no_trace: bool,

    /// Trace text for the message, rendered by `error` when tracing is on
    #[arg(long, value_name = "TEXT")]
    trace_text: Option<String>,
}

impl Args {
    fn logger_config(&self) -> anyhow::Result<LoggerConfig> {
        let mut config = if let Some(path) = &self.config_file {
            LoggerConfig::from_file(path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?
        } else if let Some(json) = &self.options {
            LoggerConfig::from_json_str(json).context("Invalid --options")?
        } else {
            LoggerConfig::default()
        };

        // Flags can only switch options off
        config.colors &= !self.no_color;
        config.timestamps &= !self.no_timestamps;
        config.trace &= !self.no_trace;
        Ok(config)
    }

    fn fragments(&self) -> Vec<Fragment> {
        match &self.trace_text {
            Some(trace) => vec![Fragment::traced(self.message.join(" "), trace.as_str())],
            None => self.message.iter().map(Fragment::from).collect(),
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = args.logger_config()?;
    let mut logger = Logger::new(config);

    match args.command.level() {
        Some(level) => logger
            .log(level, args.fragments())
            .context("Failed to write log line")?,
        None => logger.clear().context("Failed to clear terminal")?,
    }

    Ok(())
}
