use crate::colors::ColorWrap;
use crate::config::LoggerConfig;
use crate::error::{ConfigError, LogError};
use crate::fragment::{join_fragments, Fragment};
use crate::level::{Level, Stream};
use chrono::{DateTime, Local};
use is_terminal::IsTerminal;
use std::io::{self, Stderr, Stdout, Write};

/// Local time-of-day format, e.g. `3:04:05 PM`
pub const TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Erase the display and move the cursor home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Leveled console logger.
///
/// INFO and DEBUG lines go to the stdout writer, WARN and ERROR lines to the
/// stderr writer. `Logger::new` binds the process streams; tests and embedders
/// can pass any writers through `with_writers`.
pub struct Logger<O = Stdout, E = Stderr> {
    config: LoggerConfig,
    stdout: O,
    stderr: E,
    interactive: bool, // only a terminal gets the clear sequence
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        let stdout = io::stdout();
        let interactive = stdout.is_terminal();
        Self {
            config,
            stdout,
            stderr: io::stderr(),
            interactive,
        }
    }

    /// Build a logger from an untyped option map, see `LoggerConfig::from_value`
    pub fn from_value(options: &serde_json::Value) -> Result<Self, ConfigError> {
        Ok(Self::new(LoggerConfig::from_value(options)?))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl<O: Write, E: Write> Logger<O, E> {
    pub fn with_writers(config: LoggerConfig, stdout: O, stderr: E) -> Self {
        Self {
            config,
            stdout,
            stderr,
            interactive: false,
        }
    }

    /// Treat the stdout writer as a terminal (or not) for `clear`
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn into_writers(self) -> (O, E) {
        (self.stdout, self.stderr)
    }

    pub fn info<I, F>(&mut self, fragments: I) -> Result<(), LogError>
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.log(Level::Info, fragments)
    }

    pub fn warn<I, F>(&mut self, fragments: I) -> Result<(), LogError>
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.log(Level::Warn, fragments)
    }

    /// Log at ERROR. With `trace` enabled, traced fragments print their
    /// trace instead of the short description.
    pub fn error<I, F>(&mut self, fragments: I) -> Result<(), LogError>
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.log(Level::Error, fragments)
    }

    pub fn debug<I, F>(&mut self, fragments: I) -> Result<(), LogError>
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.log(Level::Debug, fragments)
    }

    /// Format and write one line at the given level
    pub fn log<I, F>(&mut self, level: Level, fragments: I) -> Result<(), LogError>
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        let fragments: Vec<Fragment> = fragments.into_iter().map(Into::into).collect();
        let use_trace = level == Level::Error && self.config.trace;
        let msg = join_fragments(&fragments, use_trace);
        let line = format_line(&self.config, level, &msg, &Local::now());

        let writer: &mut dyn Write = match level.stream() {
            Stream::Stdout => &mut self.stdout,
            Stream::Stderr => &mut self.stderr,
        };
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }

    /// Clear the terminal. Writes nothing when stdout is not a terminal.
    pub fn clear(&mut self) -> Result<(), LogError> {
        if !self.interactive {
            return Ok(());
        }
        self.stdout.write_all(CLEAR_SCREEN.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Line prefix: `(<time>) - [<LEVEL>] - ` or `[<LEVEL>] - `
fn prefix(level: Level, timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) => format!("({}) - [{}] - ", ts, level.label()),
        None => format!("[{}] - ", level.label()),
    }
}

/// Render one output line (without the trailing newline).
///
/// The timestamp prefix and the color wrap are applied independently; the
/// wrap covers the whole line including the prefix.
pub fn format_line(
    config: &LoggerConfig,
    level: Level,
    msg: &str,
    now: &DateTime<Local>,
) -> String {
    let timestamp = config
        .timestamps
        .then(|| now.format(TIME_FORMAT).to_string());
    let line = format!("{}{}", prefix(level, timestamp.as_deref()), msg);

    ColorWrap::new(config.colors, level.color(), None).apply(&line)
}
