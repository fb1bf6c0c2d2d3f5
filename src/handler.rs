use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Mutex;

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

use crate::color::Color;
use crate::stream::{is_broken_pipe, ConsoleStream, ExitCode, StderrStream};

/// Map a host log level onto the severity names the color map is keyed by
pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Severity-name to color mapping with an explicit no-styling fallback.
///
/// Defaults cover DEBUG, INFO, WARNING, ERROR and CRITICAL; overrides replace
/// entries key-by-key and may introduce new keys for hosts with their own
/// severity naming. Unknown names resolve to [`Color::CLEAR`].
#[derive(Debug, Clone)]
pub struct SeverityColors {
    map: HashMap<String, Color>,
}

impl SeverityColors {
    pub fn new(overrides: &[(&str, Color)]) -> Self {
        let mut map = HashMap::from([
            ("DEBUG".to_string(), Color::BLUE),
            ("INFO".to_string(), Color::CYAN),
            ("WARNING".to_string(), Color::YELLOW),
            ("ERROR".to_string(), Color::RED),
            (
                "CRITICAL".to_string(),
                Color::WHITE.with_background(Color::RED).bold(),
            ),
        ]);
        for (level, color) in overrides {
            map.insert((*level).to_string(), *color);
        }
        SeverityColors { map }
    }

    /// Color for a severity name, falling back to no styling
    pub fn get(&self, level: &str) -> Color {
        self.map.get(level).copied().unwrap_or(Color::CLEAR)
    }
}

impl Default for SeverityColors {
    fn default() -> Self {
        Self::new(&[])
    }
}

/// Formats a host log record into the line the handler writes out.
///
/// Closures of the right shape implement this, so a custom layout is
/// `handler.set_format(|record| ...)`.
pub trait RecordFormat: Send + Sync {
    fn format(&self, record: &Record) -> String;
}

impl<F> RecordFormat for F
where
    F: Fn(&Record) -> String + Send + Sync,
{
    fn format(&self, record: &Record) -> String {
        self(record)
    }
}

/// The classic `LEVEL:target:message` line
pub struct DefaultFormat;

impl RecordFormat for DefaultFormat {
    fn format(&self, record: &Record) -> String {
        format!(
            "{}:{}:{}",
            level_name(record.level()),
            record.target(),
            record.args()
        )
    }
}

/// Output handler that colorizes formatted records on interactive terminals.
///
/// Each emitted record is formatted by the configured [`RecordFormat`],
/// wrapped in its severity's SGR codes when (and only when) the stream is an
/// interactive terminal, then written with a trailing newline and flushed.
/// The interactivity check runs on every call; stream state is not cached.
pub struct ColorWrapper<S: ConsoleStream = StderrStream> {
    colors: SeverityColors,
    stream: S,
    format: Box<dyn RecordFormat>,
}

impl ColorWrapper<StderrStream> {
    /// Handler writing to stderr with the default line format
    pub fn new(overrides: &[(&str, Color)]) -> Self {
        Self::with_stream(overrides, StderrStream::new())
    }
}

impl<S: ConsoleStream> ColorWrapper<S> {
    pub fn with_stream(overrides: &[(&str, Color)], stream: S) -> Self {
        ColorWrapper {
            colors: SeverityColors::new(overrides),
            stream,
            format: Box::new(DefaultFormat),
        }
    }

    /// Replace the record formatter
    pub fn set_format(&mut self, format: impl RecordFormat + 'static) {
        self.format = Box::new(format);
    }

    pub fn is_interactive(&self) -> bool {
        self.stream.is_interactive()
    }

    /// Format a record, colorized iff the stream is currently interactive
    pub fn format_record(&self, record: &Record) -> String {
        let text = self.format.format(record);
        if self.is_interactive() {
            self.colors.get(level_name(record.level())).render(&text)
        } else {
            text
        }
    }

    /// Write a record to the stream: formatted line, newline, flush.
    ///
    /// A broken pipe means the reader is gone and exits the process with the
    /// conventional 141, like any well-behaved pipeline writer. Every other
    /// write failure is reported on stderr and swallowed; emission problems
    /// never propagate into the caller.
    pub fn emit(&mut self, record: &Record) {
        if let Err(err) = self.try_emit(record) {
            if is_broken_pipe(&err) {
                ExitCode::SignalPipe.exit();
            }
            self.handle_error(record, &err);
        }
    }

    fn try_emit(&mut self, record: &Record) -> io::Result<()> {
        let line = self.format_record(record);
        self.stream.write_all(line.as_bytes())?;
        self.stream.write_all(b"\n")?;
        self.stream.flush()
    }

    fn handle_error(&mut self, record: &Record, err: &io::Error) {
        // Out-of-band report; a failure here has nowhere left to go
        let _ = writeln!(
            io::stderr(),
            "logtint: failed to emit {} record: {}",
            level_name(record.level()),
            err
        );
    }

    pub fn flush(&mut self) {
        let _ = self.stream.flush();
    }
}

/// The handler list for a host's top-level logging configuration: exactly one
/// configured [`ColorWrapper`]
pub fn handlers(overrides: &[(&str, Color)]) -> Vec<ColorWrapper> {
    vec![ColorWrapper::new(overrides)]
}

/// `log::Log` adapter around a [`ColorWrapper`].
///
/// The handler itself is single-threaded; the facade may log from any thread,
/// so serialization lives here, in the adapter.
pub struct ColorLogger<S: ConsoleStream + Send = StderrStream> {
    handler: Mutex<ColorWrapper<S>>,
}

impl<S: ConsoleStream + Send> ColorLogger<S> {
    pub fn new(handler: ColorWrapper<S>) -> Self {
        ColorLogger {
            handler: Mutex::new(handler),
        }
    }
}

impl<S: ConsoleStream + Send> log::Log for ColorLogger<S> {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // Level filtering is the facade's job, via log::set_max_level
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut handler) = self.handler.lock() {
            handler.emit(record);
        }
    }

    fn flush(&self) {
        if let Ok(mut handler) = self.handler.lock() {
            handler.flush();
        }
    }
}

/// Install a colorizing handler as the global logger
pub fn init(overrides: &[(&str, Color)], level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ColorLogger::new(ColorWrapper::new(overrides))))?;
    log::set_max_level(level);
    Ok(())
}
