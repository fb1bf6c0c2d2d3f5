// Severity-aware ANSI colorization for log output

pub mod cli;

mod color;
mod handler;
mod stream;

pub use color::Color;
pub use handler::{
    handlers, init, level_name, ColorLogger, ColorWrapper, DefaultFormat, RecordFormat,
    SeverityColors,
};
pub use stream::{ConsoleStream, StderrStream, StdoutStream};
