// Command-line interface for the demo binary

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;

use crate::color::Color;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum LevelArg {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl From<LevelArg> for LevelFilter {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Trace => LevelFilter::Trace,
            LevelArg::Debug => LevelFilter::Debug,
            LevelArg::Info => LevelFilter::Info,
            LevelArg::Warning => LevelFilter::Warn,
            LevelArg::Error => LevelFilter::Error,
        }
    }
}

#[derive(Parser)]
#[command(name = "logtint")]
#[command(about = "Emit sample log messages colorized by severity")]
#[command(
    long_about = "Emit sample log messages colorized by severity\n\nColors are applied only when the output is an interactive terminal; redirect\nor pipe the output and the messages come through plain.\n\nEXAMPLES:\n  logtint\n  logtint --level warning\n  logtint --color ERROR=magenta --color CRITICAL=white-on-red-bold"
)]
#[command(version)]
pub struct Cli {
    /// Minimum severity to emit
    #[arg(long, value_enum, default_value = "debug")]
    pub level: LevelArg,

    /// Override a severity color as LEVEL=SPEC, where SPEC is a palette name
    /// (black, red, green, yellow, blue, magenta, cyan, white, clear) with
    /// optional "-on-<color>" and "-bold" modifiers. Repeatable.
    #[arg(long = "color", value_name = "LEVEL=SPEC")]
    pub colors: Vec<String>,
}

impl Cli {
    /// Parse all --color arguments into severity-map override pairs
    pub fn color_overrides(&self) -> Result<Vec<(String, Color)>> {
        self.colors.iter().map(|spec| parse_color_spec(spec)).collect()
    }
}

fn palette(name: &str) -> Option<Color> {
    match name {
        "clear" => Some(Color::CLEAR),
        "black" => Some(Color::BLACK),
        "red" => Some(Color::RED),
        "green" => Some(Color::GREEN),
        "yellow" => Some(Color::YELLOW),
        "blue" => Some(Color::BLUE),
        "magenta" => Some(Color::MAGENTA),
        "cyan" => Some(Color::CYAN),
        "white" => Some(Color::WHITE),
        _ => None,
    }
}

/// Parse a LEVEL=SPEC override like `ERROR=magenta` or
/// `CRITICAL=white-on-red-bold`
pub fn parse_color_spec(spec: &str) -> Result<(String, Color)> {
    let (level, style) = spec
        .split_once('=')
        .with_context(|| format!("expected LEVEL=SPEC, got '{spec}'"))?;
    if level.is_empty() {
        bail!("missing severity name in '{spec}'");
    }

    let mut color = Color::CLEAR;
    let mut saw_foreground = false;
    let mut tokens = style.split('-');
    while let Some(token) = tokens.next() {
        match token {
            "bold" => color = color.bold(),
            "on" => {
                let name = tokens
                    .next()
                    .with_context(|| format!("'on' needs a color name in '{style}'"))?;
                let background = palette(name)
                    .with_context(|| format!("unknown background color '{name}'"))?;
                color = color.with_background(background);
            }
            name => {
                if saw_foreground {
                    bail!("more than one foreground color in '{style}'");
                }
                let foreground = palette(name)
                    .with_context(|| format!("unknown color '{name}'"))?;
                color = Color {
                    foreground: foreground.foreground,
                    ..color
                };
                saw_foreground = true;
            }
        }
    }
    Ok((level.to_string(), color))
}
