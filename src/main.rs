use anyhow::Result;
use clap::Parser;
use log::{debug, error, info, warn};

use logtint::cli::Cli;
use logtint::Color;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = cli.color_overrides()?;
    let pairs: Vec<(&str, Color)> = overrides
        .iter()
        .map(|(level, color)| (level.as_str(), *color))
        .collect();
    logtint::init(&pairs, cli.level.into())?;

    debug!("THIS IS A DEBUG MESSAGE");
    info!("THIS IS AN INFO MESSAGE");
    warn!("THIS IS A WARNING MESSAGE");
    error!("THIS IS AN ERROR MESSAGE");
    log::logger().flush();

    Ok(())
}
