// Bookings Timeline
// Lays out a JSON dataset and prints the render model as JSON
//
// Usage: bookings-timeline <data.json> [settings.toml]

use std::path::PathBuf;

use anyhow::{Context, Result};

use bookings_timeline::services::dataset::load_entities;
use bookings_timeline::services::settings::SettingsService;
use bookings_timeline::Timeline;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let data_path = args
        .next()
        .map(PathBuf::from)
        .context("usage: bookings-timeline <data.json> [settings.toml]")?;

    let settings = match args.next() {
        Some(path) => SettingsService::new(path).load()?,
        None => SettingsService::at_default_path().load_or_default(),
    };

    log::info!("Laying out {}", data_path.display());

    let entities = load_entities(&data_path)?;
    let timeline = Timeline::new(settings, &entities)?;
    let model = timeline.render(&entities);

    println!("{}", serde_json::to_string_pretty(&model)?);
    Ok(())
}
