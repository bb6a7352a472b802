use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Error as SerdeError;

use crate::models::entity::Entity;

/// Parse rows in the `[{id, name, series: [...]}, ...]` shape.
pub fn load_entities_from_str(data: &str) -> Result<Vec<Entity>> {
    let entities: Vec<Entity> =
        serde_json::from_str(data).context("failed to deserialize timeline data")?;
    log_undated(&entities);
    Ok(entities)
}

/// Read and parse a JSON dataset from disk.
pub fn load_entities(path: &Path) -> Result<Vec<Entity>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read timeline data from {}", path.display()))?;
    let entities: Vec<Entity> =
        serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    log_undated(&entities);
    Ok(entities)
}

/// Write rows back out, e.g. after gestures have moved blocks.
pub fn save_entities(path: &Path, entities: &[Entity]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(entities)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write timeline data to {}", path.display()))?;
    Ok(())
}

fn log_undated(entities: &[Entity]) {
    let undated = entities
        .iter()
        .flat_map(|entity| entity.blocks.iter())
        .filter(|block| block.range().is_none())
        .count();
    if undated > 0 {
        log::warn!("{} block(s) have missing or invalid dates and will not be placed", undated);
    }
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize timeline data from {}",
        path.display()
    ))
}
