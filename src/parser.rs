use crate::ir::FocusCenter;
use anyhow::{Context, Result};
use std::path::Path;

/// Deserializes a content-store export: a JSON array of focus centers with
/// their nested element trees, in the shape the CMS query produces. The
/// core performs no fetching; the export arrives fully formed.
pub fn parse_scene(input: &str) -> Result<Vec<FocusCenter>> {
    let centers: Vec<FocusCenter> =
        serde_json::from_str(input).context("invalid focus-center export")?;
    Ok(centers)
}

pub fn read_scene(path: &Path) -> Result<Vec<FocusCenter>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading scene {}", path.display()))?;
    parse_scene(&contents)
}
