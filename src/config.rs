use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageConfig {
    /// Width given to an image with no declared width on wide viewports.
    pub default_width: f32,
    /// Subtracted from the viewport width to size images on narrow
    /// viewports.
    pub narrow_margin: f32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            default_width: 400.0,
            narrow_margin: 50.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipeConfig {
    /// Upper bound on the rounded-corner radius; short segments clamp it
    /// further so the arc never overshoots either leg.
    pub max_corner_radius: f32,
    pub stroke_width: f32,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            max_corner_radius: 50.0,
            stroke_width: 1.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeasureConfig {
    /// How long the embedder should let the first paint settle before
    /// scheduling the measurement pass. The session itself is driven by the
    /// explicit paint-committed signal, not this timer.
    pub settle_delay_ms: u64,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportConfig {
    /// Viewports at or below this width get narrow-mode image sizing.
    pub narrow_breakpoint: f32,
    /// Suggested animation length for jump-to-center transitions.
    pub jump_duration_ms: u64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 700.0,
            jump_duration_ms: 750,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub image: ImageConfig,
    pub pipe: PipeConfig,
    pub measure: MeasureConfig,
    pub viewport: ViewportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&contents)?;
    Ok(config)
}
