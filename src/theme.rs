use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub background: String,
    /// Color applied when neither an element nor any of its ancestors
    /// (including the owning center) declares one.
    pub fallback_color: String,
    pub panel_fill: String,
}

impl Theme {
    pub fn canvas_default() -> Self {
        Self {
            font_family: "Geist Mono, monospace".to_string(),
            font_size: 14.0,
            background: "#FFFFFF".to_string(),
            fallback_color: "black".to_string(),
            panel_fill: "lightgrey".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            font_family: "Geist Mono, monospace".to_string(),
            font_size: 14.0,
            background: "#111418".to_string(),
            fallback_color: "#E8E8E8".to_string(),
            panel_fill: "#2A2F36".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::canvas_default()
    }
}
