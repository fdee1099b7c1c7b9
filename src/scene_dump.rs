use crate::layout::Scene;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSON projection of a resolved scene, the hand-off to the rendering
/// layer: sorted elements for drawing, stroke/path pairs per connection,
/// and center anchors for jump-to-center navigation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDump {
    pub centers: Vec<CenterDump>,
    pub elements: Vec<ElementDump>,
    pub connections: Vec<ConnectionDump>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterDump {
    pub id: String,
    pub title: String,
    pub x: f32,
    pub y: f32,
    pub color: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDump {
    pub id: String,
    pub kind: String,
    pub abs: [f32; 2],
    pub rel: [f32; 2],
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub color: String,
    pub center_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDump {
    pub center_id: String,
    pub stroke: String,
    pub path: String,
}

impl SceneDump {
    pub fn from_scene(scene: &Scene) -> Self {
        let centers = scene
            .centers
            .iter()
            .map(|center| CenterDump {
                id: center.id.clone(),
                title: center.title.clone(),
                x: center.x,
                y: center.y,
                color: center.color.clone(),
            })
            .collect();

        let elements = scene
            .elements
            .iter()
            .map(|el| ElementDump {
                id: el.id.clone(),
                kind: format!("{:?}", el.kind),
                abs: [el.abs_x, el.abs_y],
                rel: [el.rel_x, el.rel_y],
                width: el.width,
                height: el.height,
                color: el.color.clone(),
                center_id: el.center_id.clone(),
            })
            .collect();

        let connections = scene
            .connections
            .iter()
            .map(|connection| ConnectionDump {
                center_id: connection.center_id.clone(),
                stroke: connection.stroke.clone(),
                path: connection.path.to_svg(),
            })
            .collect();

        SceneDump {
            centers,
            elements,
            connections,
        }
    }
}

pub fn write_scene_dump(path: &Path, scene: &Scene) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &SceneDump::from_scene(scene))?;
    Ok(())
}
