use crate::config::LayoutConfig;
use crate::ir::{ElementContent, ElementKind};
use crate::layout::{FlattenedElement, Scene};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

const CANVAS_PAD: f32 = 80.0;

/// Debug preview of a resolved scene: connection paths plus a placeholder
/// box and label per element. The real rendering layer owns the actual
/// content output; this exists so geometry can be eyeballed without one.
pub fn render_svg(scene: &Scene, theme: &Theme, config: &LayoutConfig) -> String {
    let (min_x, min_y, width, height) = scene_bounds(scene);
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"{min_x:.2} {min_y:.2} {width:.2} {height:.2}\">",
    ));
    svg.push_str(&format!(
        "<rect x=\"{min_x:.2}\" y=\"{min_y:.2}\" width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    // connections under the content boxes
    for connection in &scene.connections {
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            connection.path.to_svg(),
            connection.stroke,
            config.pipe.stroke_width
        ));
    }

    for el in &scene.elements {
        let (width, height) = box_size(el);
        let x = el.abs_x - width / 2.0;
        let y = el.abs_y - height / 2.0;
        svg.push_str(&format!(
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" rx=\"15\" ry=\"15\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\" id=\"{}\"/>",
            theme.panel_fill,
            el.color,
            escape_xml(&el.id)
        ));
        let label_y = el.abs_y + theme.font_size / 3.0;
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{label_y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            el.abs_x,
            theme.font_family,
            theme.font_size,
            el.color,
            escape_xml(&label_snippet(el))
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn scene_bounds(scene: &Scene) -> (f32, f32, f32, f32) {
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for el in &scene.elements {
        let (width, height) = box_size(el);
        min_x = min_x.min(el.abs_x - width / 2.0);
        min_y = min_y.min(el.abs_y - height / 2.0);
        max_x = max_x.max(el.abs_x + width / 2.0);
        max_y = max_y.max(el.abs_y + height / 2.0);
    }
    for center in &scene.centers {
        min_x = min_x.min(center.x);
        min_y = min_y.min(center.y);
        max_x = max_x.max(center.x);
        max_y = max_y.max(center.y);
    }
    if min_x == f32::MAX {
        return (0.0, 0.0, 200.0, 200.0);
    }
    (
        min_x - CANVAS_PAD,
        min_y - CANVAS_PAD,
        (max_x - min_x) + CANVAS_PAD * 2.0,
        (max_y - min_y) + CANVAS_PAD * 2.0,
    )
}

fn box_size(el: &FlattenedElement) -> (f32, f32) {
    let (fallback_w, fallback_h) = fallback_size(el.kind);
    (
        el.width.unwrap_or(fallback_w),
        el.height.unwrap_or(fallback_h),
    )
}

/// Placeholder box sizes for elements the renderer has not measured yet.
fn fallback_size(kind: ElementKind) -> (f32, f32) {
    match kind {
        ElementKind::Title => (300.0, 50.0),
        ElementKind::Button => (120.0, 50.0),
        ElementKind::Description => (300.0, 200.0),
        ElementKind::Image => (300.0, 300.0),
        ElementKind::Video => (320.0, 240.0),
    }
}

fn label_snippet(el: &FlattenedElement) -> String {
    match &el.content {
        ElementContent::Title { text } => text.clone(),
        ElementContent::Button { label, .. } => label.clone(),
        ElementContent::Description { blocks } => blocks
            .first()
            .map(|block| block.text.clone())
            .unwrap_or_default(),
        ElementContent::Image { caption, src } => caption
            .clone()
            .or_else(|| src.as_ref().map(|asset| asset.url.clone()))
            .unwrap_or_default(),
        ElementContent::Video { url } => url.clone().unwrap_or_default(),
    }
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
