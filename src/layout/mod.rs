mod centers;
mod flatten;
mod routing;
mod sort;
pub(crate) mod types;

pub use centers::resolve_centers;
pub use flatten::{ParentContext, flatten_center, flatten_element};
pub use routing::{PathCommand, PipePath, route_between, route_connection};
pub use sort::{draw_priority, sort_elements};
pub use types::*;

use crate::config::LayoutConfig;
use crate::ir::FocusCenter;
use crate::theme::Theme;
use crate::viewport::ViewportSize;

/// One full resolution pass: resolve center positions, flatten every
/// element tree into global coordinates, route the declared connections
/// against the flattened list, and sort into draw order. Pure over its
/// inputs; every call produces a replacement [`Scene`].
pub fn compute_scene(
    centers: &[FocusCenter],
    viewport: ViewportSize,
    theme: &Theme,
    config: &LayoutConfig,
) -> Scene {
    let resolved = resolve_centers(centers, theme);

    let mut elements = Vec::new();
    for (center, layout) in centers.iter().zip(&resolved) {
        elements.extend(flatten_center(center, layout, viewport, config));
    }

    let mut connections = Vec::new();
    for (center, layout) in centers.iter().zip(&resolved) {
        for connection in &center.connections {
            let path = route_connection(&elements, &connection.ids, &config.pipe);
            if path.is_empty() {
                continue;
            }
            connections.push(ConnectionLayout {
                center_id: layout.id.clone(),
                stroke: layout.color.clone(),
                path,
            });
        }
    }

    Scene {
        centers: resolved,
        elements: sort_elements(elements),
        connections,
    }
}
