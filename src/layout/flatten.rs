use crate::config::LayoutConfig;
use crate::ir::{Element, ElementContent, FocusCenter};
use crate::viewport::ViewportSize;

use super::{CenterLayout, FlattenedElement};

/// Resolution context a node inherits from its parent: the parent's global
/// position, resolved color, and the owning center.
#[derive(Debug, Clone, Copy)]
pub struct ParentContext<'a> {
    pub x: f32,
    pub y: f32,
    pub color: &'a str,
    pub center_id: &'a str,
}

impl<'a> ParentContext<'a> {
    pub fn of_center(center: &'a CenterLayout) -> Self {
        Self {
            x: center.x,
            y: center.y,
            color: &center.color,
            center_id: &center.id,
        }
    }
}

/// Flattens an element subtree into a pre-ordered list: the node itself
/// first, then its children in declaration order, each resolved against
/// this node's position and color. Pure; identical inputs give identical
/// output.
pub fn flatten_element(
    el: &Element,
    parent: ParentContext<'_>,
    viewport: ViewportSize,
    config: &LayoutConfig,
) -> Vec<FlattenedElement> {
    let color = el.color.as_deref().unwrap_or(parent.color);
    let (width, height) = resolve_size(el, viewport, config);
    let abs_x = parent.x + el.x;
    let abs_y = parent.y + el.y;

    let mut out = Vec::with_capacity(1 + el.children.len());
    out.push(FlattenedElement {
        id: el.id.clone(),
        kind: el.content.kind(),
        abs_x,
        abs_y,
        rel_x: el.x,
        rel_y: el.y,
        width,
        height,
        color: color.to_string(),
        center_id: parent.center_id.to_string(),
        content: el.content.clone(),
    });
    for child in &el.children {
        out.extend(flatten_element(
            child,
            ParentContext {
                x: abs_x,
                y: abs_y,
                color,
                center_id: parent.center_id,
            },
            viewport,
            config,
        ));
    }
    out
}

/// Flattens all root elements of a resolved center.
pub fn flatten_center(
    center: &FocusCenter,
    resolved: &CenterLayout,
    viewport: ViewportSize,
    config: &LayoutConfig,
) -> Vec<FlattenedElement> {
    let ctx = ParentContext::of_center(resolved);
    center
        .elements
        .iter()
        .flat_map(|el| flatten_element(el, ctx, viewport, config))
        .collect()
}

fn resolve_size(
    el: &Element,
    viewport: ViewportSize,
    config: &LayoutConfig,
) -> (Option<f32>, Option<f32>) {
    let mut width = el.width;
    let mut height = el.height;

    if let ElementContent::Image { src: Some(asset), .. } = &el.content
        && let Some(aspect) = asset.aspect_ratio()
    {
        let resolved_width = width.unwrap_or_else(|| {
            if viewport.is_narrow(&config.viewport) {
                viewport.width - config.image.narrow_margin
            } else {
                config.image.default_width
            }
        });
        width = Some(resolved_width);
        // Natural aspect ratio always wins over a stale measured height.
        height = Some(resolved_width * aspect);
    }

    (width, height)
}
