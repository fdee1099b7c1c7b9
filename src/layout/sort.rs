use crate::ir::ElementKind;

use super::FlattenedElement;

/// Draw-order weight per element kind. Higher values paint later and end
/// up on top of lower ones; the value carries no positional meaning.
pub fn draw_priority(kind: ElementKind) -> u8 {
    match kind {
        ElementKind::Title => 9,
        ElementKind::Button => 8,
        ElementKind::Description => 7,
        ElementKind::Video => 5,
        ElementKind::Image => 4,
    }
}

/// Stable sort into paint order: ascending priority, original relative
/// order preserved among equal kinds.
pub fn sort_elements(mut elements: Vec<FlattenedElement>) -> Vec<FlattenedElement> {
    elements.sort_by_key(|el| draw_priority(el.kind));
    elements
}
