use crate::ir::{ElementContent, ElementKind};

use super::routing::PipePath;

/// The derived, globally-positioned projection of an [`crate::ir::Element`].
/// Recomputed on every resolution pass and never persisted.
#[derive(Debug, Clone)]
pub struct FlattenedElement {
    pub id: String,
    pub kind: ElementKind,
    /// Global canvas position.
    pub abs_x: f32,
    pub abs_y: f32,
    /// Original offset from the parent, kept for diagnostics.
    pub rel_x: f32,
    pub rel_y: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub color: String,
    /// Owning center, lookup only.
    pub center_id: String,
    pub content: ElementContent,
}

/// A focus center with its position resolved into the global coordinate
/// space. Also handed to the viewport controller for jump-to-center
/// navigation.
#[derive(Debug, Clone)]
pub struct CenterLayout {
    pub id: String,
    pub title: String,
    pub x: f32,
    pub y: f32,
    pub color: String,
}

/// A routed connection ready for drawing.
#[derive(Debug, Clone)]
pub struct ConnectionLayout {
    pub center_id: String,
    pub stroke: String,
    pub path: PipePath,
}

/// Full product of one resolution pass: resolved centers, the flattened
/// element list in draw order, and the routed connections. Each pass
/// replaces the previous scene wholesale.
#[derive(Debug, Clone)]
pub struct Scene {
    pub centers: Vec<CenterLayout>,
    pub elements: Vec<FlattenedElement>,
    pub connections: Vec<ConnectionLayout>,
}

impl Scene {
    pub fn center(&self, id: &str) -> Option<&CenterLayout> {
        self.centers.iter().find(|center| center.id == id)
    }

    pub fn element(&self, id: &str) -> Option<&FlattenedElement> {
        self.elements.iter().find(|el| el.id == id)
    }
}
