use serde::{Deserialize, Serialize};

/// A named anchor point in the diagram. Owns a subtree of content elements
/// and the connections declared between them.
///
/// Coordinates are absolute canvas units unless `relative_to` names another
/// center, in which case they are an offset from that center's own
/// coordinates. The reference is a lookup relation by id, not ownership, and
/// only a single level of indirection is resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusCenter {
    pub id: String,
    pub title: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub relative_to: Option<String>,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// A typed content node positioned relative to its parent (a center or
/// another element). Source trees are immutable snapshots for the lifetime
/// of a session; layout passes produce replacement trees instead of
/// mutating in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub x: f32,
    pub y: f32,
    /// Absent means inherit from the nearest ancestor.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default, rename = "childElements")]
    pub children: Vec<Element>,
    #[serde(flatten)]
    pub content: ElementContent,
}

/// Variant payload of an element. Closed union: every boundary that cares
/// about the kind matches exhaustively, so adding a variant is a
/// compile-time-checked change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ElementContent {
    #[serde(rename = "titleElement")]
    Title { text: String },
    #[serde(rename = "buttonElement")]
    Button {
        label: String,
        #[serde(default)]
        href: Option<String>,
    },
    #[serde(rename = "descriptionElement")]
    Description {
        #[serde(default)]
        blocks: Vec<RichTextBlock>,
    },
    #[serde(rename = "imageElement")]
    Image {
        #[serde(default)]
        src: Option<ImageAsset>,
        #[serde(default)]
        caption: Option<String>,
    },
    #[serde(rename = "videoElement")]
    Video {
        #[serde(default)]
        url: Option<String>,
    },
}

impl ElementContent {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::Title { .. } => ElementKind::Title,
            ElementContent::Button { .. } => ElementKind::Button,
            ElementContent::Description { .. } => ElementKind::Description,
            ElementContent::Image { .. } => ElementKind::Image,
            ElementContent::Video { .. } => ElementKind::Video,
        }
    }
}

/// Payload-free tag of an [`ElementContent`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Title,
    Button,
    Description,
    Image,
    Video,
}

/// One paragraph of rich description content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextBlock {
    #[serde(default)]
    pub style: Option<String>,
    pub text: String,
}

/// Media source with its natural pixel dimensions, used to derive a
/// display height from a resolved width.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    pub url: String,
    pub natural_width: f32,
    pub natural_height: f32,
}

impl ImageAsset {
    /// Height-per-width ratio, or `None` when the natural dimensions are
    /// missing or degenerate.
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.natural_width > 0.0 && self.natural_height > 0.0 {
            Some(self.natural_height / self.natural_width)
        } else {
            None
        }
    }
}

/// A declared link between element ids, rendered as a routed path. Lists
/// may carry more than two ids; routing uses the first and last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub ids: Vec<String>,
}

impl Element {
    /// Pre-order walk over this element and its subtree.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
