use serde::{Deserialize, Serialize};

use crate::config::ViewportConfig;
use crate::layout::CenterLayout;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_narrow(&self, config: &ViewportConfig) -> bool {
        self.width <= config.narrow_breakpoint
    }

    pub fn midpoint(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Pan/zoom transform applied to the canvas contents: translation plus a
/// uniform scale factor `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub x: f32,
    pub y: f32,
    pub k: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            k: 1.0,
        }
    }
}

/// Session-owned handle to the pannable viewport. The rendering layer owns
/// the actual gesture wiring; it attaches its zoom behavior here and reads
/// back transforms for programmatic navigation.
#[derive(Debug)]
pub struct ViewportController {
    size: ViewportSize,
    transform: ViewTransform,
    zoom_attached: bool,
}

impl ViewportController {
    pub fn new(size: ViewportSize) -> Self {
        Self {
            size,
            transform: ViewTransform::default(),
            zoom_attached: false,
        }
    }

    pub fn size(&self) -> ViewportSize {
        self.size
    }

    pub fn resize(&mut self, size: ViewportSize) {
        self.size = size;
    }

    /// Called by the rendering layer once its zoom behavior is wired up.
    pub fn attach_zoom(&mut self) {
        self.zoom_attached = true;
    }

    pub fn zoom_attached(&self) -> bool {
        self.zoom_attached
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Reported back by the rendering layer as gestures move the canvas.
    pub fn set_transform(&mut self, transform: ViewTransform) {
        self.transform = transform;
    }

    /// Translate so the given canvas point lands at the viewport midpoint,
    /// at unit scale.
    pub fn pan_to(&mut self, x: f32, y: f32) {
        let (mid_x, mid_y) = self.size.midpoint();
        self.transform = ViewTransform {
            x: mid_x - x,
            y: mid_y - y,
            k: 1.0,
        };
    }

    pub fn jump_to_center(&mut self, center: &CenterLayout) {
        self.pan_to(center.x, center.y);
    }
}
