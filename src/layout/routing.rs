use log::debug;

use crate::config::PipeConfig;

use super::FlattenedElement;

/// Segments shorter than this are treated as degenerate; no corner is
/// emitted around them.
const MIN_SEGMENT: f32 = 1e-3;

/// One drawing command of a routed path. `Arc` follows the SVG arc
/// convention: a circular arc of `radius` ending at `(x, y)`, `sweep`
/// true for the positive-angle (clockwise on screen) direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    Arc { radius: f32, sweep: bool, x: f32, y: f32 },
}

/// Rounded two-segment orthogonal path between two resolved anchors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipePath {
    commands: Vec<PathCommand>,
}

impl PipePath {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// SVG path data (`M`/`L`/`A` commands), empty string for an empty
    /// path.
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for command in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            match command {
                PathCommand::MoveTo { x, y } => {
                    d.push_str(&format!("M {x:.2} {y:.2}"));
                }
                PathCommand::LineTo { x, y } => {
                    d.push_str(&format!("L {x:.2} {y:.2}"));
                }
                PathCommand::Arc { radius, sweep, x, y } => {
                    let sweep = if *sweep { 1 } else { 0 };
                    d.push_str(&format!("A {radius:.2} {radius:.2} 0 0 {sweep} {x:.2} {y:.2}"));
                }
            }
        }
        d
    }
}

/// Routes one declared connection against the flattened list. Only the
/// first and last id matter; an unresolvable endpoint yields an empty
/// path rather than an error.
pub fn route_connection(
    elements: &[FlattenedElement],
    ids: &[String],
    config: &PipeConfig,
) -> PipePath {
    if ids.len() < 2 {
        return PipePath::empty();
    }
    let (Some(first), Some(last)) = (ids.first(), ids.last()) else {
        return PipePath::empty();
    };
    let Some(start) = anchor(elements, first) else {
        debug!("connection endpoint {first} not in the flattened list; omitting path");
        return PipePath::empty();
    };
    let Some(end) = anchor(elements, last) else {
        debug!("connection endpoint {last} not in the flattened list; omitting path");
        return PipePath::empty();
    };
    route_between(start, end, config)
}

/// Two-segment orthogonal route with a single rounded interior bend.
/// Horizontal-first when the horizontal span dominates, vertical-first
/// otherwise; collinear endpoints collapse to one straight segment.
pub fn route_between(start: (f32, f32), end: (f32, f32), config: &PipeConfig) -> PipePath {
    let (x1, y1) = start;
    let (x2, y2) = end;

    let horizontal_first = (x2 - x1).abs() > (y2 - y1).abs();
    let (bend_x, bend_y) = if horizontal_first { (x2, y1) } else { (x1, y2) };

    let (dx1, dy1) = (bend_x - x1, bend_y - y1);
    let (dx2, dy2) = (x2 - bend_x, y2 - bend_y);
    let len1 = dx1.hypot(dy1);
    let len2 = dx2.hypot(dy2);

    let mut commands = vec![PathCommand::MoveTo { x: x1, y: y1 }];

    // Clamp so the arc never overshoots either leg.
    let radius = config
        .max_corner_radius
        .min(len1 / 2.0)
        .min(len2 / 2.0);

    if len1 <= MIN_SEGMENT || len2 <= MIN_SEGMENT || radius <= MIN_SEGMENT {
        commands.push(PathCommand::LineTo { x: x2, y: y2 });
        return PipePath { commands };
    }

    let entry = (bend_x - dx1 / len1 * radius, bend_y - dy1 / len1 * radius);
    let exit = (bend_x + dx2 / len2 * radius, bend_y + dy2 / len2 * radius);
    let sweep = dx1 * dy2 - dy1 * dx2 > 0.0;

    commands.push(PathCommand::LineTo { x: entry.0, y: entry.1 });
    commands.push(PathCommand::Arc {
        radius,
        sweep,
        x: exit.0,
        y: exit.1,
    });
    commands.push(PathCommand::LineTo { x: x2, y: y2 });
    PipePath { commands }
}

fn anchor(elements: &[FlattenedElement], id: &str) -> Option<(f32, f32)> {
    elements
        .iter()
        .find(|el| el.id == id)
        .map(|el| (el.abs_x, el.abs_y))
}
