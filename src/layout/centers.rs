use std::collections::HashMap;

use log::warn;

use crate::ir::FocusCenter;
use crate::theme::Theme;

use super::CenterLayout;

/// Resolves each center's absolute position. A center with `relative_to`
/// set is offset from the referenced center's own coordinates; exactly one
/// level of indirection, so a chain of references does not compose.
/// Unknown reference targets degrade to absolute coordinates.
pub fn resolve_centers(centers: &[FocusCenter], theme: &Theme) -> Vec<CenterLayout> {
    let by_id: HashMap<&str, &FocusCenter> = centers
        .iter()
        .map(|center| (center.id.as_str(), center))
        .collect();

    centers
        .iter()
        .map(|center| {
            let (x, y) = match center.relative_to.as_deref() {
                Some(target_id) => match by_id.get(target_id) {
                    Some(target) => (target.x + center.x, target.y + center.y),
                    None => {
                        warn!(
                            "center {} references unknown center {target_id}; using its coordinates as absolute",
                            center.id
                        );
                        (center.x, center.y)
                    }
                },
                None => (center.x, center.y),
            };
            CenterLayout {
                id: center.id.clone(),
                title: center.title.clone(),
                x,
                y,
                color: center
                    .color
                    .clone()
                    .unwrap_or_else(|| theme.fallback_color.clone()),
            }
        })
        .collect()
}
