use log::debug;

use crate::config::LayoutConfig;
use crate::ir::{Element, FocusCenter};
use crate::layout::{Scene, compute_scene};
use crate::theme::Theme;
use crate::viewport::ViewportSize;

/// Bounding box reported by the rendering layer for one mounted element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured {
    pub width: f32,
    pub height: f32,
}

/// Capability handed in by the rendering layer: the size an element
/// actually rendered at, or `None` when it is not mounted. The layout
/// pass is testable against a fake implementation returning fixed sizes.
pub trait MeasureProvider {
    fn measure(&self, element_id: &str) -> Option<Measured>;
}

/// Captures the data/viewport generation a measurement pass was scheduled
/// for. A resize bumps the generation, so a token minted before it is
/// rejected instead of overwriting newer layout state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureToken {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureOutcome {
    /// Sizes were merged and the latch set; the next [`LayoutSession::scene`]
    /// call reflects them.
    Applied,
    /// The latch was already set for this generation; no-op.
    AlreadyMeasured,
    /// The initial paint has not been committed yet; no-op.
    NotPainted,
    /// The token predates a resize; superseded, no-op.
    Stale,
}

/// Owns one layout session: the immutable source snapshot (replaced
/// wholesale when measurements merge), the viewport, and the two-pass
/// bookkeeping. All computation is synchronous; the only ordering point
/// is that the measurement pass waits for the explicit paint-committed
/// signal and runs at most once per generation.
#[derive(Debug)]
pub struct LayoutSession {
    centers: Vec<FocusCenter>,
    viewport: ViewportSize,
    theme: Theme,
    config: LayoutConfig,
    painted: bool,
    measured: bool,
    generation: u64,
}

impl LayoutSession {
    pub fn new(
        centers: Vec<FocusCenter>,
        viewport: ViewportSize,
        theme: Theme,
        config: LayoutConfig,
    ) -> Self {
        Self {
            centers,
            viewport,
            theme,
            config,
            painted: false,
            measured: false,
            generation: 0,
        }
    }

    pub fn centers(&self) -> &[FocusCenter] {
        &self.centers
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Recomputes the full scene from the current snapshot. Cheap enough
    /// to call per frame; each call is a full replacement.
    pub fn scene(&self) -> Scene {
        compute_scene(&self.centers, self.viewport, &self.theme, &self.config)
    }

    /// Signal from the rendering layer that pass-1 content reached the
    /// screen. Measurement passes are rejected until this fires.
    pub fn commit_initial_paint(&mut self) {
        self.painted = true;
    }

    /// True once a measurement pass would actually run.
    pub fn needs_measurement(&self) -> bool {
        self.painted && !self.measured
    }

    pub fn measure_token(&self) -> MeasureToken {
        MeasureToken {
            generation: self.generation,
        }
    }

    /// Clears the measured latch and invalidates outstanding tokens,
    /// forcing exactly one fresh measurement pass for the new viewport.
    pub fn resize(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
        self.measured = false;
        self.generation += 1;
    }

    /// Pass 2: queries the provider for every element id and merges the
    /// returned sizes into a replacement snapshot. Elements the provider
    /// cannot measure keep their prior values. Never fails; stale, early,
    /// and repeated calls are no-ops.
    pub fn apply_measurements(
        &mut self,
        provider: &dyn MeasureProvider,
        token: MeasureToken,
    ) -> MeasureOutcome {
        if token.generation != self.generation {
            debug!(
                "dropping measurement pass for generation {} (current {})",
                token.generation, self.generation
            );
            return MeasureOutcome::Stale;
        }
        if !self.painted {
            return MeasureOutcome::NotPainted;
        }
        if self.measured {
            return MeasureOutcome::AlreadyMeasured;
        }

        self.centers = self
            .centers
            .iter()
            .map(|center| merge_center(center, provider))
            .collect();
        self.measured = true;
        MeasureOutcome::Applied
    }
}

fn merge_center(center: &FocusCenter, provider: &dyn MeasureProvider) -> FocusCenter {
    FocusCenter {
        elements: center
            .elements
            .iter()
            .map(|el| merge_element(el, provider))
            .collect(),
        ..center.clone()
    }
}

fn merge_element(el: &Element, provider: &dyn MeasureProvider) -> Element {
    let mut merged = el.clone();
    match provider.measure(&el.id) {
        Some(measured) => {
            merged.width = Some(measured.width);
            merged.height = Some(measured.height);
        }
        None => {
            debug!("element {} not measurable; keeping prior size", el.id);
        }
    }
    merged.children = el
        .children
        .iter()
        .map(|child| merge_element(child, provider))
        .collect();
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ElementContent, ImageAsset};
    use std::collections::HashMap;

    struct FakeProvider {
        sizes: HashMap<String, Measured>,
        // interior count lets tests assert how often the provider ran
        calls: std::cell::Cell<usize>,
    }

    impl FakeProvider {
        fn new(sizes: &[(&str, f32, f32)]) -> Self {
            Self {
                sizes: sizes
                    .iter()
                    .map(|(id, w, h)| {
                        (
                            id.to_string(),
                            Measured {
                                width: *w,
                                height: *h,
                            },
                        )
                    })
                    .collect(),
                calls: std::cell::Cell::new(0),
            }
        }
    }

    impl MeasureProvider for FakeProvider {
        fn measure(&self, element_id: &str) -> Option<Measured> {
            self.calls.set(self.calls.get() + 1);
            self.sizes.get(element_id).copied()
        }
    }

    fn element(id: &str, content: ElementContent, children: Vec<Element>) -> Element {
        Element {
            id: id.to_string(),
            x: 0.0,
            y: 0.0,
            color: None,
            width: None,
            height: None,
            children,
            content,
        }
    }

    fn session() -> LayoutSession {
        let description = element(
            "desc",
            ElementContent::Description { blocks: Vec::new() },
            vec![element(
                "img",
                ElementContent::Image {
                    src: Some(ImageAsset {
                        url: "https://cdn.example/a.png".to_string(),
                        natural_width: 100.0,
                        natural_height: 50.0,
                    }),
                    caption: None,
                },
                Vec::new(),
            )],
        );
        let centers = vec![FocusCenter {
            id: "c".to_string(),
            title: "C".to_string(),
            x: 0.0,
            y: 0.0,
            color: None,
            relative_to: None,
            elements: vec![description],
            connections: Vec::new(),
        }];
        LayoutSession::new(
            centers,
            ViewportSize::new(1440.0, 900.0),
            Theme::default(),
            LayoutConfig::default(),
        )
    }

    #[test]
    fn measurement_waits_for_the_paint_signal() {
        let mut session = session();
        let provider = FakeProvider::new(&[("desc", 320.0, 140.0)]);
        let token = session.measure_token();
        assert_eq!(
            session.apply_measurements(&provider, token),
            MeasureOutcome::NotPainted
        );
        assert_eq!(provider.calls.get(), 0);

        session.commit_initial_paint();
        assert_eq!(
            session.apply_measurements(&provider, token),
            MeasureOutcome::Applied
        );
        let scene = session.scene();
        let desc = scene.element("desc").unwrap();
        assert_eq!(desc.width, Some(320.0));
        assert_eq!(desc.height, Some(140.0));
    }

    #[test]
    fn second_pass_without_resize_is_a_no_op() {
        let mut session = session();
        session.commit_initial_paint();
        let provider = FakeProvider::new(&[("desc", 320.0, 140.0)]);

        let token = session.measure_token();
        assert_eq!(
            session.apply_measurements(&provider, token),
            MeasureOutcome::Applied
        );
        let calls_after_first = provider.calls.get();
        assert_eq!(
            session.apply_measurements(&provider, token),
            MeasureOutcome::AlreadyMeasured
        );
        assert_eq!(provider.calls.get(), calls_after_first);
    }

    #[test]
    fn resize_forces_exactly_one_fresh_pass() {
        let mut session = session();
        session.commit_initial_paint();
        let provider = FakeProvider::new(&[("desc", 320.0, 140.0)]);

        session.apply_measurements(&provider, session.measure_token());
        assert!(!session.needs_measurement());

        session.resize(ViewportSize::new(390.0, 844.0));
        assert!(session.needs_measurement());
        assert_eq!(
            session.apply_measurements(&provider, session.measure_token()),
            MeasureOutcome::Applied
        );
        assert!(!session.needs_measurement());
    }

    #[test]
    fn tokens_minted_before_a_resize_are_stale() {
        let mut session = session();
        session.commit_initial_paint();
        let provider = FakeProvider::new(&[("desc", 320.0, 140.0)]);

        let early = session.measure_token();
        session.resize(ViewportSize::new(390.0, 844.0));
        assert_eq!(
            session.apply_measurements(&provider, early),
            MeasureOutcome::Stale
        );
        // the fresh token still applies
        assert_eq!(
            session.apply_measurements(&provider, session.measure_token()),
            MeasureOutcome::Applied
        );
    }

    #[test]
    fn unmeasured_elements_keep_their_prior_values() {
        let mut session = session();
        session.commit_initial_paint();
        // provider knows nothing about "desc" or "img"
        let provider = FakeProvider::new(&[]);
        assert_eq!(
            session.apply_measurements(&provider, session.measure_token()),
            MeasureOutcome::Applied
        );
        let scene = session.scene();
        assert_eq!(scene.element("desc").unwrap().width, None);
    }

    #[test]
    fn image_heights_still_follow_the_natural_ratio_after_measurement() {
        let mut session = session();
        session.commit_initial_paint();
        // the renderer reports a wrong box for the image
        let provider = FakeProvider::new(&[("img", 600.0, 999.0)]);
        session.apply_measurements(&provider, session.measure_token());

        let scene = session.scene();
        let img = scene.element("img").unwrap();
        assert_eq!(img.width, Some(600.0));
        // measured width kept, measured height discarded for the 1:2 ratio
        assert_eq!(img.height, Some(300.0));
    }
}
