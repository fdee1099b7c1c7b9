use std::path::Path;

use focus_canvas::config::LayoutConfig;
use focus_canvas::measure::{LayoutSession, MeasureOutcome, MeasureProvider, Measured};
use focus_canvas::parser::read_scene;
use focus_canvas::render::render_svg;
use focus_canvas::scene_dump::SceneDump;
use focus_canvas::theme::Theme;
use focus_canvas::viewport::ViewportSize;

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn session_for(name: &str) -> LayoutSession {
    let centers = read_scene(&fixture_path(name)).expect("fixture read failed");
    LayoutSession::new(
        centers,
        ViewportSize::new(1440.0, 900.0),
        Theme::default(),
        LayoutConfig::default(),
    )
}

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{fixture}: missing </svg tag");
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let fixtures = ["basic.json", "gallery.json", "orphans.json"];
    for fixture in fixtures {
        let session = session_for(fixture);
        let scene = session.scene();
        assert!(!scene.elements.is_empty(), "{fixture}: empty scene");
        let svg = render_svg(&scene, &Theme::default(), &LayoutConfig::default());
        assert_valid_svg(&svg, fixture);
    }
}

#[test]
fn relative_center_offsets_compose_through_the_element_tree() {
    let scene = session_for("basic.json").scene();

    let notes = scene.center("field-notes").expect("field-notes resolved");
    assert_eq!((notes.x, notes.y), (520.0, 260.0));

    let body = scene.element("notes-body").expect("notes-body flattened");
    assert_eq!((body.abs_x, body.abs_y), (520.0, 260.0));
    assert_eq!(body.color, "#E8590C");

    let photo = scene.element("notes-photo").expect("notes-photo flattened");
    assert_eq!((photo.abs_x, photo.abs_y), (580.0, 500.0));
    // responsive default width on a wide viewport, 16:9 natural ratio
    assert_eq!(photo.width, Some(400.0));
    assert_eq!(photo.height, Some(225.0));
}

#[test]
fn cross_center_connection_routes_and_broken_ones_vanish() {
    let scene = session_for("basic.json").scene();
    // research-title -> notes-body crosses centers and still resolves
    assert_eq!(scene.connections.len(), 2);
    let cross = scene
        .connections
        .iter()
        .find(|c| c.center_id == "research")
        .expect("cross-center connection routed");
    assert_eq!(cross.stroke, "#3B5BDB");
    assert!(cross.path.to_svg().contains('A'), "long route should bend");

    let degraded = session_for("orphans.json").scene();
    assert!(degraded.connections.is_empty());
}

#[test]
fn declared_image_width_beats_the_responsive_default() {
    let scene = session_for("gallery.json").scene();
    let tall = scene.element("gallery-tall").unwrap();
    assert_eq!(tall.width, Some(250.0));
    assert_eq!(tall.height, Some(500.0));

    let wide = scene.element("gallery-wide").unwrap();
    assert_eq!(wide.width, Some(400.0));
    assert_eq!(wide.height, Some(100.0));
}

#[test]
fn narrow_viewports_resize_unmeasured_images() {
    let centers = read_scene(&fixture_path("gallery.json")).unwrap();
    let session = LayoutSession::new(
        centers,
        ViewportSize::new(390.0, 844.0),
        Theme::default(),
        LayoutConfig::default(),
    );
    let scene = session.scene();
    let wide = scene.element("gallery-wide").unwrap();
    assert_eq!(wide.width, Some(340.0));
    assert_eq!(wide.height, Some(85.0));
}

struct FixedSizes;

impl MeasureProvider for FixedSizes {
    fn measure(&self, element_id: &str) -> Option<Measured> {
        match element_id {
            "notes-body" => Some(Measured {
                width: 312.0,
                height: 188.0,
            }),
            _ => None,
        }
    }
}

#[test]
fn measurement_pass_reconciles_rendered_sizes_once() {
    let mut session = session_for("basic.json");
    session.commit_initial_paint();

    let token = session.measure_token();
    assert_eq!(
        session.apply_measurements(&FixedSizes, token),
        MeasureOutcome::Applied
    );
    assert_eq!(
        session.apply_measurements(&FixedSizes, token),
        MeasureOutcome::AlreadyMeasured
    );

    let scene = session.scene();
    let body = scene.element("notes-body").unwrap();
    assert_eq!(body.width, Some(312.0));
    assert_eq!(body.height, Some(188.0));
    // unmeasured siblings keep their estimated sizes
    let photo = scene.element("notes-photo").unwrap();
    assert_eq!(photo.width, Some(400.0));
}

#[test]
fn degraded_scenes_still_dump_and_render() {
    let scene = session_for("orphans.json").scene();
    let title = scene.element("adrift-title").unwrap();
    // unknown relativeTo treated as absolute
    assert_eq!((title.abs_x, title.abs_y), (40.0, 60.0));
    // image without metadata keeps null sizes for the renderer to default
    let image = scene.element("adrift-image").unwrap();
    assert_eq!(image.width, None);

    let dump = SceneDump::from_scene(&scene);
    assert_eq!(dump.connections.len(), 0);
    let svg = render_svg(&scene, &Theme::default(), &LayoutConfig::default());
    assert_valid_svg(&svg, "orphans.json");
}
