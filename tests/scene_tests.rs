// Host-side tests for scene reconciliation, hover and the swap transition.

use glam::Vec2;
use std::collections::BTreeMap;
use triswap_core::*;

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<RenderOp>,
    shapes: BTreeMap<ShapeKey, ShapeSpec>,
}

impl ShapeSurface for RecordingSurface {
    fn create(&mut self, key: ShapeKey, spec: &ShapeSpec) {
        self.ops.push(RenderOp::Create(key, *spec));
        self.shapes.insert(key, *spec);
    }

    fn update(&mut self, key: ShapeKey, spec: &ShapeSpec) {
        self.ops.push(RenderOp::Update(key, *spec));
        self.shapes.insert(key, *spec);
    }

    fn remove(&mut self, key: ShapeKey) {
        self.ops.push(RenderOp::Remove(key));
        self.shapes.remove(&key);
    }
}

#[derive(Default)]
struct RecordingCues {
    played: Vec<Cue>,
}

impl CuePlayer for RecordingCues {
    fn play(&mut self, cue: Cue) {
        self.played.push(cue);
    }
}

fn two_item_session() -> Session {
    let items = vec![
        DataItem {
            x: 0.0,
            y: 0.0,
            base: 10.0,
            height: 20.0,
            hue: 0.0,
        },
        DataItem {
            x: 10.0,
            y: 10.0,
            base: 50.0,
            height: 80.0,
            hue: 300.0,
        },
    ];
    Session::new(items, &Layout::default())
}

fn spec_at(x: f32) -> ShapeSpec {
    ShapeSpec {
        triangle: Triangle {
            apex: Vec2::new(x, 0.0),
            left: Vec2::new(x - 50.0, 100.0),
            right: Vec2::new(x + 50.0, 100.0),
        },
        ..Default::default()
    }
}

fn click(
    session: &mut Session,
    scene: &mut Scene,
    key: usize,
    now_ms: f64,
    surface: &mut RecordingSurface,
    cues: &mut RecordingCues,
) {
    let effects = session.handle(Command::Select(key));
    scene.apply(session, &effects, now_ms, surface, cues);
}

#[test]
fn reconcile_creates_updates_and_removes() {
    let a = spec_at(0.0);
    let b = spec_at(200.0);
    let c = spec_at(400.0);

    let ops = reconcile(&[], &[a, b]);
    assert_eq!(ops, vec![RenderOp::Create(0, a), RenderOp::Create(1, b)]);

    assert!(reconcile(&[a, b], &[a, b]).is_empty());

    let ops = reconcile(&[a, b], &[a, c, b]);
    assert_eq!(ops, vec![RenderOp::Update(1, c), RenderOp::Create(2, b)]);

    let ops = reconcile(&[a, b, c], &[a]);
    assert_eq!(ops, vec![RenderOp::Remove(1), RenderOp::Remove(2)]);
}

#[test]
fn hit_test_prefers_topmost_shape() {
    let specs = [spec_at(0.0), spec_at(40.0), spec_at(500.0)];
    // inside both of the first two
    assert_eq!(hit_test(&specs, Vec2::new(20.0, 80.0)), Some(1));
    assert_eq!(hit_test(&specs, Vec2::new(-30.0, 90.0)), Some(0));
    assert_eq!(hit_test(&specs, Vec2::new(500.0, 50.0)), Some(2));
    assert_eq!(hit_test(&specs, Vec2::new(250.0, 50.0)), None);
}

#[test]
fn sync_draws_every_item_once() {
    let session = Session::from_json(include_str!("../data.json"), &Layout::default())
        .expect("sample dataset parses");
    let mut scene = Scene::default();
    let mut surface = RecordingSurface::default();

    scene.sync(&session, &mut surface);
    assert_eq!(surface.shapes.len(), DATASET_LEN);
    assert!(surface
        .ops
        .iter()
        .all(|op| matches!(op, RenderOp::Create(..))));
    assert!(surface.shapes.values().all(|s| s.stroke == Stroke::Default));

    surface.ops.clear();
    scene.sync(&session, &mut surface);
    assert!(surface.ops.is_empty(), "unchanged data redraws nothing");
}

#[test]
fn pick_finds_drawn_shape_under_apex() {
    let session = two_item_session();
    let mut scene = Scene::default();
    let mut surface = RecordingSurface::default();
    scene.sync(&session, &mut surface);

    let tri = scene.drawn()[1].triangle;
    let inside = (tri.apex + tri.left + tri.right) / 3.0;
    assert_eq!(scene.pick(inside), Some(1));
    assert_eq!(scene.pick(Vec2::new(-500.0, -500.0)), None);
}

#[test]
fn selecting_highlights_and_plays_cue() {
    let mut session = two_item_session();
    let mut scene = Scene::default();
    let mut surface = RecordingSurface::default();
    let mut cues = RecordingCues::default();
    scene.sync(&session, &mut surface);

    click(&mut session, &mut scene, 0, 0.0, &mut surface, &mut cues);
    assert_eq!(surface.shapes[&0].stroke, Stroke::Highlight);
    assert_eq!(surface.shapes[&1].stroke, Stroke::Default);
    assert_eq!(cues.played, vec![Cue::Select]);
    assert!(!scene.is_animating());

    click(&mut session, &mut scene, 0, 10.0, &mut surface, &mut cues);
    assert_eq!(surface.shapes[&0].stroke, Stroke::Default);
    assert_eq!(cues.played, vec![Cue::Select], "deselect is silent");
}

#[test]
fn swap_animates_to_new_geometry() {
    let mut session = two_item_session();
    let mut scene = Scene::new(1000.0);
    let mut surface = RecordingSurface::default();
    let mut cues = RecordingCues::default();
    scene.sync(&session, &mut surface);
    let before = scene.drawn().to_vec();

    click(&mut session, &mut scene, 0, 0.0, &mut surface, &mut cues);
    click(&mut session, &mut scene, 1, 100.0, &mut surface, &mut cues);
    assert!(scene.is_animating());
    assert_eq!(cues.played, vec![Cue::Select, Cue::Select]);
    let target = scene.target_specs(&session);

    scene.tick(100.0, &mut surface, &mut cues);
    assert_eq!(cues.played.last(), Some(&Cue::Transition));
    // strokes drop the highlight as soon as the transition starts
    assert!(scene.drawn().iter().all(|s| s.stroke == Stroke::Default));
    assert_eq!(scene.drawn()[0].triangle, before[0].triangle);

    scene.tick(600.0, &mut surface, &mut cues);
    let (from, mid, to) = (
        before[0].triangle.left.x,
        scene.drawn()[0].triangle.left.x,
        target[0].triangle.left.x,
    );
    assert!(from.min(to) < mid && mid < from.max(to), "{} {} {}", from, mid, to);
    // apex stays where x and y put it
    assert_eq!(scene.drawn()[0].triangle.apex, before[0].triangle.apex);

    scene.tick(1100.0, &mut surface, &mut cues);
    assert!(!scene.is_animating());
    assert_eq!(scene.drawn(), target.as_slice());
    assert_eq!(surface.shapes.values().copied().collect::<Vec<_>>(), target);

    let transition_cues = cues
        .played
        .iter()
        .filter(|c| **c == Cue::Transition)
        .count();
    assert_eq!(transition_cues, 1);

    surface.ops.clear();
    scene.tick(1200.0, &mut surface, &mut cues);
    assert!(surface.ops.is_empty());
}

#[test]
fn hover_changes_fill_saturation_only() {
    let session = two_item_session();
    let mut scene = Scene::default();
    let mut surface = RecordingSurface::default();
    scene.sync(&session, &mut surface);
    let normal = surface.shapes[&1];

    scene.set_hover(&session, Some(1), &mut surface);
    let hovered = surface.shapes[&1];
    assert_eq!(hovered.fill.s, HOVER_SATURATION);
    assert_eq!(hovered.fill.h, normal.fill.h);
    assert_eq!(hovered.triangle, normal.triangle);
    assert_eq!(scene.hover(), Some(1));

    surface.ops.clear();
    scene.set_hover(&session, Some(1), &mut surface);
    assert!(surface.ops.is_empty());

    scene.set_hover(&session, None, &mut surface);
    assert_eq!(surface.shapes[&1], normal);
    assert_eq!(session.fill(1, false).map(|f| f.s), Some(FILL_SATURATION));
}

#[test]
fn hover_survives_a_running_transition() {
    let mut session = two_item_session();
    let mut scene = Scene::default();
    let mut surface = RecordingSurface::default();
    let mut cues = RecordingCues::default();
    scene.sync(&session, &mut surface);

    click(&mut session, &mut scene, 0, 0.0, &mut surface, &mut cues);
    click(&mut session, &mut scene, 1, 0.0, &mut surface, &mut cues);
    scene.tick(0.0, &mut surface, &mut cues);
    scene.set_hover(&session, Some(0), &mut surface);
    scene.tick(500.0, &mut surface, &mut cues);
    assert_eq!(surface.shapes[&0].fill.s, HOVER_SATURATION);

    scene.tick(1000.0, &mut surface, &mut cues);
    assert_eq!(surface.shapes[&0].fill.s, HOVER_SATURATION);
    assert_eq!(surface.shapes[&1].fill.s, FILL_SATURATION);
    assert_eq!(scene.drawn(), scene.target_specs(&session).as_slice());
}

#[test]
fn easing_and_progress_are_clamped() {
    assert_eq!(ease_cubic_in_out(0.0), 0.0);
    assert_eq!(ease_cubic_in_out(1.0), 1.0);
    assert!((ease_cubic_in_out(0.5) - 0.5).abs() < 1e-12);
    assert!(ease_cubic_in_out(0.25) < 0.25);
    assert!(ease_cubic_in_out(0.75) > 0.75);

    let mut t = Transition::new(vec![spec_at(0.0)], vec![spec_at(100.0)], 50.0, 1000.0);
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(550.0), 0.5);
    assert_eq!(t.progress(5000.0), 1.0);
    assert!(!t.is_finished(1049.0));
    assert!(t.is_finished(1050.0));
    assert_eq!(t.sample(1050.0), t.target());

    assert!(t.mark_started());
    assert!(!t.mark_started());

    let instant = Transition::new(vec![spec_at(0.0)], vec![spec_at(100.0)], 0.0, 0.0);
    assert!(instant.is_finished(0.0));
    assert_eq!(instant.sample(0.0), vec![spec_at(100.0)]);
}

#[test]
fn cue_specs_are_audible_and_short() {
    for cue in [Cue::Select, Cue::Transition] {
        let spec = cue.spec();
        assert!(spec.start_hz > 20.0 && spec.end_hz < 20_000.0);
        assert!(spec.duration_sec > CUE_ATTACK_SEC);
        assert!(spec.gain > 0.0 && spec.gain <= 1.0);
    }
    assert!((Cue::Transition.spec().duration_sec as f64) * 1000.0 <= TRANSITION_MS);
}

#[test]
fn stroke_css_matches_rgb() {
    assert_eq!(Stroke::Highlight.css(), "rgb(0, 0, 0)");
    assert_eq!(Stroke::Default.css(), "rgb(51, 51, 51)");
    assert!(Stroke::Highlight.width() > Stroke::Default.width());
}
