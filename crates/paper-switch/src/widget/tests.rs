//! Integration tests for the reveal control against the layer tree.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use paper_switch_core::init_global_registry;
use paper_switch_scene::{Color, LayerId, LayerTree, Point, Rect, Size};

use super::widgets::{DEFAULT_DURATION, DEFAULT_TINT_COLOR, PaperSwitch};
use super::{
    Key, KeyPressEvent, KeyReleaseEvent, MouseButton, MousePressEvent, MouseReleaseEvent,
    ResizeEvent, SceneContext, Widget, WidgetEvent,
};

/// Container size used throughout: 200x100 with the switch centered at
/// (20, 50).
const CONTAINER: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);
const SWITCH_SIZE: Size = Size::new(51.0, 31.0);
const SWITCH_CENTER: Point = Point::new(20.0, 50.0);

fn setup() -> (LayerTree, LayerId, PaperSwitch) {
    init_global_registry();

    let mut tree = LayerTree::new();
    let container = tree.create_layer();
    tree.set_frame(container, CONTAINER).unwrap();

    let mut switch = PaperSwitch::new();
    switch.set_geometry(Rect::from_center(SWITCH_CENTER, SWITCH_SIZE));

    let mut ctx = SceneContext::new(&mut tree);
    switch.attach(&mut ctx, container).unwrap();

    (tree, container, switch)
}

/// Record every animation signal as a readable line, in emission order.
fn record_events(switch: &PaperSwitch) -> Arc<Mutex<Vec<String>>> {
    let log = Arc::new(Mutex::new(Vec::new()));

    let started_log = log.clone();
    switch.animation_started().connect(move |&on| {
        started_log.lock().push(format!("started on={on}"));
    });

    let stopped_log = log.clone();
    switch.animation_stopped().connect(move |&(on, finished)| {
        stopped_log
            .lock()
            .push(format!("stopped on={on} finished={finished}"));
    });

    log
}

fn disc_scale(tree: &LayerTree, switch: &PaperSwitch) -> f32 {
    tree.transform(switch.reveal_layer().unwrap())
        .unwrap()
        .scale()
        .x
}

#[test]
fn attach_builds_expected_layer_stack() {
    let (tree, container, switch) = setup();

    let shape = switch.reveal_layer().unwrap();
    let control = switch.control_layer().unwrap();

    // Disc at the back, control layer above it.
    assert_eq!(tree.sublayers(container).unwrap(), vec![shape, control]);

    // Container clips the reveal; the disc clips its own fill.
    assert!(tree.masks_to_bounds(container).unwrap());
    assert!(tree.masks_to_bounds(shape).unwrap());

    // Off at attach time: disc rests collapsed.
    assert!(disc_scale(&tree, &switch) < 0.001);
}

#[test]
fn attach_styles_control_layer() {
    let (tree, _, switch) = setup();
    let control = switch.control_layer().unwrap();

    assert_eq!(tree.border_width(control).unwrap(), 0.5);
    assert_eq!(tree.border_color(control).unwrap(), Color::WHITE);
    assert_eq!(
        tree.corner_radius(control).unwrap(),
        SWITCH_SIZE.height / 2.0
    );
    assert_eq!(
        tree.frame(control).unwrap(),
        Rect::from_center(SWITCH_CENTER, SWITCH_SIZE)
    );
}

#[test]
fn layout_radius_reaches_farthest_corner() {
    let (_, _, switch) = setup();

    // x = max(20, 180) = 180, y = max(50, 50) = 50.
    let expected = (180.0f32 * 180.0 + 50.0 * 50.0).sqrt();
    assert!((switch.reveal_radius() - expected).abs() < 1e-3);
    assert!((switch.reveal_radius() - 186.815).abs() < 1e-2);
}

#[test]
fn layout_disc_frame_is_square_on_switch_center() {
    let (tree, _, switch) = setup();
    let shape = switch.reveal_layer().unwrap();

    let frame = tree.frame(shape).unwrap();
    let side = switch.reveal_radius() * 2.0;

    assert!((frame.width() - side).abs() < 1e-3);
    assert!((frame.height() - side).abs() < 1e-3);
    let center = frame.center();
    assert!((center.x - SWITCH_CENTER.x).abs() < 1e-3);
    assert!((center.y - SWITCH_CENTER.y).abs() < 1e-3);

    assert_eq!(tree.anchor_point(shape).unwrap(), Point::new(0.5, 0.5));

    // The disc path fills its bounding square.
    let path = tree.path(shape).unwrap().unwrap();
    let bounds = path.bounds().unwrap();
    assert!((bounds.width() - side).abs() < 1e-2);
}

#[test]
fn radius_covers_every_container_corner() {
    init_global_registry();

    let cases = [
        (Rect::new(0.0, 0.0, 200.0, 100.0), Point::new(20.0, 50.0)),
        (Rect::new(0.0, 0.0, 200.0, 100.0), Point::new(100.0, 50.0)),
        (Rect::new(0.0, 0.0, 800.0, 600.0), Point::new(790.0, 10.0)),
        (Rect::new(0.0, 0.0, 50.0, 400.0), Point::new(25.0, 390.0)),
    ];

    for (container_frame, center) in cases {
        let mut tree = LayerTree::new();
        let container = tree.create_layer();
        tree.set_frame(container, container_frame).unwrap();

        let mut switch = PaperSwitch::new();
        switch.set_geometry(Rect::from_center(center, SWITCH_SIZE));

        let mut ctx = SceneContext::new(&mut tree);
        switch.attach(&mut ctx, container).unwrap();

        for corner in container_frame.corners() {
            assert!(
                switch.reveal_radius() >= center.distance_to(corner) - 1e-3,
                "radius {} misses corner {:?} from {:?}",
                switch.reveal_radius(),
                corner,
                center
            );
        }
    }
}

#[test]
fn redundant_set_fires_nothing() {
    let (mut tree, _, mut switch) = setup();
    let log = record_events(&switch);

    let before = disc_scale(&tree, &switch);
    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, false, true);
    switch.set_on(&mut ctx, false, false);
    drop(ctx);

    assert!(log.lock().is_empty());
    assert_eq!(disc_scale(&tree, &switch), before);
    assert!(!tree.is_animating());
}

#[test]
fn animated_turn_on_starts_then_finishes_expanded() {
    let (mut tree, _, mut switch) = setup();
    let log = record_events(&switch);

    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, true, true);
    drop(ctx);

    assert!(switch.is_on());
    assert_eq!(*log.lock(), vec!["started on=true"]);

    let t0 = Instant::now();
    tree.tick(t0);
    tree.tick(t0 + DEFAULT_DURATION / 2);
    let mid = disc_scale(&tree, &switch);
    assert!(mid > 0.001 && mid < 1.0, "mid-flight scale was {mid}");

    tree.tick(t0 + DEFAULT_DURATION);
    assert!(!tree.is_animating());
    assert_eq!(disc_scale(&tree, &switch), 1.0);
    assert_eq!(
        *log.lock(),
        vec!["started on=true", "stopped on=true finished=true"]
    );
}

#[test]
fn animated_turn_off_finishes_collapsed() {
    let (mut tree, _, mut switch) = setup();

    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, true, false);
    drop(ctx);
    assert_eq!(disc_scale(&tree, &switch), 1.0);

    let log = record_events(&switch);
    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, false, true);
    drop(ctx);

    let t0 = Instant::now();
    tree.tick(t0);
    tree.tick(t0 + DEFAULT_DURATION);

    assert!(disc_scale(&tree, &switch) < 0.001);
    assert_eq!(
        *log.lock(),
        vec!["started on=false", "stopped on=false finished=true"]
    );
}

#[test]
fn non_animated_set_snaps_without_signals() {
    let (mut tree, _, mut switch) = setup();
    let log = record_events(&switch);

    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, true, false);
    drop(ctx);

    assert_eq!(disc_scale(&tree, &switch), 1.0);
    assert!(!tree.is_animating());
    assert!(log.lock().is_empty());

    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, false, false);
    drop(ctx);

    assert!(disc_scale(&tree, &switch) < 0.001);
    assert!(log.lock().is_empty());
}

#[test]
fn reversing_mid_flight_interrupts_then_settles_collapsed() {
    let (mut tree, _, mut switch) = setup();
    let log = record_events(&switch);

    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, true, true);
    drop(ctx);

    let t0 = Instant::now();
    tree.tick(t0);
    tree.tick(t0 + DEFAULT_DURATION / 4);

    // Reverse before the expansion completes.
    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, false, true);
    drop(ctx);

    tree.tick(t0 + DEFAULT_DURATION / 2);
    tree.tick(t0 + DEFAULT_DURATION * 2);

    assert!(disc_scale(&tree, &switch) < 0.001);
    assert!(!tree.is_animating());
    assert_eq!(
        *log.lock(),
        vec![
            "started on=true",
            // Interrupted by the reverse; state already reads false.
            "stopped on=false finished=false",
            "started on=false",
            "stopped on=false finished=true",
        ]
    );
}

#[test]
fn snap_during_flight_discards_silently() {
    let (mut tree, _, mut switch) = setup();
    let log = record_events(&switch);

    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, true, true);
    drop(ctx);

    let t0 = Instant::now();
    tree.tick(t0);
    tree.tick(t0 + DEFAULT_DURATION / 4);

    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, false, false);
    drop(ctx);

    assert!(!tree.is_animating());
    assert!(disc_scale(&tree, &switch) < 0.001);
    // Only the start of the discarded expansion was observed.
    assert_eq!(*log.lock(), vec!["started on=true"]);

    // A later tick must not resurrect the discarded animation.
    tree.tick(t0 + DEFAULT_DURATION);
    assert!(disc_scale(&tree, &switch) < 0.001);
}

#[test]
fn tint_is_resolved_per_transition() {
    let (mut tree, _, mut switch) = setup();
    let shape = switch.reveal_layer().unwrap();

    assert_eq!(tree.fill_color(shape).unwrap(), DEFAULT_TINT_COLOR);

    switch.set_tint_color(Some(Color::RED));
    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, true, true);
    drop(ctx);
    assert_eq!(tree.fill_color(shape).unwrap(), Color::RED);

    // Change the tint between toggles; the next transition picks it up.
    switch.set_tint_color(Some(Color::BLUE));
    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, false, true);
    drop(ctx);
    assert_eq!(tree.fill_color(shape).unwrap(), Color::BLUE);
}

#[test]
fn custom_duration_controls_completion_time() {
    let (mut tree, _, mut switch) = setup();
    switch.set_duration(Duration::from_millis(100));

    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, true, true);
    drop(ctx);

    let t0 = Instant::now();
    tree.tick(t0);
    tree.tick(t0 + Duration::from_millis(99));
    assert!(tree.is_animating());

    tree.tick(t0 + Duration::from_millis(100));
    assert!(!tree.is_animating());
    assert_eq!(disc_scale(&tree, &switch), 1.0);
}

#[test]
fn layout_before_attach_is_skipped() {
    init_global_registry();

    let mut tree = LayerTree::new();
    let mut switch = PaperSwitch::new();
    switch.set_geometry(Rect::from_center(SWITCH_CENTER, SWITCH_SIZE));

    let mut ctx = SceneContext::new(&mut tree);
    switch.layout(&mut ctx);
    drop(ctx);

    assert_eq!(switch.reveal_radius(), 0.0);
    assert_eq!(tree.layer_count(), 0);
}

#[test]
fn set_on_while_detached_then_attach_snaps() {
    init_global_registry();

    let mut tree = LayerTree::new();
    let container = tree.create_layer();
    tree.set_frame(container, CONTAINER).unwrap();

    let mut switch = PaperSwitch::new();
    switch.set_geometry(Rect::from_center(SWITCH_CENTER, SWITCH_SIZE));

    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, true, true);
    assert!(switch.is_on());

    // Deferred attachment converges on the same setup and snaps to the
    // current state.
    switch.attach(&mut ctx, container).unwrap();
    drop(ctx);

    assert_eq!(disc_scale(&tree, &switch), 1.0);
    assert!(!tree.is_animating());
}

#[test]
fn user_toggle_through_events_animates() {
    let (mut tree, _, mut switch) = setup();
    let log = record_events(&switch);

    let toggles = Arc::new(Mutex::new(Vec::new()));
    let toggles_clone = toggles.clone();
    switch.toggled().connect(move |&on| {
        toggles_clone.lock().push(on);
    });

    let inside = Point::new(5.0, 5.0);
    let mut ctx = SceneContext::new(&mut tree);

    let mut press = WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left, inside));
    assert!(switch.event(&mut press, &mut ctx));
    assert!(press.is_accepted());

    let mut release =
        WidgetEvent::MouseRelease(MouseReleaseEvent::new(MouseButton::Left, inside));
    assert!(switch.event(&mut release, &mut ctx));
    drop(ctx);

    assert!(switch.is_on());
    assert_eq!(*toggles.lock(), vec![true]);
    assert_eq!(*log.lock(), vec!["started on=true"]);

    let t0 = Instant::now();
    tree.tick(t0);
    tree.tick(t0 + DEFAULT_DURATION);
    assert_eq!(disc_scale(&tree, &switch), 1.0);
}

#[test]
fn keyboard_toggle_through_events_animates() {
    let (mut tree, _, mut switch) = setup();
    let log = record_events(&switch);

    let mut ctx = SceneContext::new(&mut tree);
    let mut press = WidgetEvent::KeyPress(KeyPressEvent::new(Key::Space));
    assert!(switch.event(&mut press, &mut ctx));
    let mut release = WidgetEvent::KeyRelease(KeyReleaseEvent::new(Key::Space));
    assert!(switch.event(&mut release, &mut ctx));
    drop(ctx);

    assert!(switch.is_on());
    assert_eq!(*log.lock(), vec!["started on=true"]);
}

#[test]
fn release_outside_does_not_toggle_or_animate() {
    let (mut tree, _, mut switch) = setup();
    let log = record_events(&switch);

    let mut ctx = SceneContext::new(&mut tree);
    let mut press = WidgetEvent::MousePress(MousePressEvent::new(
        MouseButton::Left,
        Point::new(5.0, 5.0),
    ));
    switch.event(&mut press, &mut ctx);

    let mut release = WidgetEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        Point::new(400.0, 400.0),
    ));
    assert!(!switch.event(&mut release, &mut ctx));
    drop(ctx);

    assert!(!switch.is_on());
    assert!(log.lock().is_empty());
}

#[test]
fn resize_event_relayouts_disc() {
    let (mut tree, _, mut switch) = setup();
    let before = switch.reveal_radius();

    let mut ctx = SceneContext::new(&mut tree);
    let mut resize = WidgetEvent::Resize(ResizeEvent::new(SWITCH_SIZE, Size::new(80.0, 44.0)));
    assert!(switch.event(&mut resize, &mut ctx));
    drop(ctx);

    // Same center moved by the size change; the radius follows the new
    // geometry.
    assert_ne!(switch.reveal_radius(), before);
    let control = switch.control_layer().unwrap();
    assert_eq!(tree.corner_radius(control).unwrap(), 22.0);
}

#[test]
fn detach_removes_layers_and_silences_animations() {
    let (mut tree, container, mut switch) = setup();
    let log = record_events(&switch);

    let mut ctx = SceneContext::new(&mut tree);
    switch.set_on(&mut ctx, true, true);
    switch.detach(&mut ctx);
    drop(ctx);

    assert!(!switch.is_attached());
    assert!(switch.reveal_layer().is_none());
    assert!(tree.sublayers(container).unwrap().is_empty());
    assert!(!tree.is_animating());
    // The started signal fired; teardown adds no stop notification.
    assert_eq!(*log.lock(), vec!["started on=true"]);
}

#[test]
fn reattach_moves_layers_to_new_container() {
    let (mut tree, old_container, mut switch) = setup();

    let new_container = tree.create_layer();
    tree.set_frame(new_container, Rect::new(0.0, 0.0, 400.0, 400.0))
        .unwrap();

    let mut ctx = SceneContext::new(&mut tree);
    switch.attach(&mut ctx, new_container).unwrap();
    drop(ctx);

    assert!(tree.sublayers(old_container).unwrap().is_empty());
    assert_eq!(tree.sublayers(new_container).unwrap().len(), 2);
    // Radius recomputed against the larger container.
    let expected = (380.0f32.powi(2) + 350.0f32.powi(2)).sqrt();
    assert!((switch.reveal_radius() - expected).abs() < 1e-2);
}
