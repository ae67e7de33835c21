//! Paper reveal switch.
//!
//! This module provides [`PaperSwitch`], a toggle switch that plays a
//! circular reveal animation when its state changes: a colored disc grows
//! out of the control's center until it covers the whole container, or
//! shrinks back into it.
//!
//! The control composes a plain [`ToggleSwitch`] with two layers in the
//! container it is attached to: its own styled layer on top, and the reveal
//! disc inserted at the back so the switch stays visible above the wash of
//! color.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use paper_switch::widget::widgets::PaperSwitch;
//! use paper_switch::widget::{SceneContext, Widget};
//! use paper_switch_core::init_global_registry;
//! use paper_switch_scene::{Color, LayerTree, Rect};
//!
//! init_global_registry();
//!
//! let mut tree = LayerTree::new();
//! let container = tree.create_layer();
//! tree.set_frame(container, Rect::new(0.0, 0.0, 200.0, 100.0)).unwrap();
//!
//! let mut ctx = SceneContext::new(&mut tree);
//! let mut switch = PaperSwitch::new().with_tint_color(Color::from_rgb8(52, 199, 89));
//! switch.set_geometry(Rect::new(10.0, 35.0, 51.0, 31.0));
//! switch.attach(&mut ctx, container).unwrap();
//!
//! switch.animation_stopped().connect(|&(on, finished)| {
//!     println!("reveal for on={on} finished={finished}");
//! });
//!
//! switch.set_on(&mut ctx, true, true);
//!
//! // Drive the reveal from your frame clock.
//! let start = Instant::now();
//! tree.tick(start);
//! tree.tick(start + Duration::from_millis(350));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use paper_switch_core::{Object, ObjectId, Signal};
use paper_switch_scene::{
    Color, LayerId, Path, Point, Rect, ScaleAnimation, SceneResult, Size,
};

use super::toggle_switch::ToggleSwitch;
use crate::widget::reveal::{RevealDirection, RevealGate, resting_transform};
use crate::widget::{SceneContext, SizeHint, Widget, WidgetBase, WidgetEvent};

/// Fill color used when no tint color is set.
pub const DEFAULT_TINT_COLOR: Color = Color::GREEN;

/// Default duration of the reveal animation.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(350);

/// Border width applied to the control's own layer.
const CONTROL_BORDER_WIDTH: f32 = 0.5;

/// A toggle switch with a circular paper reveal behind it.
///
/// When the switch flips on, a disc in the tint color scales up from the
/// control's center until it covers the entire container; flipping off
/// scales it back down. Non-animated sets snap the disc directly to the
/// resting scale for the new state.
///
/// # Attachment
///
/// The control holds non-owning layer handles into the [`LayerTree`] it is
/// attached to. [`attach`](Self::attach) may be called at construction time
/// or deferred until a container exists; both paths run the same setup.
///
/// # Signals
///
/// - `animation_started(bool)`: Emitted when a reveal animation begins; the
///   parameter is the logical on/off state at that moment
/// - `animation_stopped((bool, bool))`: Emitted when a reveal animation
///   stops; the parameters are the logical state at that moment and whether
///   the animation completed rather than being interrupted
/// - `toggled(bool)`: Emitted when the on/off value changes
///
/// [`LayerTree`]: paper_switch_scene::LayerTree
pub struct PaperSwitch {
    /// The underlying toggle primitive.
    inner: ToggleSwitch,

    /// Duration applied to all reveal transitions.
    duration: Duration,

    /// Fill color for the disc; falls back to [`DEFAULT_TINT_COLOR`].
    tint_color: Option<Color>,

    /// The container layer the control is attached to.
    parent_layer: Option<LayerId>,

    /// The control's own styled layer, on top of the disc.
    control_layer: Option<LayerId>,

    /// The reveal disc layer, at the back of the container.
    shape: Option<LayerId>,

    /// Radius covering the container from the control's center.
    radius: f32,

    /// Committed-state gate suppressing redundant transitions.
    gate: RevealGate,

    /// The logical on/off value, shared with animation callbacks so they
    /// report the state current at fire time.
    current_on: Arc<AtomicBool>,

    /// Signal emitted when a reveal animation begins.
    animation_started: Arc<Signal<bool>>,

    /// Signal emitted when a reveal animation stops (state, finished).
    animation_stopped: Arc<Signal<(bool, bool)>>,
}

impl PaperSwitch {
    /// Create a new detached switch in the off state.
    ///
    /// Call [`attach`](Self::attach) once a container layer exists.
    pub fn new() -> Self {
        Self {
            inner: ToggleSwitch::new(),
            duration: DEFAULT_DURATION,
            tint_color: None,
            parent_layer: None,
            control_layer: None,
            shape: None,
            radius: 0.0,
            gate: RevealGate::default(),
            current_on: Arc::new(AtomicBool::new(false)),
            animation_started: Arc::new(Signal::new()),
            animation_stopped: Arc::new(Signal::new()),
        }
    }

    /// Create a switch attached to the given container layer.
    pub fn new_in(
        ctx: &mut SceneContext<'_>,
        parent: LayerId,
        tint_color: Option<Color>,
    ) -> SceneResult<Self> {
        let mut switch = Self::new();
        switch.tint_color = tint_color;
        switch.attach(ctx, parent)?;
        Ok(switch)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the reveal animation duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Set the reveal animation duration.
    ///
    /// Applies to transitions started after the call; an in-flight
    /// transition keeps the duration it started with.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Set the reveal animation duration using builder pattern.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Get the tint color override, if any.
    pub fn tint_color(&self) -> Option<Color> {
        self.tint_color
    }

    /// Set or clear the tint color.
    ///
    /// The disc's fill is resolved from the tint at transition time, so a
    /// change here is honored by the next reveal.
    pub fn set_tint_color(&mut self, color: Option<Color>) {
        self.tint_color = color;
    }

    /// Set the tint color using builder pattern.
    pub fn with_tint_color(mut self, color: Color) -> Self {
        self.tint_color = Some(color);
        self
    }

    /// The fill color the next transition will use.
    fn resolved_tint(&self) -> Color {
        self.tint_color.unwrap_or(DEFAULT_TINT_COLOR)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Get the current on/off value.
    pub fn is_on(&self) -> bool {
        self.inner.is_on()
    }

    /// Set the on/off value.
    ///
    /// A set to the current value changes nothing. Otherwise the underlying
    /// toggle updates (emitting `toggled`), and the disc either animates to
    /// the new state or, when `animated` is false, snaps to it without any
    /// animation signals.
    pub fn set_on(&mut self, ctx: &mut SceneContext<'_>, on: bool, animated: bool) {
        let changed = on != self.inner.is_on();

        self.inner.set_on(on);
        self.current_on.store(on, Ordering::SeqCst);

        if changed {
            if animated {
                self.run_transition(ctx);
            } else {
                self.snap_to_state(ctx);
            }
        }
    }

    /// The radius the reveal disc scales up to.
    ///
    /// Recomputed on every layout pass as the distance from the control's
    /// center to the container's farthest corner.
    pub fn reveal_radius(&self) -> f32 {
        self.radius
    }

    /// Check whether the control is attached to a container layer.
    pub fn is_attached(&self) -> bool {
        self.parent_layer.is_some()
    }

    /// The reveal disc layer, while attached.
    pub fn reveal_layer(&self) -> Option<LayerId> {
        self.shape
    }

    /// The control's own layer, while attached.
    pub fn control_layer(&self) -> Option<LayerId> {
        self.control_layer
    }

    /// The container layer, while attached.
    pub fn parent_layer(&self) -> Option<LayerId> {
        self.parent_layer
    }

    // =========================================================================
    // Attachment
    // =========================================================================

    /// Attach the control to a container layer.
    ///
    /// Creates the control's styled layer on top of the container and the
    /// reveal disc at its back, enables clipping on the container so the
    /// disc cannot bleed outside it, snaps the disc to the current state,
    /// and runs a layout pass. The handles are non-owning; the container
    /// outlives and is never owned by the control.
    pub fn attach(&mut self, ctx: &mut SceneContext<'_>, parent: LayerId) -> SceneResult<()> {
        if self.is_attached() {
            self.detach(ctx);
        }

        let on = self.inner.is_on();
        let fill = self.resolved_tint();
        let tree = ctx.tree();

        let control_layer = tree.create_layer();
        tree.set_frame(control_layer, self.inner.geometry())?;
        tree.set_border_width(control_layer, CONTROL_BORDER_WIDTH)?;
        tree.set_border_color(control_layer, Color::WHITE)?;
        tree.add_sublayer(parent, control_layer)?;

        let shape = tree.create_layer();
        tree.set_fill_color(shape, fill)?;
        tree.set_masks_to_bounds(shape, true)?;
        tree.insert_sublayer(parent, shape, 0)?;
        tree.set_masks_to_bounds(parent, true)?;

        // Snap so the disc and the logical state never disagree, not even
        // for one frame.
        tree.set_transform(shape, resting_transform(on))?;

        self.parent_layer = Some(parent);
        self.control_layer = Some(control_layer);
        self.shape = Some(shape);
        self.gate.force(on);
        self.current_on.store(on, Ordering::SeqCst);

        tracing::debug!(target: "paper_switch::widget", ?parent, on, "attached reveal switch");

        self.layout(ctx);
        Ok(())
    }

    /// Detach the control from its container, removing its layers.
    ///
    /// In-flight reveal animations are dropped without notification.
    pub fn detach(&mut self, ctx: &mut SceneContext<'_>) {
        let tree = ctx.tree();
        if let Some(shape) = self.shape.take() {
            let _ = tree.remove_layer(shape);
        }
        if let Some(control_layer) = self.control_layer.take() {
            let _ = tree.remove_layer(control_layer);
        }
        self.parent_layer = None;
        self.radius = 0.0;
    }

    // =========================================================================
    // Signal Access
    // =========================================================================

    /// Get the animation-started signal.
    ///
    /// Emitted when a reveal begins, with the logical state at that moment.
    pub fn animation_started(&self) -> &Signal<bool> {
        &self.animation_started
    }

    /// Get the animation-stopped signal.
    ///
    /// Emitted when a reveal stops, with the logical state at that moment
    /// and whether the animation completed rather than being interrupted.
    pub fn animation_stopped(&self) -> &Signal<(bool, bool)> {
        &self.animation_stopped
    }

    /// Get the toggled signal of the underlying switch.
    pub fn toggled(&self) -> &Signal<bool> {
        &self.inner.toggled
    }

    /// Get the clicked signal of the underlying switch.
    pub fn clicked(&self) -> &Signal<bool> {
        &self.inner.clicked
    }

    /// Get the pressed signal of the underlying switch.
    pub fn pressed(&self) -> &Signal<()> {
        &self.inner.pressed
    }

    /// Get the released signal of the underlying switch.
    pub fn released(&self) -> &Signal<()> {
        &self.inner.released
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// The user flipped the switch; value changes from interaction always
    /// animate.
    fn user_toggled(&mut self, ctx: &mut SceneContext<'_>) {
        self.current_on.store(self.inner.is_on(), Ordering::SeqCst);
        self.run_transition(ctx);
    }

    /// Start the reveal transition for the current state.
    ///
    /// Returns without animating when the state already matches the last
    /// committed transition.
    fn run_transition(&mut self, ctx: &mut SceneContext<'_>) {
        let on = self.inner.is_on();
        if !self.gate.try_commit(on) {
            return;
        }

        let Some(shape) = self.shape else {
            tracing::debug!(target: "paper_switch::widget", on, "transition without attached container, disc skipped");
            return;
        };

        let fill = self.resolved_tint();
        let duration = self.duration;
        let direction = RevealDirection::for_state(on);
        let tree = ctx.tree();

        // Resolved at transition time so tint changes between toggles are
        // honored.
        let _ = tree.set_fill_color(shape, fill);

        // The opposite direction must not keep running underneath.
        tree.cancel_animation(shape, direction.opposite().key());

        let (from, to) = direction.endpoints();
        let started_signal = self.animation_started.clone();
        let started_state = self.current_on.clone();
        let stopped_signal = self.animation_stopped.clone();
        let stopped_state = self.current_on.clone();

        let animation = ScaleAnimation::new(from, to, duration)
            .with_easing(direction.easing())
            .on_started(move || {
                started_signal.emit(started_state.load(Ordering::SeqCst));
            })
            .on_stopped(move |finished| {
                stopped_signal.emit((stopped_state.load(Ordering::SeqCst), finished));
            });

        let _ = tree.begin_animation(shape, direction.key(), animation);
    }

    /// Snap the disc to the resting transform for the current state.
    ///
    /// Drops any in-flight reveal silently; a snap is not an interruption
    /// notification and produces no animation signals.
    fn snap_to_state(&mut self, ctx: &mut SceneContext<'_>) {
        let on = self.inner.is_on();
        self.gate.force(on);

        let Some(shape) = self.shape else {
            return;
        };

        let tree = ctx.tree();
        tree.discard_animation(shape, RevealDirection::Expand.key());
        tree.discard_animation(shape, RevealDirection::Collapse.key());
        let _ = tree.set_transform(shape, resting_transform(on));
    }
}

impl Default for PaperSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for PaperSwitch {
    fn object_id(&self) -> ObjectId {
        self.inner.widget_base().object_id()
    }
}

impl Widget for PaperSwitch {
    fn widget_base(&self) -> &WidgetBase {
        self.inner.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.inner.widget_base_mut()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }

    /// Position the disc so that, fully scaled, it covers the container no
    /// matter where the control sits inside it.
    fn layout(&mut self, ctx: &mut SceneContext<'_>) {
        let (Some(parent), Some(shape), Some(control_layer)) =
            (self.parent_layer, self.shape, self.control_layer)
        else {
            tracing::debug!(target: "paper_switch::widget", "layout before attach, skipped");
            return;
        };

        let geometry = self.inner.geometry();
        let tree = ctx.tree();
        let Ok(parent_frame) = tree.frame(parent) else {
            tracing::debug!(target: "paper_switch::widget", "container layer gone, layout skipped");
            return;
        };

        // Distance from the control's center to the container's farthest
        // corner; a disc of this radius always covers the container.
        let center = geometry.center();
        let x = center.x.max(parent_frame.width() - center.x);
        let y = center.y.max(parent_frame.height() - center.y);
        self.radius = x.hypot(y);

        let side = self.radius * 2.0;
        let _ = tree.set_frame(shape, Rect::from_center(center, Size::new(side, side)));
        let _ = tree.set_anchor_point(shape, Point::new(0.5, 0.5));
        let _ = tree.set_path(
            shape,
            Some(Path::circle(Point::new(self.radius, self.radius), self.radius)),
        );

        let _ = tree.set_frame(control_layer, geometry);
        let _ = tree.set_corner_radius(control_layer, geometry.height() / 2.0);

        tracing::trace!(target: "paper_switch::widget", radius = self.radius, "reveal layout");
    }

    fn event(&mut self, event: &mut WidgetEvent, ctx: &mut SceneContext<'_>) -> bool {
        match event {
            WidgetEvent::MousePress(e) => {
                if self.inner.handle_mouse_press(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::MouseRelease(e) => {
                if self.inner.handle_mouse_release(e) {
                    self.user_toggled(ctx);
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::KeyPress(e) => {
                if self.inner.handle_key_press(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::KeyRelease(e) => {
                if self.inner.handle_key_release(e) {
                    self.user_toggled(ctx);
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::Resize(e) => {
                self.inner.widget_base_mut().set_size(e.new_size);
                self.layout(ctx);
                event.accept();
                true
            }
        }
    }
}

static_assertions::assert_impl_all!(PaperSwitch: Send, Sync);
