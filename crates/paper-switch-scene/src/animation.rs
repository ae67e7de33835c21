//! Layer animations and easing functions.
//!
//! Animations interpolate a layer's scale transform between two fixed
//! endpoints over a duration, shaped by an easing function. They are begun,
//! cancelled, and advanced through the [`LayerTree`](crate::LayerTree);
//! completion and interruption are reported through per-animation callbacks.

use std::fmt;
use std::time::Duration;

use crate::transform::Transform3D;

/// Available easing functions.
///
/// Easing functions map a linear progress value (0.0 to 1.0) to a transformed
/// value that creates smoother, more natural-looking motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Cubic ease-in (more pronounced than quadratic).
    EaseInCubic,
    /// Cubic ease-out (more pronounced than quadratic).
    EaseOutCubic,
}

/// Apply an easing function to a progress value.
///
/// # Example
///
/// ```
/// use paper_switch_scene::{Easing, ease};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Ease-in: slower at start
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
///
/// // Ease-out: faster at start
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::EaseInCubic => t * t * t,
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
    }
}

/// Callback invoked when an animation begins.
pub type StartedCallback = Box<dyn FnMut() + Send>;

/// Callback invoked when an animation stops.
///
/// The argument is `true` when the animation ran to completion and `false`
/// when it was interrupted (cancelled or replaced).
pub type StoppedCallback = Box<dyn FnMut(bool) + Send>;

/// A scale animation between two transform endpoints.
///
/// The end value persists on the layer once the animation completes; the
/// layer does not snap back to its pre-animation transform.
pub struct ScaleAnimation {
    /// Starting transform.
    pub from: Transform3D,
    /// Ending transform. Applied to the layer verbatim on completion.
    pub to: Transform3D,
    /// Total animation duration.
    pub duration: Duration,
    /// Easing curve shaping the interpolation.
    pub easing: Easing,
    on_started: Option<StartedCallback>,
    on_stopped: Option<StoppedCallback>,
}

impl ScaleAnimation {
    /// Create an animation between two transforms with the given duration.
    pub fn new(from: Transform3D, to: Transform3D, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::Linear,
            on_started: None,
            on_stopped: None,
        }
    }

    /// Set the easing curve using builder pattern.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Install a callback fired when the animation begins.
    pub fn on_started<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_started = Some(Box::new(callback));
        self
    }

    /// Install a callback fired when the animation stops.
    ///
    /// The callback receives `true` if the animation completed naturally,
    /// `false` if it was interrupted.
    pub fn on_stopped<F>(mut self, callback: F) -> Self
    where
        F: FnMut(bool) + Send + 'static,
    {
        self.on_stopped = Some(Box::new(callback));
        self
    }

    /// Evaluate the animation value at the given linear progress.
    pub fn value_at(&self, progress: f32) -> Transform3D {
        self.from.lerp(self.to, ease(self.easing, progress))
    }

    pub(crate) fn notify_started(&mut self) {
        if let Some(callback) = self.on_started.as_mut() {
            callback();
        }
    }

    pub(crate) fn notify_stopped(&mut self, finished: bool) {
        if let Some(callback) = self.on_stopped.as_mut() {
            callback(finished);
        }
    }
}

impl fmt::Debug for ScaleAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleAnimation")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("has_on_started", &self.on_started.is_some())
            .field("has_on_stopped", &self.on_stopped.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(ScaleAnimation: Send);
