//! Retained layer tree.
//!
//! This module provides [`LayerTree`], an arena of [`Layer`] records
//! addressed by [`LayerId`]. Layers carry the retained drawing state a
//! compositor consumes: a frame in parent coordinates, an optional vector
//! path, fill and border styling, a scale transform with a normalized anchor
//! point, and z-ordered children (index 0 is the back).
//!
//! The tree also owns the animation engine: scale animations are begun under
//! a string key per layer, advanced by [`LayerTree::tick`], and cancelled by
//! key — beginning one direction of a transition cancels its opposite by
//! naming the opposite key.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use paper_switch_scene::{LayerTree, ScaleAnimation, Transform3D};
//!
//! let mut tree = LayerTree::new();
//! let root = tree.create_layer();
//! let disc = tree.create_layer();
//! tree.add_sublayer(root, disc).unwrap();
//!
//! let grow = ScaleAnimation::new(
//!     Transform3D::from_scale(0.0001),
//!     Transform3D::IDENTITY,
//!     Duration::from_millis(350),
//! );
//! tree.begin_animation(disc, "grow", grow).unwrap();
//!
//! let start = Instant::now();
//! tree.tick(start);
//! tree.tick(start + Duration::from_millis(350));
//! assert!(tree.transform(disc).unwrap().is_identity());
//! ```

use std::time::Instant;

use slotmap::{SlotMap, new_key_type};

use crate::animation::ScaleAnimation;
use crate::error::{SceneError, SceneResult};
use crate::path::Path;
use crate::transform::Transform3D;
use crate::types::{Color, Point, Rect};

new_key_type! {
    /// A unique identifier for a layer in the tree.
    pub struct LayerId;
}

/// Retained state for a single layer.
#[derive(Debug, Clone)]
struct Layer {
    /// Position and size in the parent layer's coordinate space.
    frame: Rect,
    /// Normalized anchor for the transform, (0.5, 0.5) = center.
    anchor_point: Point,
    /// Optional vector path defining the layer's shape.
    path: Option<Path>,
    /// Fill color for the path (or the frame when no path is set).
    fill_color: Color,
    /// Scale transform applied about the anchor point.
    transform: Transform3D,
    /// Whether children and path are clipped to the layer bounds.
    masks_to_bounds: bool,
    /// Border stroke width; 0.0 disables the border.
    border_width: f32,
    /// Border stroke color.
    border_color: Color,
    /// Corner rounding applied to the layer bounds.
    corner_radius: f32,
    parent: Option<LayerId>,
    /// Children in z-order; index 0 is the back.
    children: Vec<LayerId>,
}

impl Layer {
    fn new() -> Self {
        Self {
            frame: Rect::ZERO,
            anchor_point: Point::new(0.5, 0.5),
            path: None,
            fill_color: Color::TRANSPARENT,
            transform: Transform3D::IDENTITY,
            masks_to_bounds: false,
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
            corner_radius: 0.0,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// A running animation entry, keyed by layer and name.
struct RunningAnimation {
    layer: LayerId,
    key: &'static str,
    animation: ScaleAnimation,
    /// Set on the first tick after the animation is begun.
    begun_at: Option<Instant>,
}

/// The retained layer tree and its animation engine.
pub struct LayerTree {
    layers: SlotMap<LayerId, Layer>,
    animations: Vec<RunningAnimation>,
}

impl LayerTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            layers: SlotMap::with_key(),
            animations: Vec::new(),
        }
    }

    // =========================================================================
    // Hierarchy
    // =========================================================================

    /// Create a new detached layer and return its ID.
    pub fn create_layer(&mut self) -> LayerId {
        let id = self.layers.insert(Layer::new());
        tracing::trace!(target: "paper_switch_scene::layer", ?id, "created layer");
        id
    }

    /// Remove a layer and all of its sublayers.
    ///
    /// Any animations running on the removed layers are dropped without
    /// notification; removal is teardown, not interruption.
    pub fn remove_layer(&mut self, id: LayerId) -> SceneResult<()> {
        if !self.layers.contains_key(id) {
            return Err(SceneError::InvalidLayer);
        }

        // Detach from the parent's child list.
        if let Some(parent_id) = self.layers[id].parent {
            if let Some(parent) = self.layers.get_mut(parent_id) {
                parent.children.retain(|&child| child != id);
            }
        }

        let mut doomed = vec![id];
        let mut cursor = 0;
        while cursor < doomed.len() {
            let current = doomed[cursor];
            cursor += 1;
            if let Some(layer) = self.layers.get(current) {
                doomed.extend(layer.children.iter().copied());
            }
        }

        tracing::trace!(target: "paper_switch_scene::layer", ?id, removed = doomed.len(), "removing layer subtree");

        for layer_id in doomed {
            self.animations.retain(|a| a.layer != layer_id);
            self.layers.remove(layer_id);
        }

        Ok(())
    }

    /// Check whether a layer exists.
    pub fn contains(&self, id: LayerId) -> bool {
        self.layers.contains_key(id)
    }

    /// Number of layers in the tree.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Append a sublayer at the front (top) of a parent's children.
    pub fn add_sublayer(&mut self, parent: LayerId, child: LayerId) -> SceneResult<()> {
        let len = self.sublayers(parent)?.len();
        self.insert_sublayer(parent, child, len)
    }

    /// Insert a sublayer at the given z-order index (0 = back).
    ///
    /// A child that already has a parent is moved. Inserting a layer into
    /// itself or one of its descendants is rejected.
    pub fn insert_sublayer(
        &mut self,
        parent: LayerId,
        child: LayerId,
        index: usize,
    ) -> SceneResult<()> {
        if !self.layers.contains_key(parent) || !self.layers.contains_key(child) {
            return Err(SceneError::InvalidLayer);
        }
        if parent == child || self.is_descendant_of(parent, child) {
            return Err(SceneError::CircularHierarchy);
        }

        // Detach from any current parent first.
        if let Some(old_parent) = self.layers[child].parent {
            if let Some(old) = self.layers.get_mut(old_parent) {
                old.children.retain(|&c| c != child);
            }
        }

        let len = self.layers[parent].children.len();
        if index > len {
            return Err(SceneError::IndexOutOfBounds { index, len });
        }

        self.layers[parent].children.insert(index, child);
        self.layers[child].parent = Some(parent);
        Ok(())
    }

    /// Check whether `id` is a descendant of `ancestor`.
    fn is_descendant_of(&self, id: LayerId, ancestor: LayerId) -> bool {
        let mut current = self.layers.get(id).and_then(|l| l.parent);
        while let Some(parent_id) = current {
            if parent_id == ancestor {
                return true;
            }
            current = self.layers.get(parent_id).and_then(|l| l.parent);
        }
        false
    }

    /// Get a layer's parent.
    pub fn parent(&self, id: LayerId) -> SceneResult<Option<LayerId>> {
        self.layers
            .get(id)
            .map(|l| l.parent)
            .ok_or(SceneError::InvalidLayer)
    }

    /// Get a layer's children in z-order (index 0 = back).
    pub fn sublayers(&self, id: LayerId) -> SceneResult<Vec<LayerId>> {
        self.layers
            .get(id)
            .map(|l| l.children.clone())
            .ok_or(SceneError::InvalidLayer)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    fn layer(&self, id: LayerId) -> SceneResult<&Layer> {
        self.layers.get(id).ok_or(SceneError::InvalidLayer)
    }

    fn layer_mut(&mut self, id: LayerId) -> SceneResult<&mut Layer> {
        self.layers.get_mut(id).ok_or(SceneError::InvalidLayer)
    }

    /// Get a layer's frame in parent coordinates.
    pub fn frame(&self, id: LayerId) -> SceneResult<Rect> {
        self.layer(id).map(|l| l.frame)
    }

    /// Set a layer's frame in parent coordinates.
    pub fn set_frame(&mut self, id: LayerId, frame: Rect) -> SceneResult<()> {
        self.layer_mut(id).map(|l| l.frame = frame)
    }

    /// Get a layer's normalized anchor point.
    pub fn anchor_point(&self, id: LayerId) -> SceneResult<Point> {
        self.layer(id).map(|l| l.anchor_point)
    }

    /// Set a layer's normalized anchor point ((0.5, 0.5) = center).
    pub fn set_anchor_point(&mut self, id: LayerId, anchor: Point) -> SceneResult<()> {
        self.layer_mut(id).map(|l| l.anchor_point = anchor)
    }

    /// Get a layer's path.
    pub fn path(&self, id: LayerId) -> SceneResult<Option<&Path>> {
        self.layer(id).map(|l| l.path.as_ref())
    }

    /// Set or clear a layer's path.
    pub fn set_path(&mut self, id: LayerId, path: Option<Path>) -> SceneResult<()> {
        self.layer_mut(id).map(|l| l.path = path)
    }

    /// Get a layer's fill color.
    pub fn fill_color(&self, id: LayerId) -> SceneResult<Color> {
        self.layer(id).map(|l| l.fill_color)
    }

    /// Set a layer's fill color.
    pub fn set_fill_color(&mut self, id: LayerId, color: Color) -> SceneResult<()> {
        self.layer_mut(id).map(|l| l.fill_color = color)
    }

    /// Get a layer's current transform.
    pub fn transform(&self, id: LayerId) -> SceneResult<Transform3D> {
        self.layer(id).map(|l| l.transform)
    }

    /// Set a layer's transform directly.
    ///
    /// Does not touch running animations; callers that snap a layer should
    /// discard any animation that would overwrite the value on the next tick.
    pub fn set_transform(&mut self, id: LayerId, transform: Transform3D) -> SceneResult<()> {
        self.layer_mut(id).map(|l| l.transform = transform)
    }

    /// Get whether a layer clips to its bounds.
    pub fn masks_to_bounds(&self, id: LayerId) -> SceneResult<bool> {
        self.layer(id).map(|l| l.masks_to_bounds)
    }

    /// Set whether a layer clips to its bounds.
    pub fn set_masks_to_bounds(&mut self, id: LayerId, masks: bool) -> SceneResult<()> {
        self.layer_mut(id).map(|l| l.masks_to_bounds = masks)
    }

    /// Get a layer's border width.
    pub fn border_width(&self, id: LayerId) -> SceneResult<f32> {
        self.layer(id).map(|l| l.border_width)
    }

    /// Set a layer's border width.
    pub fn set_border_width(&mut self, id: LayerId, width: f32) -> SceneResult<()> {
        self.layer_mut(id).map(|l| l.border_width = width)
    }

    /// Get a layer's border color.
    pub fn border_color(&self, id: LayerId) -> SceneResult<Color> {
        self.layer(id).map(|l| l.border_color)
    }

    /// Set a layer's border color.
    pub fn set_border_color(&mut self, id: LayerId, color: Color) -> SceneResult<()> {
        self.layer_mut(id).map(|l| l.border_color = color)
    }

    /// Get a layer's corner radius.
    pub fn corner_radius(&self, id: LayerId) -> SceneResult<f32> {
        self.layer(id).map(|l| l.corner_radius)
    }

    /// Set a layer's corner radius.
    pub fn set_corner_radius(&mut self, id: LayerId, radius: f32) -> SceneResult<()> {
        self.layer_mut(id).map(|l| l.corner_radius = radius)
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Begin an animation on a layer under the given key.
    ///
    /// If an animation with the same key is already running on the layer it
    /// is interrupted first (its stop callback fires with `false`). The new
    /// animation's start callback fires before this method returns; its
    /// clock starts at the first subsequent [`tick`](Self::tick).
    pub fn begin_animation(
        &mut self,
        layer: LayerId,
        key: &'static str,
        mut animation: ScaleAnimation,
    ) -> SceneResult<()> {
        if !self.layers.contains_key(layer) {
            return Err(SceneError::InvalidLayer);
        }

        self.cancel_animation(layer, key);

        tracing::debug!(target: "paper_switch_scene::animation", ?layer, key, duration_ms = animation.duration.as_millis() as u64, "beginning animation");
        animation.notify_started();
        self.animations.push(RunningAnimation {
            layer,
            key,
            animation,
            begun_at: None,
        });
        Ok(())
    }

    /// Interrupt an animation, firing its stop callback with `false`.
    ///
    /// Returns `true` if a running animation was found under the key.
    /// The layer keeps the last value the animation applied.
    pub fn cancel_animation(&mut self, layer: LayerId, key: &str) -> bool {
        let Some(pos) = self
            .animations
            .iter()
            .position(|a| a.layer == layer && a.key == key)
        else {
            return false;
        };

        let mut cancelled = self.animations.remove(pos);
        tracing::debug!(target: "paper_switch_scene::animation", ?layer, key, "cancelling animation");
        cancelled.animation.notify_stopped(false);
        true
    }

    /// Remove an animation without firing any callback.
    ///
    /// Returns `true` if a running animation was found under the key.
    pub fn discard_animation(&mut self, layer: LayerId, key: &str) -> bool {
        let Some(pos) = self
            .animations
            .iter()
            .position(|a| a.layer == layer && a.key == key)
        else {
            return false;
        };

        self.animations.remove(pos);
        tracing::trace!(target: "paper_switch_scene::animation", ?layer, key, "discarding animation");
        true
    }

    /// Check whether an animation is running on a layer under the key.
    pub fn has_animation(&self, layer: LayerId, key: &str) -> bool {
        self.animations
            .iter()
            .any(|a| a.layer == layer && a.key == key)
    }

    /// Check whether any animation is running.
    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Advance all running animations to the given instant.
    ///
    /// Each animation's clock starts at its first tick. Completed animations
    /// leave their end value on the layer and fire their stop callback with
    /// `true`.
    pub fn tick(&mut self, now: Instant) {
        let mut index = 0;
        while index < self.animations.len() {
            let (layer, value, completed) = {
                let entry = &mut self.animations[index];
                let begun_at = *entry.begun_at.get_or_insert(now);
                let elapsed = now.saturating_duration_since(begun_at);
                let progress = if entry.animation.duration.is_zero() {
                    1.0
                } else {
                    (elapsed.as_secs_f32() / entry.animation.duration.as_secs_f32()).min(1.0)
                };
                (entry.layer, entry.animation.value_at(progress), progress >= 1.0)
            };

            if let Some(layer) = self.layers.get_mut(layer) {
                layer.transform = value;
            }

            if completed {
                let mut done = self.animations.remove(index);
                // End value persists on the layer.
                if let Some(layer) = self.layers.get_mut(done.layer) {
                    layer.transform = done.animation.to;
                }
                tracing::debug!(target: "paper_switch_scene::animation", layer = ?done.layer, key = done.key, "animation completed");
                done.animation.notify_stopped(true);
            } else {
                index += 1;
            }
        }
    }
}

impl Default for LayerTree {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(LayerTree: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    fn grow_animation(duration_ms: u64) -> ScaleAnimation {
        ScaleAnimation::new(
            Transform3D::from_scale(0.0001),
            Transform3D::IDENTITY,
            Duration::from_millis(duration_ms),
        )
    }

    #[test]
    fn test_create_and_remove() {
        let mut tree = LayerTree::new();
        let id = tree.create_layer();
        assert!(tree.contains(id));
        tree.remove_layer(id).unwrap();
        assert!(!tree.contains(id));
        assert_eq!(tree.remove_layer(id), Err(SceneError::InvalidLayer));
    }

    #[test]
    fn test_insert_at_back() {
        let mut tree = LayerTree::new();
        let parent = tree.create_layer();
        let top = tree.create_layer();
        let back = tree.create_layer();

        tree.add_sublayer(parent, top).unwrap();
        tree.insert_sublayer(parent, back, 0).unwrap();

        assert_eq!(tree.sublayers(parent).unwrap(), vec![back, top]);
        assert_eq!(tree.parent(back).unwrap(), Some(parent));
    }

    #[test]
    fn test_insert_rejects_cycles() {
        let mut tree = LayerTree::new();
        let a = tree.create_layer();
        let b = tree.create_layer();
        tree.add_sublayer(a, b).unwrap();

        assert_eq!(
            tree.insert_sublayer(b, a, 0),
            Err(SceneError::CircularHierarchy)
        );
        assert_eq!(
            tree.insert_sublayer(a, a, 0),
            Err(SceneError::CircularHierarchy)
        );
    }

    #[test]
    fn test_insert_index_out_of_bounds() {
        let mut tree = LayerTree::new();
        let parent = tree.create_layer();
        let child = tree.create_layer();
        assert_eq!(
            tree.insert_sublayer(parent, child, 1),
            Err(SceneError::IndexOutOfBounds { index: 1, len: 0 })
        );
    }

    #[test]
    fn test_remove_cascades_and_detaches() {
        let mut tree = LayerTree::new();
        let root = tree.create_layer();
        let middle = tree.create_layer();
        let leaf = tree.create_layer();
        tree.add_sublayer(root, middle).unwrap();
        tree.add_sublayer(middle, leaf).unwrap();

        tree.remove_layer(middle).unwrap();
        assert!(tree.contains(root));
        assert!(!tree.contains(middle));
        assert!(!tree.contains(leaf));
        assert!(tree.sublayers(root).unwrap().is_empty());
    }

    #[test]
    fn test_reparent_moves_layer() {
        let mut tree = LayerTree::new();
        let a = tree.create_layer();
        let b = tree.create_layer();
        let child = tree.create_layer();

        tree.add_sublayer(a, child).unwrap();
        tree.add_sublayer(b, child).unwrap();

        assert!(tree.sublayers(a).unwrap().is_empty());
        assert_eq!(tree.sublayers(b).unwrap(), vec![child]);
    }

    #[test]
    fn test_animation_runs_to_completion() {
        let mut tree = LayerTree::new();
        let layer = tree.create_layer();

        let started = Arc::new(AtomicU32::new(0));
        let finished = Arc::new(AtomicU32::new(0));

        let started_clone = started.clone();
        let finished_clone = finished.clone();
        let animation = grow_animation(350)
            .on_started(move || {
                started_clone.fetch_add(1, Ordering::SeqCst);
            })
            .on_stopped(move |done| {
                assert!(done);
                finished_clone.fetch_add(1, Ordering::SeqCst);
            });

        tree.begin_animation(layer, "grow", animation).unwrap();
        assert_eq!(started.load(Ordering::SeqCst), 1);
        assert!(tree.has_animation(layer, "grow"));

        let t0 = Instant::now();
        tree.tick(t0);
        assert!(tree.is_animating());

        tree.tick(t0 + Duration::from_millis(175));
        let mid = tree.transform(layer).unwrap().scale().x;
        assert!(mid > 0.0001 && mid < 1.0);

        tree.tick(t0 + Duration::from_millis(350));
        assert!(!tree.is_animating());
        assert_eq!(finished.load(Ordering::SeqCst), 1);
        // End value persists.
        assert!(tree.transform(layer).unwrap().is_identity());
    }

    #[test]
    fn test_cancel_fires_stopped_false() {
        let mut tree = LayerTree::new();
        let layer = tree.create_layer();

        let outcomes = Arc::new(std::sync::Mutex::new(Vec::new()));
        let outcomes_clone = outcomes.clone();
        let animation = grow_animation(350).on_stopped(move |done| {
            outcomes_clone.lock().unwrap().push(done);
        });

        tree.begin_animation(layer, "grow", animation).unwrap();
        let t0 = Instant::now();
        tree.tick(t0);
        tree.tick(t0 + Duration::from_millis(100));

        assert!(tree.cancel_animation(layer, "grow"));
        assert_eq!(*outcomes.lock().unwrap(), vec![false]);
        assert!(!tree.is_animating());

        // Cancelling again is a no-op.
        assert!(!tree.cancel_animation(layer, "grow"));
    }

    #[test]
    fn test_discard_is_silent() {
        let mut tree = LayerTree::new();
        let layer = tree.create_layer();

        let stopped = Arc::new(AtomicU32::new(0));
        let stopped_clone = stopped.clone();
        let animation = grow_animation(350).on_stopped(move |_| {
            stopped_clone.fetch_add(1, Ordering::SeqCst);
        });

        tree.begin_animation(layer, "grow", animation).unwrap();
        assert!(tree.discard_animation(layer, "grow"));
        assert_eq!(stopped.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_same_key_replacement_interrupts() {
        let mut tree = LayerTree::new();
        let layer = tree.create_layer();

        let first_stopped = Arc::new(AtomicU32::new(0));
        let first_clone = first_stopped.clone();
        let first = grow_animation(350).on_stopped(move |done| {
            assert!(!done);
            first_clone.fetch_add(1, Ordering::SeqCst);
        });

        tree.begin_animation(layer, "grow", first).unwrap();
        tree.begin_animation(layer, "grow", grow_animation(350)).unwrap();

        assert_eq!(first_stopped.load(Ordering::SeqCst), 1);
        // Only the replacement remains.
        assert!(tree.has_animation(layer, "grow"));
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let mut tree = LayerTree::new();
        let layer = tree.create_layer();
        tree.begin_animation(layer, "grow", grow_animation(0)).unwrap();

        tree.tick(Instant::now());
        assert!(!tree.is_animating());
        assert!(tree.transform(layer).unwrap().is_identity());
    }

    #[test]
    fn test_remove_layer_drops_animations_silently() {
        let mut tree = LayerTree::new();
        let layer = tree.create_layer();

        let stopped = Arc::new(AtomicU32::new(0));
        let stopped_clone = stopped.clone();
        let animation = grow_animation(350).on_stopped(move |_| {
            stopped_clone.fetch_add(1, Ordering::SeqCst);
        });

        tree.begin_animation(layer, "grow", animation).unwrap();
        tree.remove_layer(layer).unwrap();

        assert!(!tree.is_animating());
        assert_eq!(stopped.load(Ordering::SeqCst), 0);
    }
}
