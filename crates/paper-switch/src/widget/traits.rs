//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait which is the foundation for the
//! controls in this library, and [`SceneContext`], the handle to the layer
//! tree passed into layout and event handling.

use paper_switch_core::Object;
use paper_switch_scene::{LayerTree, Point, Rect, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::SizeHint;

/// Context provided during widget layout and event handling.
///
/// This wraps the layer tree the widget's layers live in. Widgets receive it
/// instead of holding a tree reference themselves, so the tree has exactly
/// one writer per pass.
pub struct SceneContext<'a> {
    /// The layer tree to mutate.
    tree: &'a mut LayerTree,
}

impl<'a> SceneContext<'a> {
    /// Create a new scene context.
    pub fn new(tree: &'a mut LayerTree) -> Self {
        Self { tree }
    }

    /// Get the layer tree.
    #[inline]
    pub fn tree(&mut self) -> &mut LayerTree {
        self.tree
    }
}

/// The base trait for all UI elements in this library.
///
/// Each widget contains a [`WidgetBase`] that handles common functionality
/// and implements this trait to participate in layout and event dispatch.
///
/// # Example
///
/// ```ignore
/// use paper_switch::widget::{SceneContext, SizeHint, Widget, WidgetBase, WidgetEvent};
///
/// struct MyControl {
///     base: WidgetBase,
/// }
///
/// impl Widget for MyControl {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///
///     fn size_hint(&self) -> SizeHint {
///         SizeHint::from_dimensions(80.0, 30.0)
///     }
///
///     fn event(&mut self, event: &mut WidgetEvent, _ctx: &mut SceneContext<'_>) -> bool {
///         match event {
///             WidgetEvent::MousePress(_) => {
///                 event.accept();
///                 true
///             }
///             _ => false,
///         }
///     }
/// }
/// ```
pub trait Widget: Object {
    /// Get a reference to the widget base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's size preferences for layout.
    fn size_hint(&self) -> SizeHint;

    /// Synchronize the widget's layers with its geometry.
    ///
    /// Called after the widget's frame or its container's size changes.
    fn layout(&mut self, ctx: &mut SceneContext<'_>) {
        let _ = ctx;
    }

    /// Handle an event. Returns `true` if the event was handled.
    fn event(&mut self, event: &mut WidgetEvent, ctx: &mut SceneContext<'_>) -> bool {
        let _ = (event, ctx);
        false
    }

    // =========================================================================
    // Convenience delegation to WidgetBase
    // =========================================================================

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Check if a point (in local coordinates) is inside the widget.
    fn contains_point(&self, point: Point) -> bool {
        self.widget_base().contains_point(point)
    }
}
