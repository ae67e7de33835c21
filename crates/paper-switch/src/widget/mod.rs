//! Widget system for paper-switch.
//!
//! This module provides the widget architecture the reveal control is built
//! on:
//!
//! - [`Widget`] trait: The base trait for the library's UI elements
//! - [`WidgetBase`]: Common implementation for widget functionality
//! - [`SceneContext`]: Handle to the layer tree during layout and events
//! - Widget events for input handling and resizing
//! - [`widgets`]: The concrete controls ([`ToggleSwitch`], [`PaperSwitch`])
//!
//! # Creating a Widget
//!
//! 1. Define a struct with a `WidgetBase` field
//! 2. Implement the `Widget` trait
//! 3. Provide `size_hint()` for layout
//! 4. Implement `layout()`/`event()` as needed
//!
//! ```
//! use paper_switch::widget::{SceneContext, SizeHint, Widget, WidgetBase, WidgetEvent};
//! use paper_switch_core::{Object, ObjectId, init_global_registry};
//!
//! init_global_registry();
//!
//! struct Indicator {
//!     base: WidgetBase,
//! }
//!
//! impl Indicator {
//!     fn new() -> Self {
//!         Self {
//!             base: WidgetBase::new::<Self>(),
//!         }
//!     }
//! }
//!
//! impl Object for Indicator {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.object_id()
//!     }
//! }
//!
//! impl Widget for Indicator {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//!
//!     fn size_hint(&self) -> SizeHint {
//!         SizeHint::from_dimensions(16.0, 16.0)
//!     }
//! }
//!
//! let indicator = Indicator::new();
//! assert_eq!(indicator.size_hint().preferred.width, 16.0);
//! ```

mod base;
mod events;
mod geometry;
pub mod reveal;
mod traits;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use base::WidgetBase;
pub use events::{
    EventBase, Key, KeyPressEvent, KeyReleaseEvent, MouseButton, MousePressEvent,
    MouseReleaseEvent, ResizeEvent, WidgetEvent,
};
pub use geometry::SizeHint;
pub use traits::{SceneContext, Widget};

// Re-export widgets for convenience
pub use widgets::{PaperSwitch, ToggleSwitch};
