//! Prelude module for paper-switch.
//!
//! Re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use paper_switch::prelude::*;
//! ```

// Object and signal systems
pub use paper_switch_core::{
    ConnectionId, Object, ObjectBase, ObjectId, Signal, init_global_registry,
};

// Scene types
pub use paper_switch_scene::{
    Color, Easing, LayerId, LayerTree, Path, Point, Rect, ScaleAnimation, Size, Transform3D,
};

// Widget foundation
pub use crate::widget::{SceneContext, SizeHint, Widget, WidgetBase, WidgetEvent};

// Events
pub use crate::widget::{
    Key, KeyPressEvent, KeyReleaseEvent, MouseButton, MousePressEvent, MouseReleaseEvent,
    ResizeEvent,
};

// Controls
pub use crate::widget::widgets::{PaperSwitch, ToggleSwitch};
