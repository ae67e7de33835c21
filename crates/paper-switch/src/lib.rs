//! paper-switch - a toggle switch with a circular paper reveal.
//!
//! The library is built around one control: [`PaperSwitch`], a toggle switch
//! that reveals a colored disc behind itself when flipped on and hides it
//! again when flipped off. The disc grows out of the control's center until
//! it covers the container the switch is attached to.
//!
//! This is the main umbrella crate; it re-exports the core object/signal
//! systems and exposes the scene (layer tree) crate as [`scene`].
//!
//! # Example
//!
//! ```
//! use paper_switch::prelude::*;
//!
//! init_global_registry();
//!
//! let mut tree = LayerTree::new();
//! let container = tree.create_layer();
//! tree.set_frame(container, Rect::new(0.0, 0.0, 200.0, 100.0)).unwrap();
//!
//! let mut ctx = SceneContext::new(&mut tree);
//! let mut switch = PaperSwitch::new();
//! switch.set_geometry(Rect::new(10.0, 35.0, 51.0, 31.0));
//! switch.attach(&mut ctx, container).unwrap();
//!
//! switch.set_on(&mut ctx, true, true);
//! assert!(switch.is_on());
//! ```
//!
//! [`PaperSwitch`]: crate::widget::widgets::PaperSwitch

pub use paper_switch_core::*;

/// Scene (layer tree and animation) module.
pub mod scene {
    pub use paper_switch_scene::*;
}

pub mod prelude;
pub mod widget;
