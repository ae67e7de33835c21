//! Retained layer tree and animation engine for paper-switch.
//!
//! This crate provides the drawing-surface half of the paper-switch library:
//!
//! - **Geometry**: [`Point`], [`Size`], [`Rect`], [`Color`]
//! - **Paths**: [`Path`] with a circle constructor for reveal discs
//! - **Transforms**: [`Transform3D`] scale transforms with anchor points
//! - **Layers**: [`LayerTree`], an arena of retained layers with z-ordered
//!   children, clipping, and border styling
//! - **Animation**: keyed [`ScaleAnimation`]s with easing curves and
//!   per-animation start/stop callbacks, advanced by [`LayerTree::tick`]
//!
//! The crate is headless: it models what a compositor would draw, which is
//! all the widget layer needs to express and test its behavior. Animations
//! are advanced with an explicit `Instant` so integrations drive them from
//! whatever frame clock they have.

mod animation;
mod error;
mod layer;
mod path;
mod transform;
mod types;

pub use animation::{Easing, ScaleAnimation, StartedCallback, StoppedCallback, ease};
pub use error::{SceneError, SceneResult};
pub use layer::{LayerId, LayerTree};
pub use path::{Path, PathCommand};
pub use transform::Transform3D;
pub use types::{Color, Point, Rect, Size};
