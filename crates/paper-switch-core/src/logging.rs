//! Logging facilities for paper-switch.
//!
//! The library is instrumented with the `tracing` crate. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "paper_switch_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "paper_switch_core::signal";
    /// Object model target.
    pub const OBJECT: &str = "paper_switch_core::object";
    /// Scene layer tree target.
    pub const LAYER: &str = "paper_switch_scene::layer";
    /// Layer animation engine target.
    pub const ANIMATION: &str = "paper_switch_scene::animation";
    /// Widget layer target.
    pub const WIDGET: &str = "paper_switch::widget";
}
