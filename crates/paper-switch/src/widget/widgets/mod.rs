//! Concrete widgets.

mod paper_switch;
mod toggle_switch;

pub use paper_switch::{DEFAULT_DURATION, DEFAULT_TINT_COLOR, PaperSwitch};
pub use toggle_switch::ToggleSwitch;
