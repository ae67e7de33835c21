//! Core systems for paper-switch.
//!
//! This crate provides the foundational components shared by the paper-switch
//! widget library:
//!
//! - **Object Model**: Parent-child ownership, naming, stable identifiers
//! - **Signal/Slot System**: Type-safe inter-object communication
//! - **Logging**: `tracing` targets for the library's subsystems
//!
//! # Signal/Slot Example
//!
//! ```
//! use paper_switch_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod object;
pub mod signal;

pub use error::{CoreError, Result, SignalError};
pub use object::{
    Object, ObjectBase, ObjectError, ObjectId, ObjectRegistry, ObjectResult,
    SharedObjectRegistry, global_registry, init_global_registry,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
