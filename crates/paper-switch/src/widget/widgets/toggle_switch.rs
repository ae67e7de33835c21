//! Plain boolean toggle switch.
//!
//! This module provides [`ToggleSwitch`], the two-state toggle primitive the
//! reveal control composes. It owns the boolean value and the standard
//! interaction behavior: clicking flips the value, as does Space or Enter
//! while focused.
//!
//! # Signals
//!
//! - `toggled(bool)`: Emitted when the on/off value changes
//! - `clicked(bool)`: Emitted when the switch is clicked
//! - `pressed()`: Emitted when the switch is pressed down
//! - `released()`: Emitted when the switch is released

use paper_switch_core::{Object, ObjectId, Signal};
use paper_switch_scene::Size;

use crate::widget::{
    Key, KeyPressEvent, KeyReleaseEvent, MouseButton, MousePressEvent, MouseReleaseEvent,
    SceneContext, SizeHint, Widget, WidgetBase, WidgetEvent,
};

/// Default switch dimensions.
const DEFAULT_SIZE: Size = Size::new(51.0, 31.0);

/// A two-state boolean toggle switch.
///
/// The switch owns its on/off value and the interaction that flips it.
/// Presentation is left to composing controls; the switch itself has no
/// layers.
pub struct ToggleSwitch {
    /// Widget base for common widget functionality.
    base: WidgetBase,

    /// The current on/off value.
    on: bool,

    /// Signal emitted when the on/off value changes.
    pub toggled: Signal<bool>,

    /// Signal emitted when the switch is clicked. The parameter is the new
    /// on/off value.
    pub clicked: Signal<bool>,

    /// Signal emitted when the switch is pressed down.
    pub pressed: Signal<()>,

    /// Signal emitted when the switch is released.
    pub released: Signal<()>,
}

impl ToggleSwitch {
    /// Create a new switch in the off state.
    pub fn new() -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focusable(true);
        base.set_size(DEFAULT_SIZE);

        Self {
            base,
            on: false,
            toggled: Signal::new(),
            clicked: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
        }
    }

    /// Get the current on/off value.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Set the on/off value.
    ///
    /// Emits `toggled` if the value actually changed.
    pub fn set_on(&mut self, on: bool) {
        if self.on != on {
            self.on = on;
            self.toggled.emit(on);
            self.base.update();
        }
    }

    /// Set the on/off value using builder pattern.
    pub fn with_on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Flip the on/off value.
    pub fn toggle(&mut self) {
        self.set_on(!self.on);
    }

    /// Programmatically click the switch.
    ///
    /// This flips the value and emits the clicked signal.
    pub fn click(&mut self) {
        if !self.base.is_enabled() {
            return;
        }

        self.toggle();
        self.clicked.emit(self.on);
        self.base.update();
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a mouse press event.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if !self.base.is_enabled() {
            return false;
        }

        self.base.set_pressed(true);
        self.pressed.emit(());
        true
    }

    /// Handle a mouse release event.
    ///
    /// Returns `true` if the release completed a click (the press started on
    /// this switch and the pointer is still over it).
    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if !self.base.is_enabled() {
            return false;
        }

        let was_pressed = self.base.is_pressed();
        let is_over = self.base.contains_point(event.local_pos);

        self.base.set_pressed(false);
        self.released.emit(());

        if is_over && was_pressed {
            self.click();
            return true;
        }

        false
    }

    /// Handle a key press event.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }

        match event.key {
            Key::Space | Key::Enter => {
                if !event.is_repeat {
                    self.base.set_pressed(true);
                    self.pressed.emit(());
                }
                true
            }
            _ => false,
        }
    }

    /// Handle a key release event.
    ///
    /// Returns `true` if the release completed a click.
    pub fn handle_key_release(&mut self, event: &KeyReleaseEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }

        match event.key {
            Key::Space | Key::Enter => {
                self.base.set_pressed(false);
                self.released.emit(());
                self.click();
                true
            }
            _ => false,
        }
    }
}

impl Default for ToggleSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for ToggleSwitch {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for ToggleSwitch {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::new(DEFAULT_SIZE)
    }

    fn event(&mut self, event: &mut WidgetEvent, _ctx: &mut SceneContext<'_>) -> bool {
        match event {
            WidgetEvent::MousePress(e) => {
                if self.handle_mouse_press(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::MouseRelease(e) => {
                if self.handle_mouse_release(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::KeyPress(e) => {
                if self.handle_key_press(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::KeyRelease(e) => {
                if self.handle_key_release(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}

static_assertions::assert_impl_all!(ToggleSwitch: Send, Sync);
