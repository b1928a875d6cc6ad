use crate::controllers::interactive::InputEvent;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Browser-style wheel pixels per scrolled line.
const PIXELS_PER_LINE: f64 = 100.0;

/// Turns raw winit pointer events into session input. winit reports button
/// presses without a position, so the last cursor position is tracked here.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInputState {
    cursor: Option<(f64, f64)>,
    button_held: bool,
}

impl PointerInputState {
    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) -> InputEvent {
        self.cursor = Some((x, y));
        InputEvent::PointerMove { x, y }
    }

    /// Presses the UI claimed are dropped. A release ending a held drag is
    /// always forwarded, so the view never stays anchored after the button
    /// comes up over the UI.
    pub fn handle_mouse_input(
        &mut self,
        state: ElementState,
        button: MouseButton,
        ui_consumed: bool,
    ) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed if ui_consumed => None,
            ElementState::Pressed => {
                let (x, y) = self.cursor?;
                self.button_held = true;
                Some(InputEvent::PointerDown { x, y })
            }
            ElementState::Released => self.release(),
        }
    }

    /// Scrolling towards the user grows the zoom factor, as `deltaY` does in
    /// a browser.
    #[must_use]
    pub fn handle_scroll(&self, delta: MouseScrollDelta) -> Option<InputEvent> {
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, lines) => -f64::from(lines) * PIXELS_PER_LINE,
            MouseScrollDelta::PixelDelta(position) => -position.y,
        };

        if delta_y == 0.0 {
            return None;
        }

        Some(InputEvent::Wheel { delta_y })
    }

    /// Forgets all pointer state, e.g. on focus loss. Returns the release
    /// that ends a drag still in progress.
    pub fn reset(&mut self) -> Option<InputEvent> {
        let release = self.release();
        *self = Self::default();
        release
    }

    fn release(&mut self) -> Option<InputEvent> {
        if !self.button_held {
            return None;
        }

        self.button_held = false;
        let (x, y) = self.cursor?;

        Some(InputEvent::PointerUp { x, y })
    }
}
