//! Winit input event adapter
//!
//! Translates Winit window events into [`PointerInput`] updates. A click is
//! reported when the primary button is released, matching the DOM `click`
//! event.

use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::input::PointerInput;

/// Feeds a Winit window event into `input`.
///
/// Returns `true` if the event produced a click.
pub fn process_window_event(input: &mut PointerInput, event: &WindowEvent) -> bool {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            input.handle_cursor_move(position.x, position.y);
            false
        }

        WindowEvent::MouseInput {
            state: ElementState::Released,
            button: MouseButton::Left,
            ..
        } => {
            input.click();
            true
        }

        WindowEvent::Resized(size) => {
            input.handle_resize(size.width, size.height);
            false
        }

        _ => false,
    }
}
