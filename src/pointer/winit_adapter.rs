//! Adapter to convert winit touch and mouse events to our pointer stream

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};

use super::{Point, PointerEvent, PointerId};

/// Pointer id used for the synthetic mouse pointer
///
/// Touch ids come from the platform and start low; the mouse takes the top
/// of the range so the two never collide.
pub const MOUSE_POINTER_ID: PointerId = PointerId(u64::MAX);

/// Convert a physical position to logical viewport coordinates
fn to_point(position: PhysicalPosition<f64>, scale_factor: f64) -> Point {
    let logical = position.to_logical::<f64>(scale_factor);
    Point::new(logical.x, logical.y)
}

/// Convert the pieces of a winit touch event to a pointer event
pub fn pointer_event_from_touch_parts(
    id: u64,
    phase: TouchPhase,
    location: PhysicalPosition<f64>,
    scale_factor: f64,
) -> PointerEvent {
    let id = PointerId(id);
    match phase {
        TouchPhase::Started => PointerEvent::Down {
            id,
            position: to_point(location, scale_factor),
        },
        TouchPhase::Moved => PointerEvent::Move {
            id,
            position: to_point(location, scale_factor),
        },
        TouchPhase::Ended => PointerEvent::Up { id },
        TouchPhase::Cancelled => PointerEvent::Cancel { id },
    }
}

/// Convert a winit touch event to a pointer event
pub fn pointer_event_from_touch(touch: &Touch, scale_factor: f64) -> PointerEvent {
    pointer_event_from_touch_parts(touch.id, touch.phase, touch.location, scale_factor)
}

/// Turns cursor motion plus the left mouse button into one synthetic pointer
///
/// Lets the drawer be driven with a mouse on desktop hosts. Only the left
/// button starts a gesture; leaving the window mid-press cancels it.
#[derive(Debug, Default)]
pub struct MousePointer {
    position: Option<Point>,
    pressed: bool,
}

impl MousePointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Record a cursor move; emits a move event while the button is held
    pub fn cursor_moved(&mut self, position: Point) -> Option<PointerEvent> {
        self.position = Some(position);
        self.pressed.then_some(PointerEvent::Move {
            id: MOUSE_POINTER_ID,
            position,
        })
    }

    /// Record a button change; only the left button is tracked
    pub fn button(&mut self, button: MouseButton, state: ElementState) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match (state, self.pressed) {
            (ElementState::Pressed, false) => {
                let position = self.position?;
                self.pressed = true;
                Some(PointerEvent::Down {
                    id: MOUSE_POINTER_ID,
                    position,
                })
            }
            (ElementState::Released, true) => {
                self.pressed = false;
                Some(PointerEvent::Up {
                    id: MOUSE_POINTER_ID,
                })
            }
            _ => None,
        }
    }

    /// Cursor left the window
    pub fn cursor_left(&mut self) -> Option<PointerEvent> {
        self.position = None;
        if std::mem::take(&mut self.pressed) {
            Some(PointerEvent::Cancel {
                id: MOUSE_POINTER_ID,
            })
        } else {
            None
        }
    }

    /// Translate a window event, returning a pointer event if it maps to one
    pub fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        scale_factor: f64,
    ) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(to_point(*position, scale_factor))
            }
            WindowEvent::MouseInput { state, button, .. } => self.button(*button, *state),
            WindowEvent::CursorLeft { .. } => self.cursor_left(),
            WindowEvent::Touch(touch) => Some(pointer_event_from_touch(touch, scale_factor)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_phases_map_to_pointer_events() {
        let pos = PhysicalPosition::new(20.0, 40.0);
        assert_eq!(
            pointer_event_from_touch_parts(3, TouchPhase::Started, pos, 2.0),
            PointerEvent::down(3, 10.0, 20.0)
        );
        assert_eq!(
            pointer_event_from_touch_parts(3, TouchPhase::Moved, pos, 1.0),
            PointerEvent::moved(3, 20.0, 40.0)
        );
        assert_eq!(
            pointer_event_from_touch_parts(3, TouchPhase::Ended, pos, 1.0),
            PointerEvent::up(3)
        );
        assert_eq!(
            pointer_event_from_touch_parts(3, TouchPhase::Cancelled, pos, 1.0),
            PointerEvent::cancel(3)
        );
    }

    #[test]
    fn test_mouse_press_without_position_is_ignored() {
        let mut mouse = MousePointer::new();
        assert_eq!(mouse.button(MouseButton::Left, ElementState::Pressed), None);
        assert!(!mouse.is_pressed());
    }

    #[test]
    fn test_mouse_drag_sequence() {
        let mut mouse = MousePointer::new();
        assert_eq!(mouse.cursor_moved(Point::new(5.0, 5.0)), None);

        let down = mouse.button(MouseButton::Left, ElementState::Pressed);
        assert!(matches!(down, Some(PointerEvent::Down { .. })));

        let moved = mouse.cursor_moved(Point::new(50.0, 6.0));
        assert_eq!(
            moved,
            Some(PointerEvent::Move {
                id: MOUSE_POINTER_ID,
                position: Point::new(50.0, 6.0)
            })
        );

        let up = mouse.button(MouseButton::Left, ElementState::Released);
        assert_eq!(up, Some(PointerEvent::Up { id: MOUSE_POINTER_ID }));
    }

    #[test]
    fn test_mouse_right_button_ignored() {
        let mut mouse = MousePointer::new();
        mouse.cursor_moved(Point::new(5.0, 5.0));
        assert_eq!(mouse.button(MouseButton::Right, ElementState::Pressed), None);
    }

    #[test]
    fn test_cursor_left_cancels_active_press() {
        let mut mouse = MousePointer::new();
        mouse.cursor_moved(Point::new(5.0, 5.0));
        mouse.button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(
            mouse.cursor_left(),
            Some(PointerEvent::Cancel { id: MOUSE_POINTER_ID })
        );
        assert_eq!(mouse.cursor_left(), None);
    }
}
