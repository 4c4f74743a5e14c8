use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::mouse::DragState;
use crate::scene::command::SceneCommand;

/// Converts raw input events into [`SceneCommand`]s.
///
/// Owns all transient input state (cursor position, drag phase). A move
/// while dragging becomes a camera rotation; a move while idle becomes a
/// hover (picking) probe; a wheel event becomes a zoom. Button events only
/// drive the drag state machine and never produce commands themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputProcessor {
    drag: DragState,
    cursor: Vec2,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProcessor {
    /// Create a processor with the cursor at the origin and no drag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            drag: DragState::new(),
            cursor: Vec2::ZERO,
        }
    }

    /// Current cursor position in pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<SceneCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                match self.drag.motion(self.cursor) {
                    Some(delta) => {
                        Some(SceneCommand::RotateCamera { delta })
                    }
                    None => Some(SceneCommand::Hover { x, y }),
                }
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                if pressed {
                    self.drag.press(self.cursor);
                } else {
                    self.drag.release();
                }
                None
            }
            InputEvent::MouseButton { .. } => None,
            InputEvent::Scroll { dy, .. } => {
                Some(SceneCommand::Zoom { delta: dy })
            }
        }
    }
}
