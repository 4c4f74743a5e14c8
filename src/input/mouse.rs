use glam::Vec2;

/// Drag phase: deltas exist only while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragPhase {
    /// No button held; cursor motion is hover, not drag.
    Idle,
    /// Button held; `last` is the previous cursor position.
    Dragging {
        /// Previous cursor position in pixels.
        last: Vec2,
    },
}

/// Explicit mouse-drag state machine.
///
/// Transitions: Idle → Dragging on [`press`](Self::press), Dragging → Idle
/// on [`release`](Self::release). [`motion`](Self::motion) yields a drag
/// delta only in the Dragging state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    phase: DragPhase,
}

impl Default for DragState {
    fn default() -> Self {
        Self::new()
    }
}

impl DragState {
    /// Create an idle drag state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Button pressed at `pos`: Idle → Dragging.
    pub fn press(&mut self, pos: Vec2) {
        self.phase = DragPhase::Dragging { last: pos };
    }

    /// Button released: Dragging → Idle.
    pub fn release(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Cursor moved to `pos`. Returns the delta from the previous position
    /// while dragging, `None` while idle.
    pub fn motion(&mut self, pos: Vec2) -> Option<Vec2> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { last } => {
                self.phase = DragPhase::Dragging { last: pos };
                Some(pos - last)
            }
        }
    }
}
