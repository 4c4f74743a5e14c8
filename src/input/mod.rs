//! Platform-agnostic input events and the drag/command state machine.
//!
//! The hosting frontend (a notebook canvas, a window, a test) feeds
//! [`InputEvent`]s into an [`InputProcessor`], which tracks cursor and drag
//! state and emits [`SceneCommand`](crate::scene::command::SceneCommand)s
//! for the scene to execute.

mod event;
mod mouse;
mod processor;

pub use event::{InputEvent, MouseButton};
pub use mouse::DragState;
pub use processor::InputProcessor;
