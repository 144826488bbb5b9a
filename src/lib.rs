pub mod app;
pub mod calendar;
pub mod editor;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::{AppState, Message, Mode};
pub use calendar::{Event, EventColor, EventData, EventStore};
pub use editor::{EditorCommand, EventEditor, SubmitRejection};
