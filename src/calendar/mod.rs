pub mod event;
pub mod grid;
pub mod store;

pub use event::{Event, EventColor, EventData};
pub use grid::{generate_grid, month_label, shift_month, GRID_CELLS, WEEKDAY_LABELS};
pub use store::EventStore;
