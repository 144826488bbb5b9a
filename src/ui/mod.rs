pub mod geometry;
pub mod header;
pub mod help;
pub mod month_view;
pub mod theme;
