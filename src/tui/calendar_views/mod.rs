pub mod header;
pub mod month;
