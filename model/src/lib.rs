pub mod item;
pub mod movie;
