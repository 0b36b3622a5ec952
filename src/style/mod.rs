pub mod color;
pub mod theme;
