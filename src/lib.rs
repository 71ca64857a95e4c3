pub mod clustering;
pub mod interface;
pub mod render;
