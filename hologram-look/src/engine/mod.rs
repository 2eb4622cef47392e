pub mod core;
pub mod hologram;
pub mod layers;
pub mod mesh;
pub mod render;
pub mod systems;
