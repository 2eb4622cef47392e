//! Per-frame systems driving hologram layers.

/// Submits every layer's lattice and parameters, or hides it for the frame.
pub mod draw_layers;

/// Raises the geometry-dirty flag on layers whose look changed mesh density.
pub mod geometry_dirty;

/// Keyboard tweaks of line layers for the viewer.
pub mod look_controls;
