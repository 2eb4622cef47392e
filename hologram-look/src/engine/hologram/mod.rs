//! Hologram look: the parent entity owning the capture and its layers.
//!
//! A look holds the capture texture and bounds that every child layer draws
//! against, and raises the geometry-dirty flag on its layers when its overall
//! mesh density changes.

/// `HologramLook` component and the commands that add layers to it.
pub mod look;

/// JSON look presets loaded as assets and expanded into layers.
pub mod preset;
