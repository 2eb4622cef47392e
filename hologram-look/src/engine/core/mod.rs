//! Viewer application setup.
//!
//! Builds the Bevy app used by the `hologram-viewer` binary for native and
//! WASM targets.

/// App creation, demo capture and scene spawning.
pub mod app_setup;

/// Platform-specific window configuration for native and WASM builds.
pub mod window_config;
