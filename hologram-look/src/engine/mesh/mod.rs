//! Lattice mesh generation for hologram layers.
//!
//! Vertices live in normalised `[0, 1]²` capture space. The layer shaders map them
//! onto the capture texture and displace them by the sampled depth.

/// Line-strip lattice with strip boundary flags encoded in `uv.x`.
///
/// All lines are packed into one strip; the shader culls the connecting edges.
pub mod line_lattice_mesh;

/// Regular point lattice for point layers.
pub mod point_lattice_mesh;
