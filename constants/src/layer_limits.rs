/// Upper bound for the number of lines in a line layer
pub const LINE_COUNT_MAX: u32 = 255;

/// Lower bound for segments per line. Zero would divide by zero in the texture step
pub const LINE_DENSITY_MIN: u32 = 1;

/// Upper bound for segments per line
pub const LINE_DENSITY_MAX: u32 = 255;

/// Points per axis accepted by a point layer
pub const POINT_DENSITY_MIN: u32 = 1;
pub const POINT_DENSITY_MAX: u32 = 255;

/// Line and point width ceiling, in millimetres
pub const LAYER_WIDTH_MAX: f32 = 50.0;

/// Millimetres per world unit (metres)
pub const MM_PER_WORLD_UNIT: f32 = 1000.0;

pub const DEFAULT_LINE_COUNT: u32 = 100;
pub const DEFAULT_LINE_DENSITY: u32 = 100;
pub const DEFAULT_POINT_DENSITY: u32 = 100;
pub const DEFAULT_LAYER_OPACITY: f32 = 0.75;
pub const DEFAULT_LAYER_WIDTH: f32 = 6.0;

/// Overall mesh density of a look
pub const MESH_DENSITY_MIN: u32 = 1;
pub const MESH_DENSITY_MAX: u32 = 255;
pub const DEFAULT_MESH_DENSITY: u32 = 128;
