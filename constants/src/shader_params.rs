/// Texel stride used by the shader to recover missing depth from neighbours
pub const MESH_SCALAR: &str = "_MeshScalar";

/// Optional sprite spread across each line or point
pub const SPRITE: &str = "_Sprite";

/// 1.0 when `_Sprite` is bound, 0.0 otherwise
pub const USE_SPRITE: &str = "_UseSprite";

/// Line or point width in world units
pub const WIDTH: &str = "_Width";

pub const OPACITY: &str = "_Opacity";

/// Vertical = 0.0, Horizontal = 1.0
pub const LINE_ORIENTATION: &str = "_LineOrientation";

/// Shader used by line layers unless a material overrides it
pub const LINE_LAYER_SHADER_PATH: &str = "shaders/hologram_lines.wgsl";

/// Shader used by point layers unless a material overrides it
pub const POINT_LAYER_SHADER_PATH: &str = "shaders/hologram_points.wgsl";

/// File extension registered for look preset assets
pub const LOOK_PRESET_EXTENSION: &str = "look.json";
