// Tuning constants for the background animation and the slide carousel.
// Distances are world units, times are milliseconds unless noted.

// Particle swarm
pub const PARTICLE_COUNT: usize = 200;
pub const SPAWN_EXTENT: f32 = 40.0; // particles spawn in a cube of this edge length
pub const VELOCITY_SPREAD: f32 = 0.01; // per-axis velocity range, centered on zero
pub const FIELD_BOUNDARY: f32 = 20.0; // |coord| beyond this flips that axis' velocity

// Pointer repulsion
pub const POINTER_WORLD_SCALE: f32 = 20.0; // normalized pointer -> world x/y
pub const REPEL_RADIUS: f32 = 8.0;
pub const REPEL_STRENGTH: f32 = 0.3; // displacement per frame

// Camera orbit
pub const CAMERA_ORBIT_RADIUS: f32 = 30.0;
pub const CAMERA_HEIGHT: f32 = 30.0;
pub const CAMERA_ORBIT_RATE: f64 = 0.0002; // radians per wall-clock millisecond
pub const CAMERA_BLEND: f32 = 0.02; // fraction of remaining distance covered per frame
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Scene geometry
pub const CUBE_SIZE: f32 = 0.5;
pub const GRID_SIZE: f32 = 40.0;
pub const GRID_DIVISIONS: u32 = 40;
pub const GRID_COLOR: u32 = 0x444444;
pub const CUBE_COLOR: u32 = 0xffffff;

// Carousel
pub const SLIDE_INTERVAL_MS: i32 = 5000;
pub const PANEL_FADE_SCROLL_PX: f64 = 200.0; // scroll distance at which the panel is fully faded
