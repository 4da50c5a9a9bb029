pub mod carousel;
pub mod constants;
pub mod field;
pub mod orbit;
pub mod site;
pub mod slides;

pub use carousel::*;
pub use constants::*;
pub use field::*;
pub use orbit::*;
pub use slides::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
