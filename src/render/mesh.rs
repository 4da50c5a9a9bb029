use glam::Vec3;

/// Line-list vertex: world position plus linear RGB colour.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Per-instance translation (w unused, keeps 16-byte stride).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceOffset {
    pub offset: [f32; 4],
}

impl InstanceOffset {
    #[inline]
    pub fn from_vec3(v: Vec3) -> Self {
        Self {
            offset: [v.x, v.y, v.z, 0.0],
        }
    }
}

/// Convert one sRGB channel in 0..1 to linear.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` as encoded sRGB channels in 0..1.
#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// `0xRRGGBB` to linear RGB, for writing into an sRGB swapchain.
pub fn hex_to_linear_rgb(hex: u32) -> [f32; 3] {
    hex_to_rgb(hex).map(srgb_to_linear)
}

/// Vertex colour for a surface. `*Srgb` formats encode on store and take
/// linear input; unorm and float canvases are shown as written.
pub fn hex_to_surface_rgb(hex: u32, srgb_surface: bool) -> [f32; 3] {
    if srgb_surface {
        hex_to_linear_rgb(hex)
    } else {
        hex_to_rgb(hex)
    }
}

/// The 12 edges of an axis-aligned cube of edge `size`, centered on the origin.
pub fn cube_wireframe(size: f32, color: [f32; 3]) -> Vec<LineVertex> {
    let h = size * 0.5;
    let corner = |i: u32| {
        [
            if i & 1 != 0 { h } else { -h },
            if i & 2 != 0 { h } else { -h },
            if i & 4 != 0 { h } else { -h },
        ]
    };
    let mut out = Vec::with_capacity(24);
    for a in 0..8u32 {
        for bit in [1u32, 2, 4] {
            // each edge once: from the corner with the bit cleared
            if a & bit == 0 {
                out.push(LineVertex {
                    position: corner(a),
                    color,
                });
                out.push(LineVertex {
                    position: corner(a | bit),
                    color,
                });
            }
        }
    }
    out
}

/// Square grid on the x/z plane: `divisions + 1` lines along each axis.
pub fn grid_lines(size: f32, divisions: u32, color: [f32; 3]) -> Vec<LineVertex> {
    let half = size * 0.5;
    let step = size / divisions.max(1) as f32;
    let lines = divisions.max(1) + 1;
    let mut out = Vec::with_capacity(lines as usize * 4);
    for i in 0..lines {
        let k = -half + i as f32 * step;
        out.push(LineVertex {
            position: [-half, 0.0, k],
            color,
        });
        out.push(LineVertex {
            position: [half, 0.0, k],
            color,
        });
        out.push(LineVertex {
            position: [k, 0.0, -half],
            color,
        });
        out.push(LineVertex {
            position: [k, 0.0, half],
            color,
        });
    }
    out
}
