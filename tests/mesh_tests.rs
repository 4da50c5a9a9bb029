// Host-side tests for scene geometry builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/render/mesh.rs");
}

use glam::Vec3;
use mesh::*;

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

#[test]
fn cube_has_twelve_axis_aligned_edges() {
    let v = cube_wireframe(0.5, WHITE);
    assert_eq!(v.len(), 24);
    let mut edges = Vec::new();
    for pair in v.chunks(2) {
        let a = Vec3::from_array(pair[0].position);
        let b = Vec3::from_array(pair[1].position);
        let d = (b - a).abs();
        let moving_axes = [d.x, d.y, d.z].iter().filter(|c| **c > 0.0).count();
        assert_eq!(moving_axes, 1, "edge {a:?}->{b:?} is not axis aligned");
        assert!(((b - a).length() - 0.5).abs() < 1e-6);
        edges.push((pair[0].position, pair[1].position));
    }
    for (i, e) in edges.iter().enumerate() {
        for f in &edges[i + 1..] {
            assert!(e != f && (e.0, e.1) != (f.1, f.0), "duplicate edge {e:?}");
        }
    }
}

#[test]
fn cube_corners_sit_at_half_size() {
    for v in cube_wireframe(0.5, WHITE) {
        for c in v.position {
            assert_eq!(c.abs(), 0.25);
        }
        assert_eq!(v.color, WHITE);
    }
}

#[test]
fn grid_line_count_and_extent() {
    let v = grid_lines(40.0, 40, [0.1, 0.1, 0.1]);
    assert_eq!(v.len(), 41 * 4);
    for p in &v {
        assert_eq!(p.position[1], 0.0);
        assert!(p.position[0].abs() <= 20.0 + 1e-4);
        assert!(p.position[2].abs() <= 20.0 + 1e-4);
    }
    // outermost lines reach the edges
    assert!(v.iter().any(|p| p.position[2] == -20.0));
    assert!(v.iter().any(|p| (p.position[2] - 20.0).abs() < 1e-4));
}

#[test]
fn grid_with_zero_divisions_is_a_square() {
    let v = grid_lines(10.0, 0, WHITE);
    assert_eq!(v.len(), 8);
}

#[test]
fn hex_colors_convert_to_linear() {
    for c in hex_to_linear_rgb(0xffffff) {
        assert!((c - 1.0).abs() < 1e-5);
    }
    assert_eq!(hex_to_linear_rgb(0x000000), [0.0, 0.0, 0.0]);
    let g = hex_to_linear_rgb(0x444444);
    for c in g {
        assert!((c - 0.0578).abs() < 1e-3, "got {c}");
    }
    let r = hex_to_linear_rgb(0xff0000);
    assert!((r[0] - 1.0).abs() < 1e-5);
    assert_eq!((r[1], r[2]), (0.0, 0.0));
}

#[test]
fn surface_colour_follows_format_encoding() {
    // Unorm and float canvases show the value as written
    for format in [
        wgpu::TextureFormat::Bgra8Unorm,
        wgpu::TextureFormat::Rgba8Unorm,
        wgpu::TextureFormat::Rgba16Float,
    ] {
        let g = hex_to_surface_rgb(0x444444, format.is_srgb());
        for c in g {
            assert_eq!((c * 255.0).round() as u8, 0x44, "{format:?}");
        }
    }
    // sRGB formats encode on store, so they take linear input
    for format in [
        wgpu::TextureFormat::Bgra8UnormSrgb,
        wgpu::TextureFormat::Rgba8UnormSrgb,
    ] {
        assert_eq!(
            hex_to_surface_rgb(0x444444, format.is_srgb()),
            hex_to_linear_rgb(0x444444)
        );
    }
}

#[test]
fn white_is_white_on_any_surface() {
    for srgb in [false, true] {
        for c in hex_to_surface_rgb(0xffffff, srgb) {
            assert!((c - 1.0).abs() < 1e-5);
        }
    }
}

#[test]
fn srgb_to_linear_is_monotonic() {
    let mut prev = -1.0;
    for i in 0..=255 {
        let l = srgb_to_linear(i as f32 / 255.0);
        assert!(l > prev);
        prev = l;
    }
}

#[test]
fn instance_offset_packs_xyz() {
    let o = InstanceOffset::from_vec3(Vec3::new(1.0, -2.0, 3.5));
    assert_eq!(o.offset, [1.0, -2.0, 3.5, 0.0]);
    assert_eq!(std::mem::size_of::<InstanceOffset>(), 16);
    assert_eq!(std::mem::size_of::<LineVertex>(), 24);
}
