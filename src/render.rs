use rayon::prelude::*;

use crate::grid::Grid;

// Water palette, deep to shallow.
const WATER_DEEP: [u8; 4] = [18, 36, 70, 255];
const WATER_MID: [u8; 4] = [32, 55, 92, 255];
const WATER_SHALLOW: [u8; 4] = [38, 78, 120, 255];
const COAST_SHALLOW: [u8; 4] = [52, 100, 145, 255];

#[inline]
fn lerp_color(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    [
        (a[0] as f32 + (b[0] as f32 - a[0] as f32) * t).round() as u8,
        (a[1] as f32 + (b[1] as f32 - a[1] as f32) * t).round() as u8,
        (a[2] as f32 + (b[2] as f32 - a[2] as f32) * t).round() as u8,
        255,
    ]
}

/// Grayscale heightmap, min-max normalized so the full [0, 255] range is
/// used regardless of the field's units.
pub fn render_heightmap(field: &Grid<f32>) -> Vec<u8> {
    let (lo, hi) = field.min_max();
    let range = (hi - lo).max(f32::EPSILON);
    let w = field.w;
    let h = field.h;
    let mut rgba = vec![0u8; w * h * 4];
    rgba.par_chunks_mut(4)
        .zip(field.data.par_iter())
        .for_each(|(px, &v)| {
            let t = (v - lo) / range;
            let g = (t * 255.0).clamp(0.0, 255.0) as u8;
            px.copy_from_slice(&[g, g, g, 255]);
        });
    rgba
}

/// Encode unit normals as RGB: each component mapped from [-1, 1] to
/// [0, 255]. Flat seabed encodes as (128, 128, 255).
pub fn render_normals(normals: &[[f32; 3]]) -> Vec<u8> {
    let mut rgba = vec![0u8; normals.len() * 4];
    rgba.par_chunks_mut(4)
        .zip(normals.par_iter())
        .for_each(|(px, n)| {
            let enc = |c: f32| (((c + 1.0) * 0.5) * 255.0).round().clamp(0.0, 255.0) as u8;
            px.copy_from_slice(&[enc(n[0]), enc(n[1]), enc(n[2]), 255]);
        });
    rgba
}

/// Colored depth preview: the field min-max normalized and run through the
/// water palette, deepest cells darkest.
pub fn render_depth(field: &Grid<f32>) -> Vec<u8> {
    let (lo, hi) = field.min_max();
    let range = (hi - lo).max(f32::EPSILON);
    let w = field.w;
    let h = field.h;
    let mut rgba = vec![0u8; w * h * 4];
    rgba.par_chunks_mut(4)
        .zip(field.data.par_iter())
        .for_each(|(px, &v)| {
            let t = (v - lo) / range;
            let color = if t < 0.4 {
                lerp_color(WATER_DEEP, WATER_MID, t / 0.4)
            } else if t < 0.75 {
                lerp_color(WATER_MID, WATER_SHALLOW, (t - 0.4) / 0.35)
            } else {
                lerp_color(WATER_SHALLOW, COAST_SHALLOW, (t - 0.75) / 0.25)
            };
            px.copy_from_slice(&color);
        });
    rgba
}
