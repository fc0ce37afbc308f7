pub mod bathymetry;
pub mod chart;
pub mod config;
pub mod foam;
pub mod grid;
pub mod render;
pub mod rng;
pub mod wave;

use std::time::Instant;

use config::BathyParams;
use grid::Grid;

pub struct Bathymetry {
    pub w: usize,
    pub h: usize,
    pub field: Grid<f32>,
    pub normals: Vec<[f32; 3]>,
    pub heightmap: Vec<u8>,
    pub normal_map: Vec<u8>,
    pub depth_preview: Vec<u8>,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Run the full bathymetry pipeline: noise, blur, shaping, normal
/// estimation, rendering. Deterministic per seed.
pub fn generate(seed: u64, w: usize, h: usize, params: &BathyParams) -> (Bathymetry, Vec<Timing>) {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    // 1. White-noise field
    let t = Instant::now();
    let mut field = bathymetry::white_noise(w, h, seed);
    timings.push(Timing {
        name: "noise",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Gaussian smoothing
    let t = Instant::now();
    bathymetry::gaussian_blur(&mut field, params.blur_sigma);
    timings.push(Timing {
        name: "blur",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 3. Normalize + depth ramp
    let t = Instant::now();
    bathymetry::shape_field(&mut field, params);
    timings.push(Timing {
        name: "shape",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 4. Normals from the field gradient
    let t = Instant::now();
    let normals = bathymetry::estimate_normals(&field, params.normal_z);
    timings.push(Timing {
        name: "normals",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 5. Render output layers
    let t = Instant::now();
    let heightmap = render::render_heightmap(&field);
    let normal_map = render::render_normals(&normals);
    let depth_preview = render::render_depth(&field);
    timings.push(Timing {
        name: "render",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    timings.push(Timing {
        name: "TOTAL",
        ms: total_ms,
    });

    let bathy = Bathymetry {
        w,
        h,
        field,
        normals,
        heightmap,
        normal_map,
        depth_preview,
    };

    (bathy, timings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_consistent_layers() {
        let params = BathyParams::default();
        let (bathy, timings) = generate(42, 32, 24, &params);
        assert_eq!(bathy.field.data.len(), 32 * 24);
        assert_eq!(bathy.normals.len(), 32 * 24);
        assert_eq!(bathy.heightmap.len(), 32 * 24 * 4);
        assert_eq!(bathy.normal_map.len(), 32 * 24 * 4);
        assert_eq!(bathy.depth_preview.len(), 32 * 24 * 4);
        assert!(timings.iter().any(|t| t.name == "TOTAL"));
    }

    #[test]
    fn generate_is_deterministic_per_seed() {
        let params = BathyParams::default();
        let (a, _) = generate(7, 32, 32, &params);
        let (b, _) = generate(7, 32, 32, &params);
        assert_eq!(a.field.data, b.field.data);
        assert_eq!(a.normal_map, b.normal_map);
    }

    #[test]
    fn normal_map_blue_channel_never_dips_below_mid() {
        // Normals always face up out of the seabed, so encoded Z >= 128.
        let (bathy, _) = generate(3, 48, 48, &BathyParams::default());
        for px in bathy.normal_map.chunks_exact(4) {
            assert!(px[2] >= 128);
        }
    }
}
