use rayon::prelude::*;

use crate::config::BathyParams;
use crate::grid::{self, Grid};
use crate::rng::{normal, seed_u32};

const SALT_NOISE: u64 = 0x5EA8_ED00_CAFE_F00D;

/// Per-pixel standard-normal white noise, filled row-parallel.
pub fn white_noise(w: usize, h: usize, seed: u64) -> Grid<f32> {
    let noise_seed = seed_u32(seed, SALT_NOISE);
    let mut field = Grid::<f32>::new(w, h);
    field
        .data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, v) in row.iter_mut().enumerate() {
                *v = normal(x as i32, y as i32, noise_seed);
            }
        });
    field
}

/// Reflect an out-of-range index into [0, n). Mirror-without-repeat, so the
/// border sample itself is not duplicated twice in a row.
#[inline]
fn reflect(mut i: i64, n: i64) -> usize {
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= n {
            i = 2 * n - 1 - i;
        } else {
            return i as usize;
        }
    }
}

/// Separable Gaussian blur with reflecting edges on both axes.
/// Kernel is truncated at 4 sigma.
pub fn gaussian_blur(field: &mut Grid<f32>, sigma: f32) {
    let radius = (sigma * 4.0).ceil() as usize;
    if radius == 0 {
        return;
    }

    let kernel: Vec<f32> = (0..=radius)
        .map(|i| (-(i as f32 * i as f32) / (2.0 * sigma * sigma)).exp())
        .collect();
    let sum: f32 = kernel[0] + 2.0 * kernel[1..].iter().sum::<f32>();
    let kernel: Vec<f32> = kernel.iter().map(|k| k / sum).collect();

    let w = field.w;
    let h = field.h;
    let data = &mut field.data;

    // Horizontal pass
    let mut tmp = vec![0.0f32; w * h];
    tmp.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        for x in 0..w {
            let mut s = data[y * w + x] * kernel[0];
            for r in 1..=radius {
                s += data[y * w + reflect(x as i64 - r as i64, w as i64)] * kernel[r];
                s += data[y * w + reflect(x as i64 + r as i64, w as i64)] * kernel[r];
            }
            row[x] = s;
        }
    });

    // Vertical pass
    data.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        for x in 0..w {
            let mut s = tmp[y * w + x] * kernel[0];
            for r in 1..=radius {
                s += tmp[reflect(y as i64 - r as i64, h as i64) * w + x] * kernel[r];
                s += tmp[reflect(y as i64 + r as i64, h as i64) * w + x] * kernel[r];
            }
            row[x] = s;
        }
    });
}

/// Remap the blurred noise to [-noise_amp, noise_amp] and add the linear
/// west-to-east depth ramp.
pub fn shape_field(field: &mut Grid<f32>, params: &BathyParams) {
    // Blur shrinks the value spread; stretch back to a known range before
    // adding the ramp so noise_amp means what it says.
    field.normalize();

    let slope_span = params.slope_max - params.slope_min;
    let slope_min = params.slope_min;
    let noise_amp = params.noise_amp;
    let w = field.w;
    let denom = (w - 1).max(1) as f32;

    field.data.par_chunks_mut(w).for_each(|row| {
        for (x, v) in row.iter_mut().enumerate() {
            let noise = (*v - 0.5) * 2.0 * noise_amp;
            let ramp = slope_min + slope_span * (x as f32 / denom);
            *v = noise + ramp;
        }
    });
}

/// Build the seabed depth field: blurred white noise remapped to
/// [-noise_amp, noise_amp], plus a linear west-to-east ramp from slope_min
/// to slope_max.
pub fn build_field(seed: u64, w: usize, h: usize, params: &BathyParams) -> Grid<f32> {
    let mut field = white_noise(w, h, seed);
    gaussian_blur(&mut field, params.blur_sigma);
    shape_field(&mut field, params);
    field
}

/// Estimate tangent-space normals from the field gradient. Each normal is
/// the unit vector along (-dh/dx, -dh/dy, normal_z), so Z is always
/// positive: the seabed faces up.
pub fn estimate_normals(field: &Grid<f32>, normal_z: f32) -> Vec<[f32; 3]> {
    let (dx, dy) = grid::gradient(field);
    let n = field.w * field.h;
    let mut normals = vec![[0.0f32; 3]; n];
    normals.par_iter_mut().enumerate().for_each(|(i, out)| {
        let v = [-dx.data[i], -dy.data[i], normal_z];
        let mag = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        *out = [v[0] / mag, v[1] / mag, v[2] / mag];
    });
    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_noise_is_deterministic_per_seed() {
        let a = white_noise(16, 16, 99);
        let b = white_noise(16, 16, 99);
        let c = white_noise(16, 16, 100);
        assert_eq!(a.data, b.data);
        assert_ne!(a.data, c.data);
    }

    #[test]
    fn blur_preserves_constant_field() {
        let mut g = Grid::<f32>::new(12, 9);
        g.data.fill(3.25);
        gaussian_blur(&mut g, 2.0);
        for &v in &g.data {
            assert!((v - 3.25).abs() < 1e-4);
        }
    }

    #[test]
    fn blur_reduces_spread() {
        let mut g = white_noise(64, 64, 5);
        let (lo0, hi0) = g.min_max();
        gaussian_blur(&mut g, 4.0);
        let (lo1, hi1) = g.min_max();
        assert!(hi1 - lo1 < hi0 - lo0);
    }

    #[test]
    fn reflect_stays_in_range() {
        for i in -10..20 {
            let r = reflect(i, 8);
            assert!(r < 8);
        }
        assert_eq!(reflect(-1, 8), 0);
        assert_eq!(reflect(8, 8), 7);
        assert_eq!(reflect(3, 8), 3);
    }

    #[test]
    fn field_stays_within_noise_plus_slope_bounds() {
        let params = BathyParams::default();
        let field = build_field(42, 64, 64, &params);
        let (lo, hi) = field.min_max();
        assert!(lo >= params.slope_min - params.noise_amp - 1e-4);
        assert!(hi <= params.slope_max + params.noise_amp + 1e-4);
        // The ramp dominates: east edge must sit deeper than west edge.
        let west: f32 = (0..64).map(|y| field.get(0, y)).sum::<f32>() / 64.0;
        let east: f32 = (0..64).map(|y| field.get(63, y)).sum::<f32>() / 64.0;
        assert!(east > west);
    }

    #[test]
    fn normals_are_unit_length_and_face_up() {
        let field = build_field(7, 32, 32, &BathyParams::default());
        for n in estimate_normals(&field, 1.0) {
            let mag = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((mag - 1.0).abs() < 1e-4);
            assert!(n[2] > 0.0);
        }
    }

    #[test]
    fn flat_field_normals_point_straight_up() {
        let mut g = Grid::<f32>::new(8, 8);
        g.data.fill(-2.0);
        for n in estimate_normals(&g, 1.0) {
            assert_eq!(n, [0.0, 0.0, 1.0]);
        }
    }
}
