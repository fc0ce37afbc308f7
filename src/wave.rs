use std::f32::consts::TAU;

use crate::config::WaveParams;

const GRAVITY: f32 = 9.8;

/// Phase speed of a surface wave of the given wavelength over water of the
/// given depth: v = sqrt(g * 2pi/lambda * tanh(2pi * d / lambda)).
///
/// Negative depths make the radicand negative and the result NaN; callers
/// plotting the curve skip those samples.
#[inline]
pub fn phase_speed(depth: f32, wavelength: f32) -> f32 {
    let k = TAU / wavelength;
    (GRAVITY * k * (k * depth).tanh()).sqrt()
}

/// Deep-water limit of the phase speed: sqrt(g * lambda / 2pi).
#[inline]
pub fn deep_water_speed(wavelength: f32) -> f32 {
    (GRAVITY * wavelength / TAU).sqrt()
}

/// Sample the dispersion curve over [depth_min, depth_max], endpoints
/// included.
pub fn sample_curve(params: &WaveParams) -> Vec<(f32, f32)> {
    let n = params.samples.max(2);
    let step = (params.depth_max - params.depth_min) / (n - 1) as f32;
    (0..n)
        .map(|i| {
            let d = params.depth_min + step * i as f32;
            (d, phase_speed(d, params.wavelength))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_is_zero_at_zero_depth() {
        assert_eq!(phase_speed(0.0, 35.0), 0.0);
    }

    #[test]
    fn speed_is_nan_below_the_surface_datum() {
        assert!(phase_speed(-1.0, 35.0).is_nan());
    }

    #[test]
    fn speed_increases_with_depth() {
        let mut prev = 0.0;
        for i in 1..=50 {
            let v = phase_speed(i as f32 * 0.1, 35.0);
            assert!(v > prev, "not monotonic at depth {}", i as f32 * 0.1);
            prev = v;
        }
    }

    #[test]
    fn deep_water_limit_bounds_the_curve() {
        let limit = deep_water_speed(35.0);
        for i in 0..200 {
            let v = phase_speed(i as f32 * 0.5, 35.0);
            assert!(v <= limit + 1e-4);
        }
        // tanh saturates: at many-wavelength depth we are essentially there.
        assert!((phase_speed(200.0, 35.0) - limit).abs() < 1e-3);
    }

    #[test]
    fn sample_curve_covers_the_range() {
        let params = WaveParams::default();
        let curve = sample_curve(&params);
        assert_eq!(curve.len(), params.samples);
        assert_eq!(curve.first().unwrap().0, params.depth_min);
        assert!((curve.last().unwrap().0 - params.depth_max).abs() < 1e-5);
        // Negative half of the range is NaN, positive half is finite.
        assert!(curve.first().unwrap().1.is_nan());
        assert!(curve.last().unwrap().1.is_finite());
    }
}
