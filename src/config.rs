/// Tunable parameters for bathymetry synthesis — exposed as UI sliders in
/// the preview frontend.
#[derive(Clone, Debug)]
pub struct BathyParams {
    /// Gaussian blur sigma applied to the white-noise field, in pixels.
    pub blur_sigma: f32,

    /// Noise contribution after normalization, remapped to [-amp, amp].
    pub noise_amp: f32,

    /// Linear west-to-east depth ramp endpoints.
    pub slope_min: f32,
    pub slope_max: f32,

    /// Z component fed to normal estimation before renormalizing.
    /// Smaller values exaggerate seabed relief in the normal map.
    pub normal_z: f32,
}

impl Default for BathyParams {
    fn default() -> Self {
        Self {
            blur_sigma: 10.0,
            noise_amp: 1.0,
            slope_min: -3.0,
            slope_max: 3.0,
            normal_z: 1.0,
        }
    }
}

/// Parameters for foam mask extraction.
#[derive(Clone, Debug)]
pub struct FoamParams {
    /// Per-channel brightness floor. A pixel is foam only if R, G and B all
    /// exceed this.
    pub threshold: u8,
}

impl Default for FoamParams {
    fn default() -> Self {
        Self { threshold: 140 }
    }
}

/// Parameters for the wave phase-speed curve.
#[derive(Clone, Debug)]
pub struct WaveParams {
    pub wavelength: f32,
    pub depth_min: f32,
    pub depth_max: f32,
    pub samples: usize,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wavelength: 35.0,
            depth_min: -3.0,
            depth_max: 3.0,
            samples: 100,
        }
    }
}
