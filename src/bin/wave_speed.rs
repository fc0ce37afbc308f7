use std::path::PathBuf;

use oceanprep::chart;
use oceanprep::config::WaveParams;
use oceanprep::wave;

const CHART_W: usize = 640;
const CHART_H: usize = 480;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let defaults = WaveParams::default();
    let wavelength: f32 = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.wavelength);
    let depth_min: f32 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.depth_min);
    let depth_max: f32 = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.depth_max);
    let output: PathBuf = args
        .get(4)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("wave_speed.png"));

    let params = WaveParams {
        wavelength,
        depth_min,
        depth_max,
        ..defaults
    };

    eprintln!(
        "Wave phase speed for wavelength {} m over depth [{}, {}] m (deep-water limit {:.2} m/s)",
        params.wavelength,
        params.depth_min,
        params.depth_max,
        wave::deep_water_speed(params.wavelength)
    );

    let curve = wave::sample_curve(&params);
    let rgba = chart::line_chart(&curve, CHART_W, CHART_H);

    image::save_buffer(
        &output,
        &rgba,
        CHART_W as u32,
        CHART_H as u32,
        image::ColorType::Rgba8,
    )
    .expect("failed to save chart");
    eprintln!("Saved {}", output.display());
}
