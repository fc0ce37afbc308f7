use std::path::PathBuf;

use oceanprep::config::FoamParams;
use oceanprep::foam;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let input: PathBuf = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("ocean_foam_texture.jpg"));
    let output: PathBuf = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("foam.png"));
    let threshold: u8 = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(FoamParams::default().threshold);

    eprintln!(
        "Extracting foam mask from {} (threshold {})",
        input.display(),
        threshold
    );

    let img = image::open(&input)
        .expect("failed to open input texture")
        .into_rgb8();
    let masked = foam::extract(&img, &FoamParams { threshold });

    let foam_px = masked.pixels().filter(|p| p.0[3] == 255).count();
    let total = (masked.width() * masked.height()) as usize;
    eprintln!(
        "Foam coverage: {:.1}% of {} pixels",
        foam_px as f64 / total as f64 * 100.0,
        total
    );

    masked.save(&output).expect("failed to save foam mask");
    eprintln!("Saved {}", output.display());
}
