use std::path::PathBuf;

use oceanprep::config::BathyParams;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);
    let size: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(256);
    let out_dir: PathBuf = args
        .get(3)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));

    std::fs::create_dir_all(&out_dir).expect("failed to create output directory");

    let params = BathyParams::default();

    eprintln!(
        "Generating {}x{} bathymetry with seed={}, sigma={}, slope=[{}, {}]",
        size, size, seed, params.blur_sigma, params.slope_min, params.slope_max
    );

    let (bathy, timings) = oceanprep::generate(seed, size, size, &params);

    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:20} {:8.1} ms", t.name, t.ms);
    }

    let save = |name: &str, rgba: &[u8]| {
        let path = out_dir.join(name);
        image::save_buffer(
            &path,
            rgba,
            bathy.w as u32,
            bathy.h as u32,
            image::ColorType::Rgba8,
        )
        .expect("failed to save image");
        eprintln!("Saved {}", path.display());
    };

    // 1. Grayscale height-field
    save("bathy.png", &bathy.heightmap);

    // 2. Normal map
    save("bathy_norms.png", &bathy.normal_map);

    // 3. Colored depth preview
    save("depth.png", &bathy.depth_preview);

    eprintln!("\nDone.");
}
