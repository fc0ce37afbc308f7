use std::net::SocketAddr;

use axum::{Json, Router, routing::post};
use base64::Engine;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use oceanprep::chart;
use oceanprep::config::{BathyParams, WaveParams};
use oceanprep::wave;

#[derive(Deserialize)]
struct GenerateRequest {
    seed: Option<u64>,
    width: Option<usize>,
    height: Option<usize>,
    // Bathymetry
    blur_sigma: Option<f32>,
    noise_amp: Option<f32>,
    slope_min: Option<f32>,
    slope_max: Option<f32>,
    normal_z: Option<f32>,
    // Wave curve overlay (optional layer)
    wavelength: Option<f32>,
}

#[derive(Serialize)]
struct GenerateResponse {
    layers: Vec<Layer>,
    timings: Vec<TimingEntry>,
    width: usize,
    height: usize,
}

#[derive(Serialize)]
struct Layer {
    name: String,
    data_url: String,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

fn encode_png(rgba: &[u8], w: usize, h: usize) -> String {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder
        .write_image(rgba, w as u32, h as u32, image::ExtendedColorType::Rgba8)
        .expect("PNG encode failed");
    let b64 = base64::engine::general_purpose::STANDARD.encode(&buf);
    format!("data:image/png;base64,{}", b64)
}

async fn generate_handler(Json(req): Json<GenerateRequest>) -> Json<GenerateResponse> {
    let seed = req.seed.unwrap_or(42);
    let width = req.width.unwrap_or(256);
    let height = req.height.unwrap_or(256);

    let defaults = BathyParams::default();
    let blur_sigma = req.blur_sigma.unwrap_or(defaults.blur_sigma);
    let noise_amp = req.noise_amp.unwrap_or(defaults.noise_amp);
    let slope_min = req.slope_min.unwrap_or(defaults.slope_min);
    let slope_max = req.slope_max.unwrap_or(defaults.slope_max);
    let normal_z = req.normal_z.unwrap_or(defaults.normal_z);
    let wavelength = req.wavelength;

    let response = tokio::task::spawn_blocking(move || {
        let params = BathyParams {
            blur_sigma,
            noise_amp,
            slope_min,
            slope_max,
            normal_z,
        };
        let (bathy, timings) = oceanprep::generate(seed, width, height, &params);

        let mut layers = vec![
            Layer {
                name: "heightmap".into(),
                data_url: encode_png(&bathy.heightmap, width, height),
            },
            Layer {
                name: "normals".into(),
                data_url: encode_png(&bathy.normal_map, width, height),
            },
            Layer {
                name: "depth".into(),
                data_url: encode_png(&bathy.depth_preview, width, height),
            },
        ];

        if let Some(wavelength) = wavelength {
            let wave_params = WaveParams {
                wavelength,
                ..WaveParams::default()
            };
            let curve = wave::sample_curve(&wave_params);
            let rgba = chart::line_chart(&curve, width, height);
            layers.push(Layer {
                name: "wave_speed".into(),
                data_url: encode_png(&rgba, width, height),
            });
        }

        let timing_entries = timings
            .iter()
            .map(|t| TimingEntry {
                name: t.name.to_string(),
                ms: t.ms,
            })
            .collect();

        GenerateResponse {
            layers,
            timings: timing_entries,
            width,
            height,
        }
    })
    .await
    .unwrap();

    Json(response)
}

#[tokio::main]
async fn main() {
    let frontend = ServeDir::new("frontend");

    let app = Router::new()
        .route("/api/generate", post(generate_handler))
        .fallback_service(frontend);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    eprintln!("oceanprep server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
