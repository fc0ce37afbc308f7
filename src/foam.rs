use image::{RgbImage, RgbaImage};
use rayon::prelude::*;

use crate::config::FoamParams;

/// Foam test for one pixel: bright in every channel, and bluer than red.
/// The blue-over-red check rejects sunlit sand and sky highlights that pass
/// a plain brightness threshold.
#[inline]
pub fn is_foam(r: u8, g: u8, b: u8, threshold: u8) -> bool {
    r > threshold && g > threshold && b > threshold && b > r
}

/// Derive the foam alpha mask from a texture photograph. The output carries
/// the source RGB untouched, with the mask in the alpha channel: 255 where
/// the pixel is foam, 0 elsewhere.
pub fn extract(img: &RgbImage, params: &FoamParams) -> RgbaImage {
    let w = img.width();
    let h = img.height();
    let src = img.as_raw();
    let threshold = params.threshold;

    let mut out = vec![0u8; (w * h * 4) as usize];
    out.par_chunks_mut(w as usize * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let src_row = &src[y * w as usize * 3..(y + 1) * w as usize * 3];
            for x in 0..w as usize {
                let [r, g, b] = [src_row[x * 3], src_row[x * 3 + 1], src_row[x * 3 + 2]];
                let a = if is_foam(r, g, b, threshold) { 255 } else { 0 };
                row[x * 4..x * 4 + 4].copy_from_slice(&[r, g, b, a]);
            }
        });

    RgbaImage::from_raw(w, h, out).expect("mask buffer matches image dimensions")
}
