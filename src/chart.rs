//! Minimal line-chart rasterizer onto a raw RGBA buffer. Enough to plot a
//! sampled scalar function headlessly; not a plotting library.

const BG: [u8; 4] = [255, 255, 255, 255];
const FRAME: [u8; 4] = [40, 40, 40, 255];
const ZERO_LINE: [u8; 4] = [190, 190, 190, 255];
const CURVE: [u8; 4] = [30, 80, 200, 255];

const MARGIN_LEFT: usize = 48;
const MARGIN_RIGHT: usize = 16;
const MARGIN_TOP: usize = 16;
const MARGIN_BOTTOM: usize = 32;
const TICKS: usize = 4;
const TICK_LEN: usize = 5;

#[inline]
fn set_px(rgba: &mut [u8], w: usize, x: usize, y: usize, c: [u8; 4]) {
    let i = (y * w + x) * 4;
    rgba[i..i + 4].copy_from_slice(&c);
}

/// Bresenham segment, clipped to the buffer.
fn draw_line(rgba: &mut [u8], w: usize, h: usize, a: (i32, i32), b: (i32, i32), c: [u8; 4]) {
    let (mut x0, mut y0) = a;
    let (x1, y1) = b;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if x0 >= 0 && y0 >= 0 && (x0 as usize) < w && (y0 as usize) < h {
            set_px(rgba, w, x0 as usize, y0 as usize, c);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Value range padded so the curve never hugs the frame.
fn padded_range(lo: f32, hi: f32) -> (f32, f32) {
    if hi > lo {
        let pad = (hi - lo) * 0.05;
        (lo - pad, hi + pad)
    } else {
        (lo - 0.5, lo + 0.5)
    }
}

/// Render a sampled curve as an RGBA line chart. Non-finite samples break
/// the polyline and are skipped entirely (they do not affect the y-range).
pub fn line_chart(points: &[(f32, f32)], w: usize, h: usize) -> Vec<u8> {
    let mut rgba = vec![0u8; w * h * 4];
    for i in 0..w * h {
        rgba[i * 4..i * 4 + 4].copy_from_slice(&BG);
    }

    let x0 = MARGIN_LEFT;
    let x1 = w.saturating_sub(MARGIN_RIGHT).max(x0 + 1);
    let y0 = MARGIN_TOP;
    let y1 = h.saturating_sub(MARGIN_BOTTOM).max(y0 + 1);

    // Data ranges from finite samples only.
    let mut dx_lo = f32::INFINITY;
    let mut dx_hi = f32::NEG_INFINITY;
    let mut dy_lo = f32::INFINITY;
    let mut dy_hi = f32::NEG_INFINITY;
    for &(x, y) in points {
        if x.is_finite() {
            dx_lo = dx_lo.min(x);
            dx_hi = dx_hi.max(x);
        }
        if y.is_finite() {
            dy_lo = dy_lo.min(y);
            dy_hi = dy_hi.max(y);
        }
    }
    if !dx_lo.is_finite() || !dy_lo.is_finite() {
        // Nothing plottable; return the empty frame.
        draw_frame(&mut rgba, w, x0, x1, y0, y1);
        return rgba;
    }
    let (dx_lo, dx_hi) = padded_range(dx_lo, dx_hi);
    let (dy_lo, dy_hi) = padded_range(dy_lo, dy_hi);

    let to_px = |x: f32, y: f32| -> (i32, i32) {
        let px = x0 as f32 + (x - dx_lo) / (dx_hi - dx_lo) * (x1 - x0) as f32;
        let py = y1 as f32 - (y - dy_lo) / (dy_hi - dy_lo) * (y1 - y0) as f32;
        (px.round() as i32, py.round() as i32)
    };

    // Zero reference lines, when zero is inside the plotted range.
    if dx_lo < 0.0 && dx_hi > 0.0 {
        let (zx, _) = to_px(0.0, dy_lo);
        draw_line(&mut rgba, w, h, (zx, y0 as i32), (zx, y1 as i32), ZERO_LINE);
    }
    if dy_lo < 0.0 && dy_hi > 0.0 {
        let (_, zy) = to_px(dx_lo, 0.0);
        draw_line(&mut rgba, w, h, (x0 as i32, zy), (x1 as i32, zy), ZERO_LINE);
    }

    draw_frame(&mut rgba, w, x0, x1, y0, y1);

    // Polyline over consecutive finite samples.
    let mut prev: Option<(i32, i32)> = None;
    for &(x, y) in points {
        if x.is_finite() && y.is_finite() {
            let p = to_px(x, y);
            if let Some(q) = prev {
                draw_line(&mut rgba, w, h, q, p, CURVE);
            }
            prev = Some(p);
        } else {
            prev = None;
        }
    }

    rgba
}

fn draw_frame(rgba: &mut [u8], w: usize, x0: usize, x1: usize, y0: usize, y1: usize) {
    let h = rgba.len() / (w * 4);
    draw_line(rgba, w, h, (x0 as i32, y0 as i32), (x1 as i32, y0 as i32), FRAME);
    draw_line(rgba, w, h, (x0 as i32, y1 as i32), (x1 as i32, y1 as i32), FRAME);
    draw_line(rgba, w, h, (x0 as i32, y0 as i32), (x0 as i32, y1 as i32), FRAME);
    draw_line(rgba, w, h, (x1 as i32, y0 as i32), (x1 as i32, y1 as i32), FRAME);

    // Ticks on both axes
    for t in 0..=TICKS {
        let tx = x0 + (x1 - x0) * t / TICKS;
        let ty = y0 + (y1 - y0) * t / TICKS;
        draw_line(
            rgba, w, h,
            (tx as i32, y1 as i32),
            (tx as i32, (y1 + TICK_LEN) as i32),
            FRAME,
        );
        draw_line(
            rgba, w, h,
            ((x0 - TICK_LEN) as i32, ty as i32),
            (x0 as i32, ty as i32),
            FRAME,
        );
    }
}
