/// Row-major flat grid. No per-cell objects, f32 friendly.
/// Edges are clamped (a seabed patch has no wrap topology).
#[derive(Clone, Debug)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub w: usize,
    pub h: usize,
}

impl<T: Copy + Default> Grid<T> {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            data: vec![T::default(); w * h],
            w,
            h,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl Grid<f32> {
    /// Min and max over the field, ignoring non-finite cells.
    pub fn min_max(&self) -> (f32, f32) {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for &v in &self.data {
            if v.is_finite() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        (lo, hi)
    }

    /// Min-max normalize in place to [0, 1]. A constant field maps to 0.
    pub fn normalize(&mut self) {
        let (lo, hi) = self.min_max();
        let range = hi - lo;
        if range <= 0.0 {
            for v in &mut self.data {
                *v = 0.0;
            }
            return;
        }
        for v in &mut self.data {
            *v = (*v - lo) / range;
        }
    }
}

/// Per-axis finite differences: central in the interior, one-sided at the
/// borders. Returns (d/dx, d/dy) grids with unit cell spacing.
pub fn gradient(field: &Grid<f32>) -> (Grid<f32>, Grid<f32>) {
    let w = field.w;
    let h = field.h;
    let mut dx = Grid::<f32>::new(w, h);
    let mut dy = Grid::<f32>::new(w, h);

    for y in 0..h {
        for x in 0..w {
            let gx = if w == 1 {
                0.0
            } else if x == 0 {
                field.get(1, y) - field.get(0, y)
            } else if x == w - 1 {
                field.get(w - 1, y) - field.get(w - 2, y)
            } else {
                (field.get(x + 1, y) - field.get(x - 1, y)) * 0.5
            };
            let gy = if h == 1 {
                0.0
            } else if y == 0 {
                field.get(x, 1) - field.get(x, 0)
            } else if y == h - 1 {
                field.get(x, h - 1) - field.get(x, h - 2)
            } else {
                (field.get(x, y + 1) - field.get(x, y - 1)) * 0.5
            };
            dx.set(x, y, gx);
            dy.set(x, y, gy);
        }
    }

    (dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_round_trip() {
        let mut g = Grid::<f32>::new(4, 3);
        g.set(3, 2, 7.5);
        assert_eq!(g.get(3, 2), 7.5);
        assert_eq!(g.idx(3, 2), 11);
    }

    #[test]
    fn normalize_maps_to_unit_range() {
        let mut g = Grid::<f32>::new(2, 2);
        g.data = vec![-4.0, 0.0, 2.0, 4.0];
        g.normalize();
        assert_eq!(g.data[0], 0.0);
        assert_eq!(g.data[3], 1.0);
        assert!(g.data.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn normalize_constant_field() {
        let mut g = Grid::<f32>::new(3, 1);
        g.data = vec![5.0; 3];
        g.normalize();
        assert!(g.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn gradient_of_linear_ramp_is_constant() {
        let w = 8;
        let h = 5;
        let mut g = Grid::<f32>::new(w, h);
        for y in 0..h {
            for x in 0..w {
                g.set(x, y, 2.0 * x as f32 - 3.0 * y as f32);
            }
        }
        let (dx, dy) = gradient(&g);
        for y in 0..h {
            for x in 0..w {
                assert!((dx.get(x, y) - 2.0).abs() < 1e-5);
                assert!((dy.get(x, y) + 3.0).abs() < 1e-5);
            }
        }
    }
}
