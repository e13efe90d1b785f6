//! Seeded 2D simplex noise
//!
//! Each generator owns an immutable permutation table built once from an
//! integer seed, so evaluation is a pure function of the input coordinates.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Skewing factors for the 2D triangular lattice
const F2: f64 = 0.366_025_403_784_438_63; // 0.5 * (sqrt(3) - 1)
const G2: f64 = 0.211_324_865_405_187_1; // (3 - sqrt(3)) / 6

/// The classic 12-direction gradient set (2D projection of grad3).
/// Fixed, not seed-dependent.
const GRAD2: [[f64; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// 2D simplex noise generator.
///
/// The permutation table is a shuffled bijection on 0..=255, duplicated to
/// 512 entries so corner lookups never need an index-wrapping branch.
#[derive(Clone)]
pub struct SimplexNoise {
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Build a generator from a seed. The same seed always yields the same
    /// permutation table.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);

        // Fisher-Yates shuffle of the identity permutation
        for i in (1..256).rev() {
            let j = rng.gen_range(0..=i);
            table.swap(i, j);
        }

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&table);
        perm[256..].copy_from_slice(&table);

        Self { perm }
    }

    /// Evaluate noise at a continuous 2D coordinate.
    ///
    /// Output lies in approximately [-1, 1]. Non-finite inputs evaluate to
    /// 0.0 rather than propagating NaN into the table indexing.
    pub fn noise2d(&self, x: f64, y: f64) -> f64 {
        if !x.is_finite() || !y.is_finite() {
            return 0.0;
        }

        // Skew input space to determine the containing simplex cell
        let s = (x + y) * F2;
        let i = (x + s).floor() as i64;
        let j = (y + s).floor() as i64;

        // Unskew back to get the cell origin, then the offset from it
        let t = (i + j) as f64 * G2;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);

        // Which of the two triangles are we in? The x0 > y0 comparison must
        // match the unskew math exactly or triangle seams become visible.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let g0 = self.gradient(ii, jj);
        let g1 = self.gradient(ii + i1, jj + j1);
        let g2 = self.gradient(ii + 1, jj + 1);

        let n0 = corner_contribution(g0, x0, y0);
        let n1 = corner_contribution(g1, x1, y1);
        let n2 = corner_contribution(g2, x2, y2);

        // 70.0 brings the summed contributions into roughly [-1, 1]
        70.0 * (n0 + n1 + n2)
    }

    /// Chained permutation lookup selecting one of the 12 gradients.
    #[inline]
    fn gradient(&self, i: usize, j: usize) -> [f64; 2] {
        let hash = self.perm[(i + self.perm[j] as usize) & 255] as usize;
        GRAD2[hash % 12]
    }
}

/// Radial falloff for one simplex corner: t^4 * dot(g, d) inside the
/// kernel radius, zero outside.
#[inline]
fn corner_contribution(g: [f64; 2], dx: f64, dy: f64) -> f64 {
    let mut t = 0.5 - dx * dx - dy * dy;
    if t < 0.0 {
        0.0
    } else {
        t *= t;
        t * t * (g[0] * dx + g[1] * dy)
    }
}
