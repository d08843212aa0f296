//! 8×8 pixel blocks, their discrete cosine transform and quantization.
//!
//! The DCT is the plain matrix form `C · (X − 128) · Cᵀ` and its inverse.
//! Quantization only rescales: coefficients are divided by the table without
//! rounding, so [`Block8x8::forward_transform`] and
//! [`Block8x8::reverse_transform`] are inverses up to floating point error.

use std::sync::OnceLock;

/// Side length of a block.
pub const N: usize = 8;

/// Reference JPEG luminance quantization table at 50% quality.
pub const QUANTIZATION_TABLE: [[u16; N]; N] = [
    [16, 11, 10, 16, 24, 40, 51, 61],
    [12, 12, 14, 19, 26, 58, 60, 55],
    [14, 13, 16, 24, 40, 57, 69, 56],
    [14, 17, 22, 29, 51, 87, 80, 62],
    [18, 22, 37, 56, 68, 109, 103, 77],
    [24, 35, 55, 64, 81, 104, 113, 92],
    [49, 64, 78, 87, 103, 121, 120, 101],
    [72, 92, 95, 98, 112, 100, 103, 99],
];

/// Level shift applied before the forward and after the inverse DCT.
const LEVEL_SHIFT: f64 = 128.0;

/// DCT basis, `C[0][j] = 1/√8` and `C[i][j] = √(2/8)·cos((2j+1)·i·π/16)`.
static COSINE: OnceLock<[[f64; N]; N]> = OnceLock::new();

fn cosine_matrix() -> &'static [[f64; N]; N] {
    COSINE.get_or_init(|| {
        let n = N as f64;
        let mut c = [[0.0f64; N]; N];
        for j in 0..N {
            c[0][j] = 1.0 / n.sqrt();
        }
        for i in 1..N {
            for j in 0..N {
                c[i][j] = (2.0 / n).sqrt()
                    * ((2.0 * j as f64 + 1.0) * i as f64 * std::f64::consts::PI / (2.0 * n)).cos();
            }
        }
        c
    })
}

/// A block of 8×8 values, either samples or DCT coefficients, `data[row][col]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Block8x8 {
    pub data: [[f64; N]; N],
}

impl Block8x8 {
    pub fn new(data: [[f64; N]; N]) -> Self {
        Self { data }
    }

    /// The (0,0) frequency term, the average brightness of the block.
    #[inline]
    pub fn dc(&self) -> f64 {
        self.data[0][0]
    }

    /// Forward DCT-II: samples to frequency domain.
    pub fn forward(&self) -> Self {
        let c = cosine_matrix();
        let mut temp = [[0.0f64; N]; N];
        for i in 0..N {
            for j in 0..N {
                temp[i][j] = (0..N)
                    .map(|k| (self.data[i][k] - LEVEL_SHIFT) * c[j][k])
                    .sum();
            }
        }

        let mut out = Self::default();
        for i in 0..N {
            for j in 0..N {
                out.data[i][j] = (0..N).map(|k| c[i][k] * temp[k][j]).sum();
            }
        }
        out
    }

    /// Inverse DCT: frequency domain back to samples.
    pub fn reverse(&self) -> Self {
        let c = cosine_matrix();
        let mut temp = [[0.0f64; N]; N];
        for i in 0..N {
            for j in 0..N {
                temp[i][j] = (0..N).map(|k| self.data[i][k] * c[k][j]).sum();
            }
        }

        let mut out = Self::default();
        for i in 0..N {
            for j in 0..N {
                out.data[i][j] =
                    (0..N).map(|k| c[k][i] * temp[k][j]).sum::<f64>() + LEVEL_SHIFT;
            }
        }
        out
    }

    /// Divides every coefficient by its table entry, no rounding.
    pub fn quantize(&self) -> Self {
        self.zip_table(|v, q| v / q)
    }

    pub fn dequantize(&self) -> Self {
        self.zip_table(|v, q| v * q)
    }

    /// `quantize(forward(self))`
    pub fn forward_transform(&self) -> Self {
        self.forward().quantize()
    }

    /// `reverse(dequantize(self))`
    pub fn reverse_transform(&self) -> Self {
        self.dequantize().reverse()
    }

    fn zip_table(&self, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut out = Self::default();
        for (y, row) in out.data.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = f(self.data[y][x], QUANTIZATION_TABLE[y][x] as f64);
            }
        }
        out
    }
}
