//! Image in YCbCr colorspace.
//!
//! The luma plane is split into 8×8 blocks that are transformed via DCT and
//! quantized in place. Only full blocks take part, right and bottom margins of
//! images whose sides are not multiples of 8 keep their samples untouched.

use log::debug;

use crate::media::block::{Block8x8, N};
use crate::media::colorspace::rgb_to_ycbcr;
use crate::media::rgb::RgbImage;

#[derive(Debug, Clone, PartialEq)]
pub struct YCbCrImage {
    width: usize,
    height: usize,
    y: Vec<f64>,
    cb: Vec<f64>,
    cr: Vec<f64>,
}

impl YCbCrImage {
    /// Luma plane, the medium once [`YCbCrImage::forward_transform`] ran.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Mutable luma plane, its length is fixed to `width * height`.
    pub fn y_mut(&mut self) -> &mut [f64] {
        &mut self.y
    }

    pub fn cb(&self) -> &[f64] {
        &self.cb
    }

    pub fn cr(&self) -> &[f64] {
        &self.cr
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of full blocks per row.
    pub fn blocks_wide(&self) -> usize {
        self.width / N
    }

    /// Number of full block rows.
    pub fn blocks_tall(&self) -> usize {
        self.height / N
    }

    /// Reads the 8×8 luma block whose top left corner is `(x, y)`, zero-filled out of bounds.
    pub fn sub_image(&self, x: usize, y: usize) -> Block8x8 {
        let mut block = Block8x8::default();
        for (my, row) in block.data.iter_mut().enumerate() {
            let i = y + my;
            if i >= self.height {
                break;
            }
            for (mx, v) in row.iter_mut().enumerate() {
                let j = x + mx;
                if j < self.width {
                    *v = self.y[i * self.width + j];
                }
            }
        }
        block
    }

    /// Writes `block` into the luma plane at `(x, y)`, values out of bounds are dropped.
    pub fn update(&mut self, x: usize, y: usize, block: &Block8x8) {
        for (my, row) in block.data.iter().enumerate() {
            let i = y + my;
            if i >= self.height {
                break;
            }
            for (mx, v) in row.iter().enumerate() {
                let j = x + mx;
                if j < self.width {
                    self.y[i * self.width + j] = *v;
                }
            }
        }
    }

    /// Origins `(x, y)` of all full blocks, row by row.
    pub fn block_origins(&self) -> impl Iterator<Item = (usize, usize)> {
        let (bw, bh) = (self.blocks_wide(), self.blocks_tall());
        (0..bh).flat_map(move |by| (0..bw).map(move |bx| (bx * N, by * N)))
    }

    /// DCT and quantization of every full luma block.
    pub fn forward_transform(&mut self) {
        debug!(
            "forward transform of {}x{} blocks",
            self.blocks_wide(),
            self.blocks_tall()
        );
        self.map_blocks(Block8x8::forward_transform);
    }

    /// Dequantization and inverse DCT of every full luma block.
    pub fn reverse_transform(&mut self) {
        debug!(
            "reverse transform of {}x{} blocks",
            self.blocks_wide(),
            self.blocks_tall()
        );
        self.map_blocks(Block8x8::reverse_transform);
    }

    fn map_blocks(&mut self, f: impl Fn(&Block8x8) -> Block8x8) {
        let origins: Vec<_> = self.block_origins().collect();
        for (x, y) in origins {
            let block = f(&self.sub_image(x, y));
            self.update(x, y, &block);
        }
    }
}

impl From<&RgbImage> for YCbCrImage {
    fn from(img: &RgbImage) -> Self {
        let size = img.len();
        let mut ymg = Self {
            width: img.width(),
            height: img.height(),
            y: Vec::with_capacity(size),
            cb: Vec::with_capacity(size),
            cr: Vec::with_capacity(size),
        };

        for i in 0..size {
            let (r, g, b) = img.pixel(i);
            let (y, cb, cr) = rgb_to_ycbcr(r, g, b);
            ymg.y.push(y);
            ymg.cb.push(cb);
            ymg.cr.push(cr);
        }

        ymg
    }
}
