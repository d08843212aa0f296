use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgb};
use log::{debug, error};

use crate::error::DcStegError;
use crate::media::colorspace::ycbcr_to_rgb;
use crate::media::ycbcr::YCbCrImage;
use crate::media::Persist;
use crate::result::Result;

/// Planar 8 bit RGB image, `index = row * width + col` in every plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: usize,
    height: usize,
    r: Vec<u8>,
    g: Vec<u8>,
    b: Vec<u8>,
}

impl RgbImage {
    /// Builds an image from planes, all of them must hold `width * height` samples.
    pub fn from_planes(
        width: usize,
        height: usize,
        r: Vec<u8>,
        g: Vec<u8>,
        b: Vec<u8>,
    ) -> Result<Self> {
        let size = width * height;
        if r.len() != size || g.len() != size || b.len() != size {
            return Err(DcStegError::InvalidImageDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            r,
            g,
            b,
        })
    }

    /// Builds an image by asking `f` for the color at `(x, y)`.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Self {
        let size = width * height;
        let (mut r, mut g, mut b) = (
            Vec::with_capacity(size),
            Vec::with_capacity(size),
            Vec::with_capacity(size),
        );
        for y in 0..height {
            for x in 0..width {
                let [pr, pg, pb] = f(x, y);
                r.push(pr);
                g.push(pg);
                b.push(pb);
            }
        }

        Self {
            width,
            height,
            r,
            g,
            b,
        }
    }

    /// Loads any image the `image` crate can decode, alpha is dropped.
    pub fn open(file: &Path) -> Result<Self> {
        let img = image::open(file).map_err(|e| {
            error!("Error loading image {file:?}: {e}");
            DcStegError::InvalidImageMedia
        })?;
        debug!("loaded {file:?} with {}x{} pixels", img.width(), img.height());

        Ok(Self::from(&img.to_rgb8()))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    /// The `(r, g, b)` triple at pixel `index`.
    pub fn pixel(&self, index: usize) -> (u8, u8, u8) {
        (self.r[index], self.g[index], self.b[index])
    }

    pub fn to_buffer(&self) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
        ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            let (r, g, b) = self.pixel(y as usize * self.width + x as usize);
            Rgb([r, g, b])
        })
    }

    /// Writes the image as PNG.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.to_buffer()
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                DcStegError::ImageEncodingError
            })
    }
}

impl Persist for RgbImage {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            DcStegError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}

impl From<&ImageBuffer<Rgb<u8>, Vec<u8>>> for RgbImage {
    fn from(img: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Self {
        let (width, height) = img.dimensions();
        Self::from_fn(width as usize, height as usize, |x, y| {
            img.get_pixel(x as u32, y as u32).0
        })
    }
}

impl From<&YCbCrImage> for RgbImage {
    fn from(ymg: &YCbCrImage) -> Self {
        let size = ymg.y().len();
        let (mut r, mut g, mut b) = (
            Vec::with_capacity(size),
            Vec::with_capacity(size),
            Vec::with_capacity(size),
        );
        for ((y, cb), cr) in ymg.y().iter().zip(ymg.cb()).zip(ymg.cr()) {
            let (pr, pg, pb) = ycbcr_to_rgb(*y, *cb, *cr);
            r.push(pr);
            g.push(pg);
            b.push(pb);
        }

        Self {
            width: ymg.width(),
            height: ymg.height(),
            r,
            g,
            b,
        }
    }
}
