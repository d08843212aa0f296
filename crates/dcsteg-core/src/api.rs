//! Builder style entry points, one module per operation.

pub mod analyze;
pub mod hide;
pub mod unveil;

use std::path::Path;

use log::debug;

use crate::media::{RgbImage, YCbCrImage};
use crate::Result;

/// Loads an image and brings its luma plane into the transform domain.
fn open_transformed(image: &Path) -> Result<YCbCrImage> {
    let rgb = RgbImage::open(image)?;
    let mut ymg = YCbCrImage::from(&rgb);
    ymg.forward_transform();
    debug!(
        "transformed {}x{} blocks of {image:?}",
        ymg.blocks_wide(),
        ymg.blocks_tall()
    );

    Ok(ymg)
}
