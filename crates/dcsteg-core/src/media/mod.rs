pub mod block;
pub mod codec_options;
pub mod colorspace;
pub mod medium;
pub mod order;
pub mod rgb;
pub mod ycbcr;

use std::path::Path;

pub use block::Block8x8;
pub use codec_options::CodecOptions;
pub use medium::{ImprintStats, MediumReader, MediumWriter};
pub use order::BitOrder;
pub use rgb::RgbImage;
pub use ycbcr::YCbCrImage;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
