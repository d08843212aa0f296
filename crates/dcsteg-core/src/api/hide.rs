use std::path::{Path, PathBuf};

use log::debug;

use crate::codec::imprint;
use crate::media::{ImprintStats, Persist, RgbImage};
use crate::{CodecOptions, DcStegError, Result};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<Vec<u8>>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: impl AsRef<[u8]>) -> Self {
        self.message = Some(message.as_ref().to_vec());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The target file, always written as PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Hides the message and writes the image, nothing is written when the message does not fit
    pub fn execute(self) -> Result<ImprintStats> {
        self.validate()?;
        let Some(image) = self.image else {
            return Err(DcStegError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(DcStegError::TargetNotSet);
        };
        let message = self.message.unwrap_or_default();

        let mut ymg = super::open_transformed(&image)?;
        let stats = imprint(&mut ymg, &message, self.options.bit_order)?;
        ymg.reverse_transform();

        RgbImage::from(&ymg).save_as(&output)?;
        debug!("saved {output:?}");

        Ok(stats)
    }

    fn validate(&self) -> Result<()> {
        if self.message.is_none() {
            return Err(DcStegError::MissingMessage);
        }

        Ok(())
    }
}
