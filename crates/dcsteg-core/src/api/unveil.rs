use std::path::{Path, PathBuf};

use crate::codec::extract;
use crate::{CodecOptions, DcStegError, Result};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, the bit order must be the one used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Returns the message bytes, up to but not including the terminator
    pub fn execute(self) -> Result<Vec<u8>> {
        let Some(secret_media) = self.secret_media else {
            return Err(DcStegError::CarrierNotSet);
        };

        let ymg = super::open_transformed(&secret_media)?;
        extract(&ymg, self.options.bit_order)
    }
}
