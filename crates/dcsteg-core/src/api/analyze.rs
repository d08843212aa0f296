use std::path::{Path, PathBuf};

use crate::analysis::CapacityReport;
use crate::{DcStegError, Result};

pub fn prepare() -> AnalyzeApi {
    AnalyzeApi::default()
}

#[derive(Default, Debug)]
pub struct AnalyzeApi {
    image: Option<PathBuf>,
}

impl AnalyzeApi {
    /// The carrier image whose capacity is of interest
    pub fn from_image(mut self, image: impl AsRef<Path>) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<CapacityReport> {
        let Some(image) = self.image else {
            return Err(DcStegError::CarrierNotSet);
        };

        let ymg = super::open_transformed(&image)?;
        Ok(CapacityReport::analyze(&ymg))
    }
}
