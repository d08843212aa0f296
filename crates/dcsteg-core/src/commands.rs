use std::path::Path;

use crate::analysis::CapacityReport;
use crate::media::ImprintStats;
use crate::{CodecOptions, Result};

pub fn analyze(media: &Path) -> Result<CapacityReport> {
    crate::api::analyze::prepare().from_image(media).execute()
}

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: &[u8],
    options: CodecOptions,
) -> Result<ImprintStats> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .with_message(message)
        .execute()
}

pub fn unveil(secret_media: &Path, options: CodecOptions) -> Result<Vec<u8>> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .execute()
}
