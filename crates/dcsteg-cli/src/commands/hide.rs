use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::CliResult;

/// Hides a text message in an image, the result is always a PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Image file such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Imprint strength, the bit of the DC coefficients that carries the message (0 to 2)
    #[arg(
        short = 'b',
        long = "bit-order",
        value_name = "order",
        default_value = "0",
        allow_hyphen_values = true
    )]
    pub bit_order: String,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let options = super::codec_options(&self.bit_order)?;
        let stats = dcsteg_core::commands::hide(
            &self.media,
            &self.write_to_file,
            self.message.as_bytes(),
            options,
        )?;
        info!(
            "changed {} of {} carrier bits ({:.1}%)",
            stats.changed,
            stats.encountered,
            stats.ratio() * 100.0
        );

        Ok(())
    }
}
