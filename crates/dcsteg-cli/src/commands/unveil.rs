use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils a text message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// The bit order the message was hidden with
    #[arg(
        short = 'b',
        long = "bit-order",
        value_name = "order",
        default_value = "0",
        allow_hyphen_values = true
    )]
    pub bit_order: String,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let options = super::codec_options(&self.bit_order)?;
        let message = dcsteg_core::commands::unveil(&self.media, options)?;
        println!("{}", String::from_utf8_lossy(&message));

        Ok(())
    }
}
