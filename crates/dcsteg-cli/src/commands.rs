pub mod analyze;
pub mod hide;
pub mod unveil;

use dcsteg_core::{BitOrder, CodecOptions};

use crate::CliResult;

/// Parsed here rather than by clap, a bad order has its own exit code.
fn codec_options(bit_order: &str) -> CliResult<CodecOptions> {
    Ok(CodecOptions::from(bit_order.parse::<BitOrder>()?))
}
