use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Reports how many bytes fit into an image per bit order
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Image to analyze, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,
}

impl AnalyzeArgs {
    pub fn run(self) -> CliResult<()> {
        let report = dcsteg_core::commands::analyze(&self.media)?;
        for line in report.iter() {
            println!("{line}");
        }

        Ok(())
    }
}
