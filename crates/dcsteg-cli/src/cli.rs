use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Analyze(analyze::AnalyzeArgs),
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
}

impl Commands {
    pub fn run(self) -> CliResult<()> {
        match self {
            Commands::Analyze(args) => args.run(),
            Commands::Hide(args) => args.run(),
            Commands::Unveil(args) => args.run(),
        }
    }
}
