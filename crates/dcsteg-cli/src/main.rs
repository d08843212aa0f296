mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use dcsteg_core::DcStegError;
use log::error;

use crate::cli::CliArgs;

pub type CliResult<T> = dcsteg_core::Result<T>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

/// 1 for a bad bit order, 3 for image I/O, 4 when the message does not fit, 2 otherwise
fn exit_code(e: &DcStegError) -> u8 {
    match e {
        DcStegError::InvalidBitOrder(_) => 1,
        e if e.is_image_io() => 3,
        e if e.is_end_of_medium() => 4,
        _ => 2,
    }
}
