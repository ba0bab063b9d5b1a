// src/cli.rs

use std::{fs, path::Path, process::ExitCode};

use crate::{
    error::AppError,
    utils::{preview::Preview, risk::RiskReason},
};

/// Exit status when the input was refused.
pub const EXIT_RISK: u8 = 2;

/// Checks one file: prints the sanitized document on stdout, or the
/// refusal reason on stderr.
pub fn run(path: &Path) -> ExitCode {
    let content = match read_input(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match check(content) {
        Ok(document) => {
            print!("{}", document);
            ExitCode::SUCCESS
        }
        Err(reason) => {
            eprintln!("Preview disabled for security: {}", reason);
            ExitCode::from(EXIT_RISK)
        }
    }
}

/// Returns the sanitized document, or why the preview was refused.
pub fn check(content: String) -> Result<String, RiskReason> {
    Preview::build(content).into_document()
}

fn read_input(path: &Path) -> Result<String, AppError> {
    Ok(fs::read_to_string(path)?)
}
