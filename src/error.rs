use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced to `main`. Dashboard operations themselves never fail.
#[derive(Error, Diagnostic, Debug)]
pub enum AppError {
    #[error("Terminal I/O failed: {0}")]
    #[diagnostic(
        code("WATER::TERMINAL"),
        help("Make sure the program is attached to an interactive terminal")
    )]
    Terminal(#[from] std::io::Error),

    #[error("Invalid config at {}: {source}", .path.display())]
    #[diagnostic(
        code("WATER::CONFIG"),
        help("Fix or remove the file; defaults apply when it is missing")
    )]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
