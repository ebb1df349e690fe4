use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning cached samples into charts. All of them end the run.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No chart format for chart '{chart}'")]
    UnknownFormat { chart: String },
    #[error("Missing or unreadable sample {}, collect data before rendering: {source}", .path.display())]
    MissingSample {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create output folder {}: {source}", .path.display())]
    OutputFolder {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to draw {}: {message}", .path.display())]
    Draw { path: PathBuf, message: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
