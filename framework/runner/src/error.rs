use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failures while collecting samples. All of them end the run.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Failed to create data folder {}: {source}", .path.display())]
    DataFolder {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} doesn't exist, make it before retry", .path.display())]
    MissingExecutable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to inspect cache file {}: {source}", .path.display())]
    CacheMetadata {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write sample to {}: {source}", .path.display())]
    WriteSample {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("`{command}` failed with {status}")]
    ExitStatus { command: String, status: ExitStatus },
    #[error("`{command}` printed {output:?}, expected a single finite number")]
    MalformedOutput { command: String, output: String },
}
