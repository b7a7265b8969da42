use dxt_decode_api::{DecodeError, DxtFormat};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("Memory mapping error: {0}")]
    MmapError(String),
    #[error("Input file {path:?} is too short for a {format} image: need {required} bytes, found {actual}")]
    TruncatedInput {
        path: PathBuf,
        format: DxtFormat,
        required: usize,
        actual: usize,
    },
}
