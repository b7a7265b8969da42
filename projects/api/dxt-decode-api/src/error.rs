//! Error types for the dispatching API.

use thiserror::Error;

/// Returned when parsing a [`DxtFormat`](crate::DxtFormat) from a name that isn't recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown texture format. Expected one of: bc1, bc2, bc3, dxt1, dxt3, dxt5")]
pub struct UnknownFormatError;
