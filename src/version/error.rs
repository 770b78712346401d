use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionFormatError {
    #[error("Could not parse version: input is empty")]
    Empty,

    #[error("Could not parse version: field {position} ({segment:?}) is not a number")]
    InvalidField { position: usize, segment: String },

    #[error("Could not parse version: field {position} ({segment:?}) is out of range")]
    OutOfRange { position: usize, segment: String },
}
