use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("invalid argument: {0} must be non-null")]
    InvalidArgument(&'static str),

    #[error("failed to write track info: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} label '{label}'")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub label: String,
}

/// Unwraps a required argument, naming it in the error when absent
pub(crate) fn required<S: Into<String>>(
    value: Option<S>,
    name: &'static str,
) -> Result<String, TrackError> {
    value.map(Into::into).ok_or(TrackError::InvalidArgument(name))
}

/// Normalizes user-facing label spelling: `hip-hop` -> `HIP_HOP`
pub(crate) fn normalize_label(s: &str) -> String {
    s.trim().replace('-', "_").to_ascii_uppercase()
}
