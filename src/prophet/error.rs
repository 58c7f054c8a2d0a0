use crate::artifacts::ArtifactError;
use std::fmt;

/// Represents the different types of errors that can occur while reading a name.
#[derive(Debug)]
pub enum ProphecyError {
    /// Input name produced no recognizable phonemes
    EmptyFeatures(String),
    /// Feature vector and network disagree on width, or the forward pass failed
    ModelInvocation(String),
    /// Error occurred during the build phase
    BuildError(String),
    /// Error occurred due to invalid input parameters
    ValidationError(String),
}

impl fmt::Display for ProphecyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFeatures(msg) => write!(f, "No recognizable phonemes: {}", msg),
            Self::ModelInvocation(msg) => write!(f, "Model invocation error: {}", msg),
            Self::BuildError(msg) => write!(f, "Build error: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ProphecyError {}

impl From<ArtifactError> for ProphecyError {
    fn from(err: ArtifactError) -> Self {
        ProphecyError::BuildError(err.to_string())
    }
}
