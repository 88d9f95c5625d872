use miette::Diagnostic;
use thiserror::Error;

/// Result type for flowgraph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Custom error types for the flowgraph core
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Lifting failed: {message}")]
    #[diagnostic(code(liftgraph::lift_error))]
    Lift { message: String },

    #[error("Inconsistent lift: successor block {block:#x} is not part of the function")]
    #[diagnostic(code(liftgraph::inconsistent_lift))]
    InconsistentLift { block: u64 },

    #[error("Block index {index} out of range for {count} blocks")]
    #[diagnostic(code(liftgraph::out_of_range))]
    OutOfRange { index: usize, count: usize },

    #[error("Internal error: {message}")]
    #[diagnostic(code(liftgraph::internal_error))]
    Internal { message: String },
}

impl Error {
    /// Create a lift error
    pub fn lift(message: impl Into<String>) -> Self {
        Error::Lift {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal {
            message: message.into(),
        }
    }
}
