use thiserror::Error;

/// Error types for sequence operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SeqError {
    /// No element exists at the requested position
    #[error("position out of range for sequence of length {length}")]
    OutOfRange {
        /// Number of elements currently in the sequence
        length: usize,
    },
    /// Position predates a structural mutation that invalidated it
    #[error("position was invalidated by a structural mutation")]
    StalePosition,
    /// Position was minted by a different sequence instance
    #[error("position belongs to a different sequence")]
    ForeignPosition,
    /// Internal precondition violation
    #[error("invalid state: {reason}")]
    InvalidState {
        /// Description of the violated precondition
        reason: &'static str,
    },
}

pub type Result<T> = core::result::Result<T, SeqError>;
