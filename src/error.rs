//! Error types for Cham Cham Cham

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChamError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name is {len} characters long (maximum is {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("A profile named '{0}' already exists")]
    DuplicateName(String),

    #[error("Profile limit of {0} reached")]
    CapacityExceeded(usize),

    #[error("No profile at position {index} (store holds {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("Invalid move: {0:?}")]
    InvalidMove(String),

    #[error("Invalid number of rounds: {0} (expected 1-{max})", max = crate::game::MAX_ROUNDS)]
    InvalidRounds(u32),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Input closed")]
    InputClosed,

    #[error("Unsupported {format} format version {version}")]
    UnsupportedFormat { format: String, version: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ChamError {
    /// Store-level rule violations; the store is left unchanged when one is returned
    pub fn is_constraint(&self) -> bool {
        matches!(
            self,
            ChamError::EmptyName
                | ChamError::NameTooLong { .. }
                | ChamError::DuplicateName(_)
                | ChamError::CapacityExceeded(_)
        )
    }
}

impl From<serde_json::Error> for ChamError {
    fn from(e: serde_json::Error) -> Self {
        ChamError::SerializationError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChamError>;
