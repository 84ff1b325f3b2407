//! Error types for tick
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad command input, bad config)
//! - 3: Corrupt save file
//! - 4: Operation failed (storage I/O)

use thiserror::Error;

/// Exit codes for the tick CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const CORRUPT_SAVE: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for tick operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0}")]
    InvalidCommand(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // Corrupt save file (exit code 3)
    #[error("corrupt {kind} record in the save file ({field}: {reason})")]
    CorruptRecord {
        kind: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error("unknown task tag {0:?} in the save file")]
    UnknownTaskTag(String),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::UnknownCommand(_)
            | Error::InvalidCommand(_)
            | Error::InvalidConfig(_)
            | Error::TomlParse(_) => exit_codes::USER_ERROR,

            // Corrupt save file
            Error::CorruptRecord { .. } | Error::UnknownTaskTag(_) => exit_codes::CORRUPT_SAVE,

            // Operation failures
            Error::Io(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for tick operations
pub type Result<T> = std::result::Result<T, Error>;
