//! Error types for the card engine.

use thiserror::Error;

/// Result type alias for card engine operations
pub type Result<T> = std::result::Result<T, CardError>;

/// Errors that can occur while generating or storing cards.
#[derive(Error, Debug)]
pub enum CardError {
    /// A card factory was given no owner names to draw from
    #[error("Owner roster is empty: at least one name is required")]
    EmptyRoster,

    /// A manually entered card number failed shape validation
    #[error("Malformed card number {number:?}: expected exactly 16 ASCII digits")]
    MalformedCardNumber { number: String },

    /// Failed to write CSV output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
