use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application does not recognize.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unrecognized {field} value '{value}' in database")]
    UnknownStoredValue {
        /// Column the value was read from
        field: &'static str,
        /// The value that failed to parse
        value: String,
    },
}
