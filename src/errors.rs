// errors.rs
use std::error::Error;
use std::fmt;

/// Failure to turn a raw API response into a model.
///
/// An API-level failure (non-zero result code) is not an error; it is
/// reported through the model's success flag instead.
#[derive(Debug)]
pub enum ParseError {
    /// The response body is not well-formed XML.
    MalformedResponse(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedResponse(msg) => write!(f, "Malformed response: {msg}"),
        }
    }
}

impl Error for ParseError {}
