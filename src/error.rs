use thiserror::Error;

/// Main error type for WebVTT parsing and box handling
#[derive(Error, Debug)]
pub enum VttError {
    /// The input does not begin with the `WEBVTT` file magic
    #[error("Missing WEBVTT header")]
    MissingHeader,

    /// A cue timing line could not be parsed
    #[error("Invalid cue timing: {0}")]
    InvalidTiming(String),

    /// A cue timestamp is not of the form `[hh:]mm:ss.mmm`
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A line arrived that is not valid in the parser's current state
    #[error("Unexpected line: {0}")]
    UnexpectedLine(String),

    /// The parser previously hit a malformed document and refuses further input
    #[error("Parser is in an error state")]
    ParserPoisoned,

    /// A serialized box buffer has inconsistent length-prefixed framing
    #[error("Malformed box data: {0}")]
    MalformedBox(String),

    /// A standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, VttError>;
