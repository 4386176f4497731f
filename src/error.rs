//! Error types.
//!
//! Only parsing has domain errors ([`ParseError`]). Addition and rendering are
//! total. The crate-level [`Error`] wraps everything the outer surfaces
//! (storage and the command line) can run into.

use std::fmt;
use std::io;

use crate::limb::Limb;

/// The reason a digit sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character outside `'0'..='9'`.
    InvalidDigit,
    /// The sequence has zero length.
    EmptyInput,
}

/// Error returned by [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    /// Byte offset of the first offending character.
    position: Option<usize>,
}

impl ParseError {
    pub(crate) fn invalid_digit(position: usize) -> Self {
        ParseError {
            kind: ErrorKind::InvalidDigit,
            position: Some(position),
        }
    }

    pub(crate) fn empty() -> Self {
        ParseError {
            kind: ErrorKind::EmptyInput,
            position: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.position) {
            (ErrorKind::InvalidDigit, Some(pos)) => {
                write!(f, "invalid digit at position {}", pos)
            }
            (ErrorKind::InvalidDigit, None) => write!(f, "invalid digit"),
            (ErrorKind::EmptyInput, _) => write!(f, "cannot parse integer from empty string"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A limb at or above the limb base was handed to
/// [`BigInt::from_limbs`](crate::BigInt::from_limbs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimbError {
    pub index: usize,
    pub value: Limb,
}

impl fmt::Display for LimbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "limb {} out of range: {}", self.index, self.value)
    }
}

impl std::error::Error for LimbError {}

/// Errors of the storage layer and the command line.
#[derive(Debug)]
pub enum Error {
    Parse(ParseError),
    Limb(LimbError),
    Io(io::Error),
    Encode(bincode::error::EncodeError),
    Decode(bincode::error::DecodeError),
    /// Fewer operands than the operation needs.
    MissingInput,
    /// More operands than the operation takes.
    TooManyInputs(usize),
    /// Bytes left over after a stored number was decoded.
    TrailingBytes(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "not an integer: {}", e),
            Error::Limb(e) => write!(f, "malformed number: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Encode(e) => write!(f, "failed to encode number: {}", e),
            Error::Decode(e) => write!(f, "failed to decode number: {}", e),
            Error::MissingInput => write!(f, "not enough inputs"),
            Error::TooManyInputs(n) => write!(f, "too many inputs: expected 2, got {}", n),
            Error::TrailingBytes(n) => write!(f, "failed to decode number: {} trailing bytes", n),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Limb(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Encode(e) => Some(e),
            Error::Decode(e) => Some(e),
            Error::MissingInput | Error::TooManyInputs(_) | Error::TrailingBytes(_) => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<LimbError> for Error {
    fn from(e: LimbError) -> Self {
        Error::Limb(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<bincode::error::EncodeError> for Error {
    fn from(e: bincode::error::EncodeError) -> Self {
        Error::Encode(e)
    }
}

impl From<bincode::error::DecodeError> for Error {
    fn from(e: bincode::error::DecodeError) -> Self {
        Error::Decode(e)
    }
}
