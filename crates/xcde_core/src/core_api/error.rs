use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    Io,
    OutOfRange,
    OutOfBounds,
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreError {
    pub code: CoreErrorCode,
    pub message: String,
}

impl CoreError {
    pub fn new(code: CoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::Io, message)
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::OutOfRange, message)
    }

    pub fn out_of_bounds(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::OutOfBounds, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::Decode, message)
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for CoreError {}

impl From<io::Error> for CoreError {
    fn from(e: io::Error) -> Self {
        Self::io(e.to_string())
    }
}
