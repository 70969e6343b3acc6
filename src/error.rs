//! Error types for the Yeson codec.

/// Errors that can occur while encoding or decoding Yeson values.
#[derive(Debug, thiserror::Error)]
pub enum YesonError {
    #[error("unsupported type tag: {tag}")]
    UnsupportedType { tag: u8 },

    #[error("unsupported integer width code: 0b{info:04b}")]
    UnsupportedWidth { info: u8 },

    #[error("unsupported float precision: 0b{info:04b}")]
    UnsupportedPrecision { info: u8 },

    #[error("unexpected end of input: need {needed} bytes but only {remaining} remaining")]
    UnexpectedEndOfInput { needed: usize, remaining: usize },

    #[error("invalid UTF-8 string: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("length {len} exceeds the 255 limit of the long-form length byte")]
    LengthOverflow { len: usize },

    #[error("object key must be a string, got type tag {tag}")]
    InvalidKey { tag: u8 },

    #[error("nesting depth exceeds limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("{remaining} trailing bytes after value")]
    TrailingBytes { remaining: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl YesonError {
    /// Returns true for every error raised by an unrecognized tag, integer
    /// width code or float precision.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedType { .. }
                | Self::UnsupportedWidth { .. }
                | Self::UnsupportedPrecision { .. }
        )
    }

    pub(crate) fn end_of_input(needed: usize, remaining: usize) -> Self {
        Self::UnexpectedEndOfInput { needed, remaining }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, YesonError>;
