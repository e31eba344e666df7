//! Error types for the boundary contract

/// Result type alias for boundary operations
pub type Result<T> = std::result::Result<T, AbiError>;

/// Failures detected while building or reading boundary values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbiError {
    /// A view declared a negative byte count
    #[error("string view has negative length {len}")]
    NegativeLength {
        /// Declared length
        len: isize,
    },

    /// A view pointed at null while declaring a non-zero length
    #[error("string view pointer is null but length is {len}")]
    NullPointer {
        /// Declared length
        len: isize,
    },

    /// Bytes that had to be text were not UTF-8
    #[error("invalid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 {
        /// Length of the valid prefix
        valid_up_to: usize,
    },

    /// A payload did not have the tab-separated record shape
    #[error("malformed record: {reason}")]
    MalformedRecord {
        /// What was wrong with it
        reason: String,
    },

    /// The two sides disagree on the binary layout
    #[error("layout mismatch in {field}: expected {expected}, found {found}")]
    LayoutMismatch {
        /// Descriptor field that differs
        field: &'static str,
        /// Value on this side
        expected: u32,
        /// Value reported by the other side
        found: u32,
    },
}

impl AbiError {
    /// Create a malformed record error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }
}

impl From<std::str::Utf8Error> for AbiError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}
