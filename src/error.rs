//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("list length exceeded: {0} > {max}", max = crate::MAX_LIST_LEN)]
    OversizeList(usize),
    #[error("string length exceeded: {0} > {max}", max = crate::MAX_STRING_LEN)]
    OversizeString(usize),
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,
    #[error("unexpected end of buffer")]
    Truncated,
    #[error("length mismatch: declared {declared}, actual {actual}")]
    LengthMismatch { declared: usize, actual: usize }, // header vs. remaining bytes
    #[error("unknown tag: {0:#04x}")]
    UnknownTag(u8),
    #[error("root node must be a list")]
    RootNotList,
    #[error("nesting depth exceeded: max {max}", max = crate::MAX_DEPTH)]
    DepthExceeded,
}
