//! Zero-copy codec for a recursive value format.
//!
//! # Overview
//!
//! A compact binary wire format for values composed of UTF-8 strings, 32-bit
//! signed integers, and ordered lists of such values, designed to:
//! - Serialize a [`Value`] tree with minimal allocation, reusing encoder
//!   buffers across calls via a bounded [`WriterPool`]
//! - Deserialize untrusted binary input without copying string payloads:
//!   every decoded string is a borrowed view into the input buffer, and the
//!   lifetime of the decoded tree is tied to that buffer by the compiler
//!
//! Every length field read from the wire is validated against the remaining
//! input and against hard size limits ([`MAX_LIST_LEN`], [`MAX_STRING_LEN`],
//! [`MAX_DEPTH`]) before any view is constructed, so malformed or hostile
//! input fails cleanly instead of reading out of bounds.
//!
//! # Wire Format
//!
//! ```text
//! Message  := u32_le(total_len) Node
//! Node     := Int32Node | StringNode | ListNode
//! Int32Node  := 0x01 i32_le
//! StringNode := 0x02 u32_le(len) bytes[len]     // UTF-8, len <= 1_000_000
//! ListNode   := 0x03 u32_le(count) Node*count   // count <= 1000
//! ```
//!
//! `total_len` counts everything after the first 4 bytes, and the root node
//! must be a list.
//!
//! # Example
//!
//! ```
//! use valuecodec::{decode, encode, Value};
//!
//! let message = Value::List(vec![
//!     Value::from("foo"),
//!     Value::List(vec![Value::from("bar"), Value::from(42)]),
//! ]);
//!
//! // Encode with a writer from the shared pool.
//! let bytes = encode(&message)?;
//!
//! // Decode without copying: strings in `decoded` borrow from `bytes`.
//! let decoded = decode(&bytes)?;
//! assert_eq!(decoded, message);
//! # Ok::<(), valuecodec::Error>(())
//! ```
//!
//! # Example (Detaching a Decoded Tree)
//!
//! ```
//! use valuecodec::{decode, encode, Value};
//!
//! let bytes = encode(&Value::List(vec![Value::from("transient")]))?;
//!
//! // A decoded tree cannot outlive `bytes`; convert it to an owned tree
//! // before the buffer goes away.
//! let owned: Value<'static> = decode(&bytes)?.into_owned();
//! drop(bytes);
//! assert_eq!(owned, Value::List(vec![Value::from("transient")]));
//! # Ok::<(), valuecodec::Error>(())
//! ```

pub mod error;
pub mod pool;
pub mod reader;
pub mod value;
pub mod writer;

// Re-export main types and operations
pub use error::Error;
pub use pool::WriterPool;
pub use reader::{decode, Reader};
pub use value::{Value, MAX_DEPTH, MAX_LIST_LEN, MAX_STRING_LEN};
pub use writer::{encode, Writer};
