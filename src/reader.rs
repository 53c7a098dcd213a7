//! Zero-copy decoder for the length-prefixed TLV wire format.
//!
//! Decoded strings are borrowed views into the input buffer; no payload bytes
//! are copied. Every multi-byte read is preceded by a remaining-length check,
//! so a hostile length field can never produce an out-of-range view.

use crate::{
    writer::{TAG_INT32, TAG_LIST, TAG_STRING},
    Error, Value, MAX_DEPTH, MAX_LIST_LEN, MAX_STRING_LEN,
};
use bytes::Buf;
use std::borrow::Cow;

/// Decodes one complete message, borrowing all string payloads from `bytes`.
///
/// The returned tree is valid only while `bytes` is; convert it with
/// [`Value::into_owned`] to detach it. The root node must be a list.
pub fn decode(bytes: &[u8]) -> Result<Value<'_>, Error> {
    Reader::new(bytes).decode_message()
}

/// A single forward pass over an input buffer.
///
/// Single-owner and single-use: one `Reader` decodes one message. Separate
/// `Reader` instances over separate buffers are fully independent.
pub struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    /// Creates a reader over a received byte sequence.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Decodes the message, consuming the entire buffer.
    ///
    /// The 4-byte header must match the remaining byte count exactly; missing
    /// or trailing bytes are hard errors.
    pub fn decode_message(&mut self) -> Result<Value<'a>, Error> {
        let declared = self.read_u32()? as usize;
        let actual = self.buf.len();
        if declared != actual {
            return Err(Error::LengthMismatch { declared, actual });
        }

        let root = self.read_node(0)?;
        if !self.buf.is_empty() {
            // The root node did not account for every byte the header declared.
            return Err(Error::LengthMismatch {
                declared,
                actual: actual - self.buf.len(),
            });
        }

        match root {
            Value::List(_) => Ok(root),
            _ => Err(Error::RootNotList),
        }
    }

    fn read_node(&mut self, depth: usize) -> Result<Value<'a>, Error> {
        let tag = self.read_u8()?;
        match tag {
            TAG_INT32 => Ok(Value::Int32(self.read_i32()?)),
            TAG_STRING => {
                let len = self.read_u32()? as usize;
                if len > MAX_STRING_LEN {
                    return Err(Error::OversizeString(len));
                }
                let payload = self.take(len)?;
                let text = std::str::from_utf8(payload).map_err(|_| Error::InvalidUtf8)?;
                Ok(Value::Str(Cow::Borrowed(text)))
            }
            TAG_LIST => {
                if depth >= MAX_DEPTH {
                    return Err(Error::DepthExceeded);
                }
                let count = self.read_u32()? as usize;
                if count > MAX_LIST_LEN {
                    return Err(Error::OversizeList(count));
                }
                let mut items = Vec::with_capacity(count);
                for _ in 0..count {
                    items.push(self.read_node(depth + 1)?);
                }
                Ok(Value::List(items))
            }
            other => Err(Error::UnknownTag(other)),
        }
    }

    /// Splits off the next `n` bytes, failing if fewer remain.
    fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        if self.buf.len() < n {
            return Err(Error::Truncated);
        }
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }

    fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.take(1)?[0])
    }

    fn read_u32(&mut self) -> Result<u32, Error> {
        let mut head = self.take(4)?;
        Ok(head.get_u32_le())
    }

    fn read_i32(&mut self) -> Result<i32, Error> {
        let mut head = self.take(4)?;
        Ok(head.get_i32_le())
    }
}
