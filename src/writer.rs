//! Encoder for the length-prefixed TLV wire format.

use crate::{Error, Value, WriterPool, MAX_DEPTH, MAX_LIST_LEN, MAX_STRING_LEN};
use bytes::{BufMut, Bytes, BytesMut};

/// Wire tag for an int32 node.
pub(crate) const TAG_INT32: u8 = 0x01;
/// Wire tag for a string node.
pub(crate) const TAG_STRING: u8 = 0x02;
/// Wire tag for a list node.
pub(crate) const TAG_LIST: u8 = 0x03;

/// Byte length of the message envelope header.
pub(crate) const HEADER_LEN: usize = 4;

/// Initial buffer capacity for a fresh [`Writer`].
pub(crate) const INITIAL_CAPACITY: usize = 1024;

/// Serializes [`Value`] trees into the wire format, reusing its output buffer
/// across calls.
///
/// A `Writer` is single-owner: the slice returned by [`Writer::encode`]
/// borrows the internal buffer and is overwritten by the next `encode` or
/// [`Writer::reset`]. Callers that need an independent result use
/// [`Writer::encode_to_bytes`].
pub struct Writer {
    buf: BytesMut,
}

impl Writer {
    /// Creates a writer with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a writer with the given initial buffer capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Clears any previous output, retaining allocated capacity.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Returns the capacity of the internal buffer.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Encodes one value tree, returning the complete message bytes.
    ///
    /// The first 4 bytes are the little-endian length of everything that
    /// follows. The root must be a [`Value::List`]. The whole tree is
    /// validated before any bytes are written: on failure the buffer is left
    /// in its reset state and no partial output is observable.
    pub fn encode(&mut self, value: &Value) -> Result<&[u8], Error> {
        self.buf.clear();
        if !matches!(value, Value::List(_)) {
            return Err(Error::RootNotList);
        }
        let body = measure(value, 0)?;
        let total = u32::try_from(body).expect("message length exceeds u32");
        self.buf.reserve(HEADER_LEN + body);
        self.buf.put_u32_le(total);
        write_node(&mut self.buf, value);
        debug_assert_eq!(self.buf.len(), HEADER_LEN + body);
        Ok(&self.buf[..])
    }

    /// Like [`Writer::encode`], but copies the message into an independent
    /// [`Bytes`] so it survives later `encode` calls.
    pub fn encode_to_bytes(&mut self, value: &Value) -> Result<Bytes, Error> {
        Ok(Bytes::copy_from_slice(self.encode(value)?))
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes a value using a writer from the shared pool.
///
/// Equivalent to acquiring from [`WriterPool::shared`], encoding, and
/// releasing the writer afterwards.
pub fn encode(value: &Value) -> Result<Bytes, Error> {
    let pool = WriterPool::shared();
    let mut writer = pool.acquire();
    let result = writer.encode_to_bytes(value);
    pool.release(writer);
    result
}

/// Validates size limits and nesting depth, returning the encoded byte length
/// of the node. Runs before any bytes are committed.
fn measure(value: &Value, depth: usize) -> Result<usize, Error> {
    match value {
        Value::Int32(_) => Ok(1 + 4),
        Value::Str(s) => {
            if s.len() > MAX_STRING_LEN {
                return Err(Error::OversizeString(s.len()));
            }
            Ok(1 + 4 + s.len())
        }
        Value::List(items) => {
            if depth >= MAX_DEPTH {
                return Err(Error::DepthExceeded);
            }
            if items.len() > MAX_LIST_LEN {
                return Err(Error::OversizeList(items.len()));
            }
            let mut size = 1 + 4;
            for item in items {
                size += measure(item, depth + 1)?;
            }
            Ok(size)
        }
    }
}

/// Writes one node depth-first, pre-order. Limits were already checked by
/// [`measure`], so every cast below is in range.
fn write_node(buf: &mut BytesMut, value: &Value) {
    match value {
        Value::Int32(v) => {
            buf.put_u8(TAG_INT32);
            buf.put_i32_le(*v);
        }
        Value::Str(s) => {
            buf.put_u8(TAG_STRING);
            buf.put_u32_le(s.len() as u32);
            buf.put_slice(s.as_bytes());
        }
        Value::List(items) => {
            buf.put_u8(TAG_LIST);
            buf.put_u32_le(items.len() as u32);
            for item in items {
                write_node(buf, item);
            }
        }
    }
}
