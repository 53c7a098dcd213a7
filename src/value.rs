//! The recursive value model shared by the encoder and decoder.

use std::borrow::Cow;

/// Maximum number of direct elements in a [`Value::List`].
pub const MAX_LIST_LEN: usize = 1000;

/// Maximum byte length of a [`Value::Str`] payload.
pub const MAX_STRING_LEN: usize = 1_000_000;

/// Maximum nesting depth accepted by the encoder and decoder.
///
/// The wire format itself does not bound nesting, so a hostile message could
/// otherwise drive the recursive decoder into stack exhaustion. The same cap
/// is applied at encode time so every encodable tree is also decodable.
pub const MAX_DEPTH: usize = 100;

/// A single node in the recursive value tree.
///
/// Trees built by a caller own their strings. Trees produced by
/// [`decode`](crate::decode) borrow every string from the input buffer: the
/// lifetime parameter ties the whole tree to the bytes it was parsed from, so
/// the borrow checker rejects any use of a decoded string after the buffer is
/// dropped or reused. Use [`Value::into_owned`] to detach a decoded tree from
/// its buffer.
///
/// Equality compares by content, so a decoded (borrowed) tree and a
/// caller-constructed (owned) tree with the same shape compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    /// A 32-bit signed integer.
    Int32(i32),
    /// A UTF-8 string of at most [`MAX_STRING_LEN`] bytes.
    Str(Cow<'a, str>),
    /// An ordered list of at most [`MAX_LIST_LEN`] values.
    List(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
    /// Returns the exact number of bytes [`Writer::encode`](crate::Writer::encode)
    /// will produce for this node, excluding the 4-byte message header.
    ///
    /// Does not validate size limits; encoding may still fail.
    pub fn encode_size(&self) -> usize {
        match self {
            Value::Int32(_) => 1 + 4,
            Value::Str(s) => 1 + 4 + s.len(),
            Value::List(items) => {
                1 + 4 + items.iter().map(Value::encode_size).sum::<usize>()
            }
        }
    }

    /// Deep-copies every borrowed string, producing a tree with no ties to
    /// any input buffer.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Int32(v) => Value::Int32(v),
            Value::Str(s) => Value::Str(Cow::Owned(s.into_owned())),
            Value::List(items) => {
                Value::List(items.into_iter().map(Value::into_owned).collect())
            }
        }
    }

    /// Returns the string payload, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is a [`Value::Int32`].
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the elements, if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value<'a>]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<i32> for Value<'_> {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(Cow::Borrowed(s))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    fn from(items: Vec<Value<'a>>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrowed_owned_equality() {
        let borrowed = Value::Str(Cow::Borrowed("hello"));
        let owned = Value::Str(Cow::Owned("hello".to_string()));
        assert_eq!(borrowed, owned);

        let a = Value::List(vec![Value::from("x"), Value::from(1)]);
        let b = Value::List(vec![Value::from("x".to_string()), Value::from(1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_into_owned_outlives_source() {
        let detached = {
            let text = String::from("ephemeral");
            let tree = Value::List(vec![Value::from(text.as_str()), Value::from(7)]);
            tree.into_owned()
        };
        assert_eq!(detached.as_list().unwrap()[0].as_str(), Some("ephemeral"));
        assert_eq!(detached.as_list().unwrap()[1].as_i32(), Some(7));
    }

    #[test]
    fn test_encode_size() {
        assert_eq!(Value::from(42).encode_size(), 5);
        assert_eq!(Value::from("foo").encode_size(), 8);

        // List header (5) + "foo" (8) + nested list header (5) + "bar" (8) + int (5)
        let tree = Value::List(vec![
            Value::from("foo"),
            Value::List(vec![Value::from("bar"), Value::from(42)]),
        ]);
        assert_eq!(tree.encode_size(), 31);
    }

    #[test]
    fn test_accessors() {
        let v = Value::from(3);
        assert_eq!(v.as_i32(), Some(3));
        assert_eq!(v.as_str(), None);
        assert!(v.as_list().is_none());
    }
}
