//! Buffer-owning encoder and cursor-based decoder.

use bytes::{Bytes, BytesMut};

use crate::error::{Result, YesonError};
use crate::format::{decode, encode};
use crate::types::Value;

/// Appends encoded values to an internal growable buffer.
///
/// The format has no outer envelope, so repeated calls to [`Encoder::encode`]
/// produce a concatenation that [`Decoder::decode_all`] can split again.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: BytesMut,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Encodes one top-level value. If encoding fails partway through a
    /// nested value, the buffer is restored to its length before the call.
    pub fn encode(&mut self, value: &Value) -> Result<()> {
        let start = self.buf.len();
        if let Err(e) = encode::encode_value(&mut self.buf, value) {
            self.buf.truncate(start);
            return Err(e);
        }
        tracing::trace!(bytes = self.buf.len() - start, "encoded value");
        Ok(())
    }

    /// Everything encoded so far.
    pub fn get_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Copies everything encoded so far into an immutable buffer.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.buf)
    }

    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

/// Decoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: decode::DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum array/object nesting depth.
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    pub fn depth_limit(&self) -> usize {
        self.max_depth
    }
}

/// Reads values from a borrowed byte slice, advancing a forward-only cursor.
///
/// After an error the cursor position is unspecified and the decoder should
/// be discarded.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    input: &'a [u8],
    cursor: &'a [u8],
    options: DecodeOptions,
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            cursor: input,
            options: DecodeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Decodes the next complete value and advances past it.
    pub fn decode(&mut self) -> Result<Value> {
        let start = self.position();
        let value = decode::decode_value_limited(&mut self.cursor, self.options.max_depth)?;
        tracing::trace!(offset = start, bytes = self.position() - start, "decoded value");
        Ok(value)
    }

    /// Decodes values until the input is exhausted.
    pub fn decode_all(&mut self) -> Result<Vec<Value>> {
        let mut values = Vec::new();
        while !self.is_finished() {
            values.push(self.decode()?);
        }
        Ok(values)
    }

    /// Byte offset of the cursor from the start of the input.
    pub fn position(&self) -> usize {
        self.input.len() - self.cursor.len()
    }

    pub fn remaining(&self) -> usize {
        self.cursor.len()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor.is_empty()
    }
}

/// Encodes a single value into a fresh buffer.
pub fn to_bytes(value: &Value) -> Result<Bytes> {
    let mut encoder = Encoder::new();
    encoder.encode(value)?;
    Ok(encoder.into_bytes())
}

/// Decodes exactly one value; trailing bytes are an error.
pub fn from_slice(bytes: &[u8]) -> Result<Value> {
    let mut decoder = Decoder::new(bytes);
    let value = decoder.decode()?;
    if !decoder.is_finished() {
        return Err(YesonError::TrailingBytes {
            remaining: decoder.remaining(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Object;

    #[test]
    fn encoder_appends_sequentially() {
        let mut encoder = Encoder::new();
        encoder.encode(&Value::Bool(true)).unwrap();
        assert_eq!(encoder.get_bytes(), &[0x11]);
        encoder.encode(&Value::Null).unwrap();
        assert_eq!(encoder.get_bytes(), &[0x11, 0x00]);
        assert_eq!(encoder.len(), 2);
    }

    #[test]
    fn failed_encode_rolls_back() {
        let mut encoder = Encoder::new();
        encoder.encode(&Value::from("ok")).unwrap();
        let before = encoder.to_bytes();

        let mut obj = Object::new();
        obj.insert("fine", 1u8);
        obj.insert("big", Value::Array(vec![Value::Null; 300]));
        let err = encoder.encode(&Value::Object(obj)).unwrap_err();
        assert!(matches!(err, YesonError::LengthOverflow { len: 300 }));
        assert_eq!(encoder.get_bytes(), &before[..]);
    }

    #[test]
    fn decoder_reads_concatenation() {
        let mut encoder = Encoder::new();
        encoder.encode(&Value::integer(-5)).unwrap();
        encoder.encode(&Value::from("two")).unwrap();
        encoder.encode(&Value::Array(vec![])).unwrap();

        let bytes = encoder.into_bytes();
        let mut decoder = Decoder::new(&bytes);
        assert_eq!(decoder.decode().unwrap(), Value::integer(-5));
        assert_eq!(decoder.position(), 3);
        assert_eq!(
            decoder.decode_all().unwrap(),
            vec![Value::from("two"), Value::Array(vec![])]
        );
        assert!(decoder.is_finished());
        assert!(matches!(
            decoder.decode().unwrap_err(),
            YesonError::UnexpectedEndOfInput { .. }
        ));
    }

    #[test]
    fn decoder_honors_depth_option() {
        let bytes = [0x51, 0x51, 0x50];
        let mut decoder = Decoder::new(&bytes).with_options(DecodeOptions::new().max_depth(2));
        assert!(matches!(
            decoder.decode().unwrap_err(),
            YesonError::DepthLimitExceeded { limit: 2 }
        ));
    }

    #[test]
    fn from_slice_rejects_trailing_bytes() {
        assert_eq!(from_slice(&[0x10]).unwrap(), Value::Bool(false));
        assert!(matches!(
            from_slice(&[0x10, 0x00]).unwrap_err(),
            YesonError::TrailingBytes { remaining: 1 }
        ));
    }

    #[test]
    fn to_bytes_round_trip() {
        let val = Value::Array(vec![Value::from(2.5f64), Value::unsigned(u64::MAX)]);
        assert_eq!(from_slice(&to_bytes(&val).unwrap()).unwrap(), val);
    }
}
