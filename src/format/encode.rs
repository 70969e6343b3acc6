//! Yeson encoding: `Value` → bytes.
//!
//! All multi-byte payloads are little-endian.

use bytes::{BufMut, BytesMut};

use super::header::{self, Header, Tag};
use crate::error::{Result, YesonError};
use crate::types::{Float, Int, Object, Value};

/// Encodes a `Value` into the buffer.
///
/// On error the buffer may hold a partial encoding; `Encoder::encode` rolls
/// it back.
pub fn encode_value(buf: &mut BytesMut, value: &Value) -> Result<()> {
    match value {
        Value::Null => encode_null(buf),
        Value::Bool(b) => encode_bool(buf, *b),
        Value::String(s) => encode_string(buf, s)?,
        Value::Int(i) => encode_int(buf, *i),
        Value::Float(f) => encode_float(buf, *f),
        Value::Array(items) => encode_array(buf, items)?,
        Value::Object(obj) => encode_object(buf, obj)?,
    }
    Ok(())
}

pub fn encode_null(buf: &mut BytesMut) {
    buf.put_u8(Header::new(Tag::Null, 0).pack());
}

pub fn encode_bool(buf: &mut BytesMut, value: bool) {
    buf.put_u8(Header::new(Tag::Bool, u8::from(value)).pack());
}

/// Encodes a string (length = UTF-8 byte length, not char count).
pub fn encode_string(buf: &mut BytesMut, value: &str) -> Result<()> {
    encode_length_header(buf, Tag::String, value.len())?;
    buf.put_slice(value.as_bytes());
    Ok(())
}

pub fn encode_int(buf: &mut BytesMut, value: Int) {
    let width = match value.width() {
        1 => header::INT_WIDTH_8,
        2 => header::INT_WIDTH_16,
        4 => header::INT_WIDTH_32,
        _ => header::INT_WIDTH_64,
    };
    let sign = if value.is_signed() { header::INT_SIGNED } else { 0 };
    buf.put_u8(Header::new(Tag::Int, sign | width).pack());
    match value {
        Int::U8(v) => buf.put_u8(v),
        Int::I16(v) => buf.put_i16_le(v),
        Int::U16(v) => buf.put_u16_le(v),
        Int::I32(v) => buf.put_i32_le(v),
        Int::U32(v) => buf.put_u32_le(v),
        Int::I64(v) => buf.put_i64_le(v),
        Int::U64(v) => buf.put_u64_le(v),
    }
}

pub fn encode_float(buf: &mut BytesMut, value: Float) {
    match value {
        Float::F32(v) => {
            buf.put_u8(Header::new(Tag::Float, header::FLOAT_SINGLE).pack());
            buf.put_f32_le(v);
        }
        Float::F64(v) => {
            buf.put_u8(Header::new(Tag::Float, header::FLOAT_DOUBLE).pack());
            buf.put_f64_le(v);
        }
    }
}

pub fn encode_array(buf: &mut BytesMut, items: &[Value]) -> Result<()> {
    encode_length_header(buf, Tag::Array, items.len())?;
    for item in items {
        encode_value(buf, item)?;
    }
    Ok(())
}

/// Encodes an object; the count is the number of key-value pairs.
pub fn encode_object(buf: &mut BytesMut, obj: &Object) -> Result<()> {
    encode_length_header(buf, Tag::Object, obj.len())?;
    for (key, value) in obj.iter() {
        encode_string(buf, key)?;
        encode_value(buf, value)?;
    }
    Ok(())
}

/// Writes a header carrying a short-form length (0..=14) in the info field,
/// or the `0b1111` sentinel followed by one length byte (15..=255).
fn encode_length_header(buf: &mut BytesMut, tag: Tag, len: usize) -> Result<()> {
    if len <= header::MAX_SHORT_LENGTH {
        buf.put_u8(Header::new(tag, len as u8).pack());
    } else if len <= header::MAX_LENGTH {
        buf.put_u8(Header::new(tag, header::LONG_LENGTH).pack());
        buf.put_u8(len as u8);
    } else {
        return Err(YesonError::LengthOverflow { len });
    }
    Ok(())
}
