//! Yeson decoding: bytes → `Value`.

use bytes::Buf;

use super::header::{self, Header, Tag};
use crate::error::{Result, YesonError};
use crate::types::{Float, Int, Object, Value};

/// Default limit on array/object nesting accepted by the decoder.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Decodes a single `Value` from the buffer with the default nesting limit.
pub fn decode_value(buf: &mut impl Buf) -> Result<Value> {
    decode_value_limited(buf, DEFAULT_MAX_DEPTH)
}

/// Decodes a single `Value`, rejecting arrays/objects nested deeper than
/// `max_depth` levels.
pub fn decode_value_limited(buf: &mut impl Buf, max_depth: usize) -> Result<Value> {
    decode_nested(buf, 0, max_depth)
}

fn decode_nested(buf: &mut impl Buf, depth: usize, max_depth: usize) -> Result<Value> {
    let h = decode_header(buf)?;
    match h.tag()? {
        Tag::Null => Ok(Value::Null),
        Tag::Bool => Ok(Value::Bool(decode_bool(h.info))),
        Tag::String => decode_string(buf, h.info).map(Value::String),
        Tag::Int => decode_int(buf, h.info).map(Value::Int),
        Tag::Float => decode_float(buf, h.info).map(Value::Float),
        Tag::Array => {
            check_depth(depth, max_depth)?;
            let len = decode_length(buf, h.info)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(decode_nested(buf, depth + 1, max_depth)?);
            }
            Ok(Value::Array(items))
        }
        Tag::Object => {
            check_depth(depth, max_depth)?;
            let len = decode_length(buf, h.info)?;
            let mut obj = Object::with_capacity(len);
            for _ in 0..len {
                let key = decode_key(buf)?;
                let value = decode_nested(buf, depth + 1, max_depth)?;
                // Duplicate keys are kept as they appear on the wire.
                obj.push(key, value);
            }
            Ok(Value::Object(obj))
        }
    }
}

pub fn decode_header(buf: &mut impl Buf) -> Result<Header> {
    ensure_remaining(buf, 1)?;
    Ok(Header::unpack(buf.get_u8()))
}

pub fn decode_bool(info: u8) -> bool {
    info & 1 == 1
}

/// Decodes string payload bytes following a String header.
pub fn decode_string(buf: &mut impl Buf, info: u8) -> Result<String> {
    let len = decode_length(buf, info)?;
    ensure_remaining(buf, len)?;
    let mut data = vec![0u8; len];
    buf.copy_to_slice(&mut data);
    match String::from_utf8(data) {
        Ok(s) => Ok(s),
        Err(e) => Err(YesonError::InvalidEncoding(e.utf8_error())),
    }
}

/// Decodes the integer payload selected by the info field's signedness bit
/// and width code.
///
/// Width code `0b001` is always an unsigned byte; the signedness bit is
/// ignored for it.
pub fn decode_int(buf: &mut impl Buf, info: u8) -> Result<Int> {
    let signed = info & header::INT_SIGNED != 0;
    let value = match info & header::INT_WIDTH_MASK {
        header::INT_WIDTH_8 => {
            ensure_remaining(buf, 1)?;
            Int::U8(buf.get_u8())
        }
        header::INT_WIDTH_16 => {
            ensure_remaining(buf, 2)?;
            if signed {
                Int::I16(buf.get_i16_le())
            } else {
                Int::U16(buf.get_u16_le())
            }
        }
        header::INT_WIDTH_32 => {
            ensure_remaining(buf, 4)?;
            if signed {
                Int::I32(buf.get_i32_le())
            } else {
                Int::U32(buf.get_u32_le())
            }
        }
        header::INT_WIDTH_64 => {
            ensure_remaining(buf, 8)?;
            if signed {
                Int::I64(buf.get_i64_le())
            } else {
                Int::U64(buf.get_u64_le())
            }
        }
        _ => return Err(YesonError::UnsupportedWidth { info }),
    };
    Ok(value)
}

pub fn decode_float(buf: &mut impl Buf, info: u8) -> Result<Float> {
    match info {
        header::FLOAT_SINGLE => {
            ensure_remaining(buf, 4)?;
            Ok(Float::F32(buf.get_f32_le()))
        }
        header::FLOAT_DOUBLE => {
            ensure_remaining(buf, 8)?;
            Ok(Float::F64(buf.get_f64_le()))
        }
        _ => Err(YesonError::UnsupportedPrecision { info }),
    }
}

/// Reads a short-form length from `info`, or the following byte when `info`
/// holds the long-form sentinel.
pub fn decode_length(buf: &mut impl Buf, info: u8) -> Result<usize> {
    if info == header::LONG_LENGTH {
        ensure_remaining(buf, 1)?;
        Ok(usize::from(buf.get_u8()))
    } else {
        Ok(usize::from(info))
    }
}

fn decode_key(buf: &mut impl Buf) -> Result<String> {
    let h = decode_header(buf)?;
    if h.tag != Tag::String as u8 {
        return Err(YesonError::InvalidKey { tag: h.tag });
    }
    decode_string(buf, h.info)
}

fn check_depth(depth: usize, max_depth: usize) -> Result<()> {
    if depth >= max_depth {
        Err(YesonError::DepthLimitExceeded { limit: max_depth })
    } else {
        Ok(())
    }
}

fn ensure_remaining(buf: &impl Buf, needed: usize) -> Result<()> {
    if buf.remaining() < needed {
        Err(YesonError::end_of_input(needed, buf.remaining()))
    } else {
        Ok(())
    }
}
