//! Yeson — a compact binary encoding for dynamically typed value trees.
//!
//! Supported values are null, booleans, UTF-8 strings, signed and unsigned
//! integers of 8/16/32/64 bits, single and double precision floats, arrays of
//! any values and string-keyed ordered objects.
//!
//! # Architecture
//!
//! - **`format`** — Header byte layout and per-type encode/decode routines
//! - **`codec`** — `Encoder` (owned output buffer) and `Decoder` (borrowed input cursor)
//! - **`types`** — The `Value` tree
//! - **`stream`** — Whole-document helpers over async readers and writers
//!
//! ```
//! use yeson::{Decoder, Encoder, Object, Value};
//!
//! let mut obj = Object::new();
//! obj.insert("a", Value::integer(1));
//! obj.insert("b", vec![Value::Bool(true), Value::Null, "x".into()]);
//!
//! let mut encoder = Encoder::new();
//! encoder.encode(&Value::Object(obj.clone())).unwrap();
//!
//! let mut decoder = Decoder::new(encoder.get_bytes());
//! assert_eq!(decoder.decode().unwrap(), Value::Object(obj));
//! ```

pub mod codec;
pub mod error;
pub mod format;
pub mod stream;
pub mod types;

pub use codec::{from_slice, to_bytes, DecodeOptions, Decoder, Encoder};
pub use error::{Result, YesonError};
pub use types::{Float, Int, Object, Value};
