//! Yeson wire format.
//!
//! Every value starts with one header byte: the high nibble is the type tag,
//! the low nibble an info field whose meaning depends on the tag. There is no
//! other framing, so values concatenate without separators. Multi-byte
//! payloads are little-endian.

pub mod decode;
pub mod encode;
pub mod header;

pub use decode::decode_value;
pub use encode::encode_value;
pub use header::{Header, Tag};
