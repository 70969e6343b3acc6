//! Reading and writing whole Yeson documents over async byte streams.
//!
//! A document is a concatenation of encoded values with no framing. Reads
//! buffer the stream to EOF before decoding.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::codec::{DecodeOptions, Decoder, Encoder};
use crate::error::Result;
use crate::types::Value;

/// Encodes `values` back to back and writes them to `writer`.
///
/// Nothing is written if any value fails to encode.
pub async fn write_values<W>(writer: &mut W, values: &[Value]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut encoder = Encoder::new();
    for value in values {
        encoder.encode(value)?;
    }
    writer.write_all(encoder.get_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Reads `reader` to EOF and decodes every value in it.
pub async fn read_values<R>(reader: &mut R) -> Result<Vec<Value>>
where
    R: AsyncRead + Unpin,
{
    read_values_with(reader, DecodeOptions::default()).await
}

pub async fn read_values_with<R>(reader: &mut R, options: DecodeOptions) -> Result<Vec<Value>>
where
    R: AsyncRead + Unpin,
{
    let mut data = Vec::new();
    reader.read_to_end(&mut data).await?;

    let mut decoder = Decoder::new(&data).with_options(options);
    decoder.decode_all().inspect_err(|e| {
        tracing::debug!(
            offset = decoder.position(),
            len = data.len(),
            error = %e,
            "failed to decode document"
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YesonError;
    use crate::types::Object;
    use std::io::Cursor;

    #[tokio::test]
    async fn write_then_read() {
        let mut obj = Object::new();
        obj.insert("null", Value::Null);
        obj.insert("bool", true);
        obj.insert("string", "Hello, world!");
        obj.insert("int", 123i32);
        obj.insert("float", 123.456f32);
        obj.insert("array", vec![Value::from(1i32), 2i32.into(), 3i32.into()]);
        let values = vec![Value::Object(obj), Value::from("tail")];

        let mut output = Vec::new();
        write_values(&mut output, &values).await.unwrap();

        let decoded = read_values(&mut Cursor::new(output)).await.unwrap();
        assert_eq!(decoded, values);
    }

    #[tokio::test]
    async fn empty_stream_has_no_values() {
        let decoded = read_values(&mut Cursor::new(Vec::new())).await.unwrap();
        assert!(decoded.is_empty());
    }

    #[tokio::test]
    async fn truncated_stream_fails() {
        let mut reader = Cursor::new(vec![0x11, 0x33, 0x01]);
        let err = read_values(&mut reader).await.unwrap_err();
        assert!(matches!(err, YesonError::UnexpectedEndOfInput { .. }));
    }

    #[tokio::test]
    async fn failed_encode_writes_nothing() {
        let mut output = Vec::new();
        let values = vec![Value::Null, Value::from("x".repeat(300))];
        let err = write_values(&mut output, &values).await.unwrap_err();
        assert!(matches!(err, YesonError::LengthOverflow { len: 300 }));
        assert!(output.is_empty());
    }
}
