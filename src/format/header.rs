//! Header byte layout: high nibble = type tag, low nibble = info field.

use crate::error::YesonError;

/// Info value signalling that the length lives in the following byte.
pub const LONG_LENGTH: u8 = 0b1111;

/// Largest length that fits directly in the info field.
pub const MAX_SHORT_LENGTH: usize = 0b1110;

/// Largest length representable by the long-form length byte.
pub const MAX_LENGTH: usize = u8::MAX as usize;

// Integer info: bit 3 = signed, bits 2..0 = width code.
pub const INT_SIGNED: u8 = 0b1000;
pub const INT_WIDTH_MASK: u8 = 0b0111;
pub const INT_WIDTH_8: u8 = 0b001;
pub const INT_WIDTH_16: u8 = 0b010;
pub const INT_WIDTH_32: u8 = 0b011;
pub const INT_WIDTH_64: u8 = 0b100;

// Float info: low bit selects precision.
pub const FLOAT_SINGLE: u8 = 0;
pub const FLOAT_DOUBLE: u8 = 1;

/// Type tags stored in the header's high nibble. Tags 7..=15 are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    Null = 0,
    Bool = 1,
    String = 2,
    Int = 3,
    Float = 4,
    Array = 5,
    Object = 6,
}

impl TryFrom<u8> for Tag {
    type Error = YesonError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Ok(match tag {
            0 => Self::Null,
            1 => Self::Bool,
            2 => Self::String,
            3 => Self::Int,
            4 => Self::Float,
            5 => Self::Array,
            6 => Self::Object,
            _ => return Err(YesonError::UnsupportedType { tag }),
        })
    }
}

/// An unpacked header byte. The tag is kept raw; recognizing it is the
/// dispatch site's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub tag: u8,
    pub info: u8,
}

impl Header {
    pub fn new(tag: Tag, info: u8) -> Self {
        Self {
            tag: tag as u8,
            info: info & 0x0F,
        }
    }

    pub fn pack(self) -> u8 {
        (self.tag << 4) | (self.info & 0x0F)
    }

    pub fn unpack(byte: u8) -> Self {
        Self {
            tag: byte >> 4,
            info: byte & 0x0F,
        }
    }

    /// Resolves the raw tag, failing with `UnsupportedType` for reserved tags.
    pub fn tag(self) -> Result<Tag, YesonError> {
        Tag::try_from(self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack() {
        let h = Header::new(Tag::Int, INT_SIGNED | INT_WIDTH_16);
        assert_eq!(h.pack(), 0x3A);
        assert_eq!(Header::unpack(0x3A), h);
    }

    #[test]
    fn info_is_masked() {
        assert_eq!(Header::new(Tag::Bool, 0xF1).pack(), 0x11);
    }

    #[test]
    fn tags_partition_high_nibble() {
        let tags = [
            Tag::Null,
            Tag::Bool,
            Tag::String,
            Tag::Int,
            Tag::Float,
            Tag::Array,
            Tag::Object,
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(Header::new(*a, 0xF).pack() >> 4, Header::new(*b, 0xF).pack() >> 4);
            }
            assert_eq!(Header::unpack(Header::new(*a, 0).pack()).tag().unwrap(), *a);
        }
    }

    #[test]
    fn reserved_tags_rejected() {
        for tag in 7..=15u8 {
            let err = Header::unpack(tag << 4).tag().unwrap_err();
            assert!(matches!(err, YesonError::UnsupportedType { tag: t } if t == tag));
        }
    }
}
