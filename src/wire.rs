//! Wire-format primitives for the catalog encoding.
//!
//! The catalog is a stream of tagged fields: each field starts with a varint
//! key packing `(field number << 3) | wire type`, followed by a payload whose
//! size is determined by the wire type. Unknown fields are skipped by their
//! declared size, which is what keeps the format forward compatible.

use crate::{Error, Result};

/// Wire types of the tagged-field encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    /// Base-128 varint
    Varint,
    /// 8-byte little-endian value
    Fixed64,
    /// Length-prefixed byte payload (strings, nested messages)
    LenDelimited,
    /// 4-byte little-endian value
    Fixed32,
}

impl WireType {
    /// Convert from the low 3 bits of a field key.
    ///
    /// Values 3 and 4 (deprecated group markers) and 6-7 (reserved) are
    /// grammar violations.
    pub fn from_u8(v: u8) -> Result<Self> {
        match v {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LenDelimited),
            5 => Ok(WireType::Fixed32),
            other => Err(Error::InvalidWireType(other)),
        }
    }
}

/// Cursor over a message payload.
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Create a reader over a full message payload.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Whether the cursor has consumed the whole payload.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn remaining(&self) -> u64 {
        (self.buf.len() - self.pos) as u64
    }

    /// Read a base-128 varint.
    pub fn read_varint(&mut self) -> Result<u64> {
        let mut value: u64 = 0;
        let mut shift = 0u32;

        loop {
            let byte = *self.buf.get(self.pos).ok_or(Error::TruncatedVarint)?;
            self.pos += 1;

            if shift >= 64 {
                return Err(Error::OverlongVarint);
            }
            value |= u64::from(byte & 0x7f) << shift;

            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
        }
    }

    /// Read a field key, returning (field number, wire type).
    pub fn read_tag(&mut self) -> Result<(u64, WireType)> {
        let key = self.read_varint()?;
        let wire_type = WireType::from_u8((key & 0x07) as u8)?;
        Ok((key >> 3, wire_type))
    }

    /// Read a length-prefixed byte slice.
    pub fn read_bytes(&mut self) -> Result<&'a [u8]> {
        let len = self.read_varint()?;
        if len > self.remaining() {
            return Err(Error::TruncatedField {
                needed: len,
                remaining: self.remaining(),
            });
        }

        let len = len as usize;
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Read a length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> Result<&'a str> {
        Ok(std::str::from_utf8(self.read_bytes()?)?)
    }

    fn advance(&mut self, n: usize) -> Result<()> {
        if n as u64 > self.remaining() {
            return Err(Error::TruncatedField {
                needed: n as u64,
                remaining: self.remaining(),
            });
        }
        self.pos += n;
        Ok(())
    }

    /// Skip over the payload of a field with the given wire type.
    pub fn skip_field(&mut self, wire_type: WireType) -> Result<()> {
        match wire_type {
            WireType::Varint => self.read_varint().map(|_| ()),
            WireType::Fixed64 => self.advance(8),
            WireType::LenDelimited => self.read_bytes().map(|_| ()),
            WireType::Fixed32 => self.advance(4),
        }
    }
}
