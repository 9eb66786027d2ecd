//! Fixed-width primitives: big-endian numbers, padded strings and blobs,
//! and the 4-byte color/MIDI/char quads.
//!
//! Reads go through [`Reader`], which owns the cursor for one parse. Nested
//! parses share the same reader by `&mut` so the cursor advances through the
//! whole call tree; a bundle element narrows the reader's end bound for the
//! duration of its own parse and restores it afterwards.

use oscar_types::{Color, Midi};

use crate::error::{OscError, Result};

/// Round `len` up to the next multiple of 4.
#[inline]
pub fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

/// Byte cursor over an input buffer, bounded by `end`.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            end: buf.len(),
        }
    }

    /// Reader over `buf[pos..end]`. `end` is clamped to the buffer length.
    pub fn bounded(buf: &'a [u8], pos: usize, end: usize) -> Self {
        let end = end.min(buf.len());
        Self {
            buf,
            pos: pos.min(end),
            end,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Move the cursor, clamped to the end bound.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.end);
    }

    /// Replace the end bound, returning the previous one.
    ///
    /// The new end may only shrink the readable window.
    pub(crate) fn set_end(&mut self, end: usize) -> usize {
        let prev = self.end;
        self.end = end.min(self.buf.len());
        self.pos = self.pos.min(self.end);
        prev
    }

    fn out_of_bounds(&self, needed: usize) -> OscError {
        OscError::OutOfBounds {
            offset: self.pos,
            needed,
            available: self.remaining(),
        }
    }

    /// Consume exactly `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(self.out_of_bounds(n));
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Skip alignment padding. Padding missing at the very end is tolerated.
    fn skip_padding(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.end);
    }

    pub fn peek_u8(&self) -> Result<u8> {
        if self.is_at_end() {
            return Err(self.out_of_bounds(1));
        }
        Ok(self.buf[self.pos])
    }

    pub fn read_int32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    pub fn read_uint32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    pub fn read_int64(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    pub fn read_float32(&mut self) -> Result<f32> {
        Ok(f32::from_be_bytes(self.read_array()?))
    }

    pub fn read_float64(&mut self) -> Result<f64> {
        Ok(f64::from_be_bytes(self.read_array()?))
    }

    /// Read a NUL-terminated, 4-byte aligned string.
    ///
    /// With no NUL before the end bound, the whole remainder is taken as the
    /// string and the cursor moves to the end. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub fn read_string(&mut self) -> Result<String> {
        let window = &self.buf[self.pos..self.end];
        match window.iter().position(|&b| b == 0) {
            Some(nul) => {
                let s = String::from_utf8_lossy(&window[..nul]).into_owned();
                let consumed = padded_len(nul + 1);
                self.pos += nul;
                self.skip_padding(consumed - nul);
                Ok(s)
            }
            None => {
                let s = String::from_utf8_lossy(window).into_owned();
                self.pos = self.end;
                Ok(s)
            }
        }
    }

    /// Read an int32 length, that many bytes, then skip to the next 4-byte boundary.
    pub fn read_blob(&mut self) -> Result<Vec<u8>> {
        let offset = self.pos;
        let declared = self.read_int32()?;
        let len = usize::try_from(declared).map_err(|_| OscError::OutOfBounds {
            offset,
            needed: declared as u32 as usize,
            available: self.remaining(),
        })?;
        let data = self.read_bytes(len)?.to_vec();
        self.skip_padding(padded_len(len) - len);
        Ok(data)
    }

    pub fn read_char32(&mut self) -> Result<char> {
        let code = self.read_uint32()?;
        char::from_u32(code).ok_or(OscError::InvalidChar(code))
    }

    pub fn read_color(&mut self) -> Result<Color> {
        let [r, g, b, a] = self.read_array::<4>()?;
        Ok(Color {
            r,
            g,
            b,
            a: a as f32 / 255.0,
        })
    }

    pub fn read_midi(&mut self) -> Result<Midi> {
        Ok(Midi::from_bytes(self.read_array()?))
    }
}

pub fn write_int32(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn write_uint32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn write_int64(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

pub fn write_float32(value: f32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn write_float64(value: f64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Write an int32 into a caller-supplied buffer at `offset`, returning the written region.
pub fn write_int32_at(buf: &mut [u8], offset: usize, value: i32) -> Result<&[u8]> {
    let available = buf.len().saturating_sub(offset);
    if available < 4 {
        return Err(OscError::OutOfBounds {
            offset,
            needed: 4,
            available,
        });
    }
    let region = &mut buf[offset..offset + 4];
    region.copy_from_slice(&value.to_be_bytes());
    Ok(region)
}

/// String bytes, a NUL terminator, and NUL padding to a multiple of 4.
///
/// An embedded NUL would end the string early on read; callers writing
/// user data reject those first.
pub fn write_string(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(padded_len(s.len() + 1));
    out.extend_from_slice(s.as_bytes());
    out.resize(padded_len(s.len() + 1), 0);
    out
}

/// Int32 size prefix for a blob of `len` bytes.
pub(crate) fn blob_size_prefix(len: usize) -> Result<[u8; 4]> {
    i32::try_from(len)
        .map(write_int32)
        .map_err(|_| OscError::BlobTooLarge(len))
}

pub fn write_blob(data: &[u8]) -> Result<Vec<u8>> {
    let prefix = blob_size_prefix(data.len())?;
    let mut out = Vec::with_capacity(4 + padded_len(data.len()));
    out.extend_from_slice(&prefix);
    out.extend_from_slice(data);
    out.resize(4 + padded_len(data.len()), 0);
    Ok(out)
}

pub fn write_char32(c: char) -> [u8; 4] {
    (c as u32).to_be_bytes()
}

pub fn write_color(color: &Color) -> [u8; 4] {
    let a = (color.a * 255.0).round().clamp(0.0, 255.0) as u8;
    [color.r, color.g, color.b, a]
}

pub fn write_midi(midi: &Midi) -> [u8; 4] {
    midi.to_bytes()
}

/// Output accumulator: an ordered list of chunks plus their running length,
/// joined once when the encode is complete.
#[derive(Debug, Default, Clone)]
pub struct ByteParts {
    parts: Vec<Vec<u8>>,
    byte_len: usize,
}

impl ByteParts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, part: Vec<u8>) {
        self.byte_len += part.len();
        self.parts.push(part);
    }

    pub fn push_slice(&mut self, part: &[u8]) {
        self.push(part.to_vec());
    }

    /// Append every chunk of `other`, keeping order.
    pub fn extend(&mut self, other: ByteParts) {
        self.byte_len += other.byte_len;
        self.parts.extend(other.parts);
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn concat(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len);
        for part in self.parts {
            out.extend_from_slice(&part);
        }
        out
    }
}
