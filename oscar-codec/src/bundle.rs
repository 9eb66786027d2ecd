//! `#bundle` packets: a time tag followed by size-prefixed elements.
//!
//! Each element's declared size becomes the reader's end bound while that
//! element is parsed, so a truncated or overlong element fails as a bounds
//! error instead of bleeding into its neighbours.

use oscar_types::Bundle;

use crate::error::{OscError, Result};
use crate::options::CodecOptions;
use crate::packet::{read_packet_nested, write_packet_parts};
use crate::primitive::{write_int32, write_string, ByteParts, Reader};
use crate::timetag::{read_time_tag, write_time_tag};

pub const BUNDLE_TAG: &str = "#bundle";

/// Read a bundle's time tag and elements; the `#bundle` header is already consumed.
///
/// Elements are read until the reader's end bound.
pub fn read_bundle_contents(reader: &mut Reader<'_>, options: &CodecOptions) -> Result<Bundle> {
    read_bundle_contents_nested(reader, options, 0)
}

pub(crate) fn read_bundle_contents_nested(
    reader: &mut Reader<'_>,
    options: &CodecOptions,
    depth: usize,
) -> Result<Bundle> {
    let time_tag = read_time_tag(reader)?;
    let mut packets = Vec::new();

    while !reader.is_at_end() {
        if depth >= options.max_depth {
            return Err(OscError::NestingTooDeep(options.max_depth));
        }

        let offset = reader.position();
        let declared = reader.read_int32()?;
        let len = usize::try_from(declared)
            .ok()
            .filter(|&len| len <= reader.remaining())
            .ok_or(OscError::OutOfBounds {
                offset,
                needed: declared as u32 as usize,
                available: reader.remaining(),
            })?;

        let element_end = reader.position() + len;
        let outer_end = reader.set_end(element_end);
        let packet = read_packet_nested(reader, options, depth + 1);
        reader.set_end(outer_end);

        packets.push(packet?);
        reader.seek(element_end);
    }

    Ok(Bundle { time_tag, packets })
}

/// Decode a buffer holding exactly one bundle.
pub fn read_bundle(data: &[u8], options: &CodecOptions) -> Result<Bundle> {
    let mut reader = Reader::new(data);
    let header = reader.read_string()?;
    if header != BUNDLE_TAG {
        return Err(OscError::UnrecognizedHeader(header));
    }
    read_bundle_contents(&mut reader, options)
}

pub fn write_bundle(bundle: &Bundle, options: &CodecOptions) -> Result<Vec<u8>> {
    Ok(write_bundle_parts(bundle, options, 0)?.concat())
}

pub(crate) fn write_bundle_parts(
    bundle: &Bundle,
    options: &CodecOptions,
    depth: usize,
) -> Result<ByteParts> {
    let mut parts = ByteParts::new();
    parts.push(write_string(BUNDLE_TAG));
    parts.push_slice(&write_time_tag(&bundle.time_tag));

    for packet in &bundle.packets {
        if depth >= options.max_depth {
            return Err(OscError::NestingTooDeep(options.max_depth));
        }
        let element = write_packet_parts(packet, options, depth + 1)?;
        let len = i32::try_from(element.byte_len()).map_err(|_| {
            OscError::InvalidBundle(format!(
                "element of {} bytes does not fit an int32 size prefix",
                element.byte_len()
            ))
        })?;
        parts.push_slice(&write_int32(len));
        parts.extend(element);
    }

    Ok(parts)
}
