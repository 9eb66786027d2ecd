//! Top-level dispatch between messages and bundles.
//!
//! On the wire the only discriminator is the first string of the packet:
//! `#bundle` opens a bundle and a leading `/` opens a message.

use oscar_types::Packet;

use crate::bundle::{read_bundle_contents_nested, write_bundle_parts, BUNDLE_TAG};
use crate::error::{OscError, Result};
use crate::message::{read_message_contents_nested, write_message_parts};
use crate::options::CodecOptions;
use crate::primitive::{ByteParts, Reader};

/// Decode a complete buffer as one packet.
pub fn read_packet(data: &[u8], options: &CodecOptions) -> Result<Packet> {
    read_packet_at(&mut Reader::new(data), options)
}

/// Decode one packet starting at the reader's cursor, bounded by its end.
pub fn read_packet_at(reader: &mut Reader<'_>, options: &CodecOptions) -> Result<Packet> {
    read_packet_nested(reader, options, 0)
}

pub(crate) fn read_packet_nested(
    reader: &mut Reader<'_>,
    options: &CodecOptions,
    depth: usize,
) -> Result<Packet> {
    let header = reader.read_string()?;
    match header.chars().next() {
        Some('#') if header == BUNDLE_TAG => {
            log::trace!(target: "osc::codec", "bundle at depth {}", depth);
            read_bundle_contents_nested(reader, options, depth).map(Packet::Bundle)
        }
        Some('/') => read_message_contents_nested(header, reader, options, depth).map(Packet::Message),
        _ => {
            log::debug!(target: "osc::codec", "rejecting packet with header {:?}", header);
            Err(OscError::UnrecognizedHeader(header))
        }
    }
}

pub fn write_packet(packet: &Packet, options: &CodecOptions) -> Result<Vec<u8>> {
    Ok(write_packet_parts(packet, options, 0)?.concat())
}

pub(crate) fn write_packet_parts(
    packet: &Packet,
    options: &CodecOptions,
    depth: usize,
) -> Result<ByteParts> {
    match packet {
        Packet::Message(message) => write_message_parts(message, options, depth),
        Packet::Bundle(bundle) => write_bundle_parts(bundle, options, depth),
    }
}
