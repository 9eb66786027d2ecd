//! Size-prefixed framing for OSC over byte streams.
//!
//! Wire format (OSC 1.0 stream convention): `[int32 length (big-endian)][packet]`

use std::io::{self, Read, Write};

use oscar_codec::{read_packet as decode, write_packet as encode, CodecOptions, OscError};
use oscar_types::Packet;

/// Frames larger than this are rejected on read.
pub const MAX_FRAME_LEN: usize = 16 * 1024 * 1024;

fn invalid_data(e: OscError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

/// Write one size-prefixed frame.
pub fn write_frame<W: Write>(writer: &mut W, payload: &[u8]) -> io::Result<()> {
    let len = i32::try_from(payload.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("frame too large: {} bytes", payload.len()),
        )
    })?;
    writer.write_all(&len.to_be_bytes())?;
    writer.write_all(payload)?;
    writer.flush()
}

/// Read one size-prefixed frame.
pub fn read_frame<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf)?;
    let declared = i32::from_be_bytes(len_buf);

    let len = usize::try_from(declared)
        .ok()
        .filter(|&len| len <= MAX_FRAME_LEN)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("bad frame length: {}", declared),
            )
        })?;

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;
    Ok(payload)
}

/// Encode a packet and write it as one frame.
pub fn write_packet<W: Write>(
    writer: &mut W,
    packet: &Packet,
    options: &CodecOptions,
) -> io::Result<()> {
    let payload = encode(packet, options).map_err(invalid_data)?;
    write_frame(writer, &payload)
}

/// Read one frame and decode it as a packet.
pub fn read_packet<R: Read>(reader: &mut R, options: &CodecOptions) -> io::Result<Packet> {
    let payload = read_frame(reader)?;
    decode(&payload, options).map_err(invalid_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oscar_codec::timetag::immediate;
    use oscar_types::{Bundle, Message, Value};
    use std::io::Cursor;

    #[test]
    fn roundtrip_two_packets() {
        let opts = CodecOptions::default();
        let first = Packet::from(Message::new("/a", Value::from("x")));
        let second = Packet::from(Bundle::new(immediate(), vec![first.clone()]));

        let mut buf = Vec::new();
        write_packet(&mut buf, &first, &opts).unwrap();
        write_packet(&mut buf, &second, &opts).unwrap();

        let mut cursor = Cursor::new(buf);
        assert_eq!(read_packet(&mut cursor, &opts).unwrap(), first);
        assert_eq!(read_packet(&mut cursor, &opts).unwrap(), second);
    }

    #[test]
    fn prefix_is_packet_length() {
        let mut buf = Vec::new();
        write_packet(&mut buf, &Packet::from(Message::bare("/ping")), &CodecOptions::default())
            .unwrap();
        assert_eq!(&buf[..4], &12i32.to_be_bytes());
        assert_eq!(buf.len(), 16);
    }

    #[test]
    fn negative_and_oversize_lengths_rejected() {
        for len in [-1i32, (MAX_FRAME_LEN + 1) as i32] {
            let mut cursor = Cursor::new(len.to_be_bytes().to_vec());
            let err = read_frame(&mut cursor).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        }
    }

    #[test]
    fn undecodable_payload_is_invalid_data() {
        let mut buf = Vec::new();
        write_frame(&mut buf, b"nope").unwrap();
        let err = read_packet(&mut Cursor::new(buf), &CodecOptions::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn truncated_frame_is_eof() {
        let mut buf = Vec::new();
        write_frame(&mut buf, b"/a\0\0,\0\0\0").unwrap();
        buf.truncate(6);
        let err = read_frame(&mut Cursor::new(buf)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
