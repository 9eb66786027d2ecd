use oscar_types::{Arg, Arguments, Message};

use crate::args::{read_arguments_nested, write_arguments_nested};
use crate::error::{dump, OscError, Result};
use crate::options::CodecOptions;
use crate::primitive::{write_string, ByteParts, Reader};

/// Read the arguments of a message whose address has already been consumed.
pub fn read_message_contents(
    address: String,
    reader: &mut Reader<'_>,
    options: &CodecOptions,
) -> Result<Message> {
    read_message_contents_nested(address, reader, options, 0)
}

pub(crate) fn read_message_contents_nested(
    address: String,
    reader: &mut Reader<'_>,
    options: &CodecOptions,
    depth: usize,
) -> Result<Message> {
    if !address.starts_with('/') {
        return Err(OscError::MalformedAddress(address));
    }
    let args = read_arguments_nested(reader, options, depth)?;
    Ok(Message {
        address,
        args: pack_arguments(args, options),
    })
}

fn pack_arguments(mut args: Vec<Arg>, options: &CodecOptions) -> Arguments {
    if options.unpack_single_args && args.len() == 1 {
        if let Some(arg) = args.pop() {
            return Arguments::One(arg);
        }
    }
    Arguments::Many(args)
}

/// Decode a buffer holding exactly one message.
pub fn read_message(data: &[u8], options: &CodecOptions) -> Result<Message> {
    let mut reader = Reader::new(data);
    let address = reader.read_string()?;
    read_message_contents(address, &mut reader, options)
}

pub fn write_message(message: &Message, options: &CodecOptions) -> Result<Vec<u8>> {
    Ok(write_message_parts(message, options, 0)?.concat())
}

pub(crate) fn write_message_parts(
    message: &Message,
    options: &CodecOptions,
    depth: usize,
) -> Result<ByteParts> {
    if !is_valid_address(&message.address) {
        return Err(OscError::InvalidMessage(dump(message)));
    }
    let mut parts = ByteParts::new();
    parts.push(write_string(&message.address));
    parts.extend(write_arguments_nested(message.args.as_slice(), options, depth)?);
    Ok(parts)
}

pub(crate) fn is_valid_address(address: &str) -> bool {
    address.starts_with('/') && !address.contains('\0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use oscar_types::{OscType, Value};

    #[test]
    fn frequency_message_bytes() {
        let msg = Message::new("/oscillator/4/frequency", Value::Number(440.0));
        let bytes = write_message(&msg, &CodecOptions::default()).unwrap();

        let mut expected = b"/oscillator/4/frequency\0".to_vec();
        expected.extend_from_slice(b",f\0\0");
        expected.extend_from_slice(&[0x43, 0xDC, 0x00, 0x00]);
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes, expected);

        assert_eq!(read_message(&bytes, &CodecOptions::default()).unwrap(), msg);
    }

    #[test]
    fn single_argument_kept_wrapped_when_asked() {
        let msg = Message::new("/a", Value::Number(1.0));
        let bytes = write_message(&msg, &CodecOptions::default()).unwrap();
        let opts = CodecOptions::default().with_unpack_single_args(false);
        let back = read_message(&bytes, &opts).unwrap();
        assert_eq!(back.args, Arguments::Many(vec![Arg::Untyped(Value::Number(1.0))]));
    }

    #[test]
    fn empty_message() {
        let msg = Message::bare("/ping");
        let bytes = write_message(&msg, &CodecOptions::default()).unwrap();
        assert_eq!(bytes, b"/ping\0\0\0,\0\0\0".to_vec());
        assert_eq!(read_message(&bytes, &CodecOptions::default()).unwrap(), msg);
    }

    #[test]
    fn metadata_roundtrip() {
        let opts = CodecOptions::default().with_metadata(true);
        let msg = Message::with_args(
            "/synth/1",
            vec![
                Arg::Typed(OscType::Int(3)),
                Arg::Typed(OscType::String("saw".into())),
                Arg::Typed(OscType::Double(0.125)),
            ],
        );
        let bytes = write_message(&msg, &opts).unwrap();
        assert_eq!(read_message(&bytes, &opts).unwrap(), msg);
    }

    #[test]
    fn bad_address_rejected_on_write() {
        for address in ["", "oscillator"] {
            let msg = Message::bare(address);
            match write_message(&msg, &CodecOptions::default()) {
                Err(OscError::InvalidMessage(dumped)) => {
                    assert!(dumped.contains("address"), "got {}", dumped)
                }
                other => panic!("expected InvalidMessage, got {:?}", other),
            }
        }
    }

    #[test]
    fn address_with_embedded_nul_rejected_on_write() {
        let msg = Message::bare("/a\0xyz");
        assert!(matches!(
            write_message(&msg, &CodecOptions::default()),
            Err(OscError::InvalidMessage(_))
        ));
    }

    #[test]
    fn string_argument_with_nul_fails_whole_message() {
        let msg = Message::with_args(
            "/a",
            vec![
                Arg::Typed(OscType::String("a\0bcdefg".into())),
                Arg::Typed(OscType::Int(42)),
            ],
        );
        let opts = CodecOptions::default().with_metadata(true);
        assert!(matches!(write_message(&msg, &opts), Err(OscError::InvalidString(_))));
    }

    #[test]
    fn bad_address_rejected_on_read() {
        let mut bytes = write_string("nope");
        bytes.extend(write_string(","));
        let err = read_message(&bytes, &CodecOptions::default()).unwrap_err();
        assert_eq!(err, OscError::MalformedAddress("nope".into()));
        assert!(err.to_string().contains("address"));
    }
}
