#![allow(dead_code)]
//! Fixtures shared by the oscar-codec integration suites.

use oscar_codec::timetag::from_raw;
use oscar_types::{Bundle, Message, NtpTime, Packet, TimeTag, Value};

pub fn fixed_time(seconds: u32, fraction: u32) -> TimeTag {
    from_raw(NtpTime::new(seconds, fraction))
}

/// `#bundle { #bundle { /cat/meow/freq 222 }, /cat/purr 0.5 }`
pub fn cat_bundle() -> Packet {
    let inner = Bundle::new(
        fixed_time(3_800_000_000, 0x4000_0000),
        vec![Packet::from(Message::new("/cat/meow/freq", Value::Number(222.0)))],
    );
    Packet::from(Bundle::new(
        fixed_time(3_800_000_000, 0),
        vec![
            Packet::from(inner),
            Packet::from(Message::new("/cat/purr", Value::Number(0.5))),
        ],
    ))
}

/// Walk the elements of an encoded bundle, asserting that every size prefix
/// covers exactly one element and that the elements tile the buffer.
/// Returns the number of elements checked, nested ones included.
pub fn check_bundle_sizes(bytes: &[u8]) -> usize {
    assert_eq!(&bytes[..8], b"#bundle\0", "not a bundle");
    let mut pos = 16;
    let mut count = 0;
    while pos < bytes.len() {
        let size = i32::from_be_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]]);
        assert!(size >= 0, "negative size at offset {}", pos);
        let start = pos + 4;
        let end = start + size as usize;
        assert!(end <= bytes.len(), "size at offset {} overruns the buffer", pos);
        let element = &bytes[start..end];
        assert_eq!(element.len() % 4, 0, "element at offset {} is unaligned", start);
        if element.starts_with(b"#bundle\0") {
            count += check_bundle_sizes(element);
        }
        count += 1;
        pos = end;
    }
    assert_eq!(pos, bytes.len());
    count
}
