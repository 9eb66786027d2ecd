//! Packets through a connected pair of in-memory ports.

mod common;

use std::time::Duration;

use oscar_codec::timetag::make_time_tag;
use oscar_codec::CodecOptions;
use oscar_net::{MemoryTransport, OscPort, PortEvent, Transport};
use oscar_types::{Arg, Bundle, Message, OscType, Packet, Value};

#[test]
fn test_bundle_survives_the_link() {
    common::init_logging();
    let (a, b) = MemoryTransport::pair();
    let (tx, rx) = (OscPort::new(a), OscPort::new(b));

    let bundle = Packet::from(Bundle::new(
        make_time_tag(0.25),
        vec![
            Packet::from(Message::new("/synth/freq", Value::Number(220.0))),
            Packet::from(Message::new("/synth/gate", Value::Bool(true))),
        ],
    ));
    tx.send(&bundle).unwrap();

    match common::poll_until(&rx, Duration::from_secs(1)) {
        PortEvent::Packet { packet, info } => {
            assert_eq!(packet, bundle);
            assert!(info.source.is_none());
        }
        other => panic!("expected packet, got {:?}", other),
    }
}

#[test]
fn test_metadata_port_keeps_types() {
    let opts = CodecOptions::default().with_metadata(true);
    let (a, b) = MemoryTransport::pair();
    let (tx, rx) = (OscPort::with_options(a, opts), OscPort::with_options(b, opts));

    let msg = Packet::from(Message::with_args(
        "/mix",
        vec![
            Arg::Typed(OscType::Int(7)),
            Arg::Array(vec![Arg::Typed(OscType::Double(0.5)), Arg::Typed(OscType::Nil)]),
        ],
    ));
    tx.send(&msg).unwrap();
    assert_eq!(
        common::poll_until(&rx, Duration::from_secs(1)).into_packet(),
        Some(msg)
    );
}

#[test]
fn test_bad_packet_does_not_stop_the_loop() {
    common::init_logging();
    let (a, b) = MemoryTransport::pair();
    let rx = OscPort::new(b);

    a.send_raw(b"/broken\0,x\0\0").unwrap();
    a.send_raw(b"/ok\0,\0\0\0").unwrap();

    assert!(matches!(
        common::poll_until(&rx, Duration::from_secs(1)),
        PortEvent::Error { .. }
    ));
    assert_eq!(
        common::poll_until(&rx, Duration::from_secs(1)).into_packet(),
        Some(Packet::from(Message::bare("/ok")))
    );
}
