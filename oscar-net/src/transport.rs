//! The byte-level send/receive seam.
//!
//! A `Transport` moves whole packets as opaque byte buffers. It knows nothing
//! about OSC; [`crate::OscPort`] applies the codec on top of it.

use std::io;
use std::net::SocketAddr;
use std::time::SystemTime;

/// Transport metadata attached to a received buffer.
///
/// The codec never looks at this; it is handed back alongside the decoded
/// packet so callers can reply or order by arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct PacketInfo {
    /// Sender address, when the transport has one.
    pub source: Option<SocketAddr>,
    pub received_at: SystemTime,
}

impl PacketInfo {
    pub fn new(source: Option<SocketAddr>) -> Self {
        Self {
            source,
            received_at: SystemTime::now(),
        }
    }
}

pub trait Transport: Send {
    /// Send one complete packet.
    fn send_raw(&self, data: &[u8]) -> io::Result<()>;

    /// Receive one complete packet, or `None` if nothing arrived in time.
    fn recv_raw(&self) -> io::Result<Option<(Vec<u8>, PacketInfo)>>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_raw(&self, data: &[u8]) -> io::Result<()> {
        (**self).send_raw(data)
    }

    fn recv_raw(&self) -> io::Result<Option<(Vec<u8>, PacketInfo)>> {
        (**self).recv_raw()
    }
}
