//! Codec applied at a transport boundary.
//!
//! Outgoing packets are encoded and handed to the transport as one buffer.
//! Incoming buffers are decoded; a buffer that fails to decode becomes a
//! [`PortEvent::Error`] rather than an `Err`, so one bad datagram never stops
//! a receive loop.

use std::fmt;
use std::io;

use oscar_codec::{read_packet, write_packet, CodecOptions, OscError};
use oscar_types::Packet;

use crate::transport::{PacketInfo, Transport};

#[derive(Debug, Clone, PartialEq)]
pub enum PortEvent {
    Packet { packet: Packet, info: PacketInfo },
    Error { error: OscError, info: PacketInfo },
}

impl PortEvent {
    pub fn info(&self) -> &PacketInfo {
        match self {
            Self::Packet { info, .. } | Self::Error { info, .. } => info,
        }
    }

    pub fn into_packet(self) -> Option<Packet> {
        match self {
            Self::Packet { packet, .. } => Some(packet),
            Self::Error { .. } => None,
        }
    }
}

/// Failure sending through a port.
#[derive(Debug)]
pub enum PortError {
    /// The packet could not be encoded.
    Encode(OscError),
    Io(io::Error),
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(e) => write!(f, "encode failed: {}", e),
            Self::Io(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl std::error::Error for PortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<OscError> for PortError {
    fn from(e: OscError) -> Self {
        PortError::Encode(e)
    }
}

impl From<io::Error> for PortError {
    fn from(e: io::Error) -> Self {
        PortError::Io(e)
    }
}

pub struct OscPort<T> {
    transport: T,
    options: CodecOptions,
}

impl<T: Transport> OscPort<T> {
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, CodecOptions::default())
    }

    pub fn with_options(transport: T, options: CodecOptions) -> Self {
        Self { transport, options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn send(&self, packet: &Packet) -> Result<(), PortError> {
        let bytes = write_packet(packet, &self.options)?;
        if let Err(e) = self.transport.send_raw(&bytes) {
            log::warn!(target: "osc::port", "dropped {} byte packet: {}", bytes.len(), e);
            return Err(e.into());
        }
        Ok(())
    }

    /// Receive and decode the next packet, if one is available.
    pub fn poll(&self) -> io::Result<Option<PortEvent>> {
        let Some((data, info)) = self.transport.recv_raw()? else {
            return Ok(None);
        };

        Ok(Some(match read_packet(&data, &self.options) {
            Ok(packet) => PortEvent::Packet { packet, info },
            Err(error) => {
                log::warn!(
                    target: "osc::port",
                    "undecodable {} byte packet from {:?}: {}",
                    data.len(),
                    info.source,
                    error
                );
                PortEvent::Error { error, info }
            }
        }))
    }
}
