//! Transport boundary for the Oscar OSC codec.
//!
//! This crate moves encoded packets over UDP, byte streams, or in-process
//! channels, and applies `oscar-codec` at the edge.

pub mod framing;
pub mod memory;
pub mod port;
pub mod transport;
pub mod udp;

pub use memory::MemoryTransport;
pub use port::{OscPort, PortError, PortEvent};
pub use transport::{PacketInfo, Transport};
pub use udp::UdpTransport;
