//! UDP transport: one datagram per packet.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use crate::transport::{PacketInfo, Transport};

/// How long `recv_raw` waits before reporting nothing received.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(50);

/// Largest datagram accepted.
const MAX_DATAGRAM: usize = 65_536;

pub struct UdpTransport {
    socket: UdpSocket,
    peer: SocketAddr,
}

impl UdpTransport {
    /// Bind `local` and send to `peer`.
    pub fn bind<A: ToSocketAddrs>(local: A, peer: SocketAddr) -> io::Result<Self> {
        let socket = UdpSocket::bind(local)?;
        Self::from_socket(socket, peer)
    }

    pub fn from_socket(socket: UdpSocket, peer: SocketAddr) -> io::Result<Self> {
        socket.set_read_timeout(Some(DEFAULT_READ_TIMEOUT))?;
        Ok(Self { socket, peer })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    pub fn set_peer(&mut self, peer: SocketAddr) {
        self.peer = peer;
    }

    pub fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        self.socket.set_read_timeout(timeout)
    }
}

impl Transport for UdpTransport {
    fn send_raw(&self, data: &[u8]) -> io::Result<()> {
        let sent = self.socket.send_to(data, self.peer)?;
        if sent != data.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short datagram write: {} of {} bytes", sent, data.len()),
            ));
        }
        Ok(())
    }

    fn recv_raw(&self) -> io::Result<Option<(Vec<u8>, PacketInfo)>> {
        let mut buf = vec![0u8; MAX_DATAGRAM];
        match self.socket.recv_from(&mut buf) {
            Ok((n, source)) => {
                buf.truncate(n);
                Ok(Some((buf, PacketInfo::new(Some(source)))))
            }
            Err(ref e)
                if e.kind() == io::ErrorKind::WouldBlock || e.kind() == io::ErrorKind::TimedOut =>
            {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
