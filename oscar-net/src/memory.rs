//! In-process transport over a pair of bounded channels.

use std::io;

use crossbeam_channel::{Receiver, Sender, TryRecvError, TrySendError};

use crate::transport::{PacketInfo, Transport};

/// Per-direction queue capacity.
const MEMORY_QUEUE_CAPACITY: usize = 512;

/// One end of a connected in-memory link.
pub struct MemoryTransport {
    tx: Sender<Vec<u8>>,
    rx: Receiver<Vec<u8>>,
}

impl MemoryTransport {
    /// Two connected ends: what one sends, the other receives.
    pub fn pair() -> (Self, Self) {
        Self::pair_with_capacity(MEMORY_QUEUE_CAPACITY)
    }

    pub fn pair_with_capacity(capacity: usize) -> (Self, Self) {
        let (a_tx, b_rx) = crossbeam_channel::bounded(capacity);
        let (b_tx, a_rx) = crossbeam_channel::bounded(capacity);
        (
            Self { tx: a_tx, rx: a_rx },
            Self { tx: b_tx, rx: b_rx },
        )
    }

    /// Packets waiting to be received on this end.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

impl Transport for MemoryTransport {
    fn send_raw(&self, data: &[u8]) -> io::Result<()> {
        match self.tx.try_send(data.to_vec()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                log::warn!(target: "osc::memory", "send queue full, dropping {} byte packet", data.len());
                Err(io::Error::new(io::ErrorKind::WouldBlock, "memory transport queue full"))
            }
            Err(TrySendError::Disconnected(_)) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "memory transport peer dropped",
            )),
        }
    }

    fn recv_raw(&self) -> io::Result<Option<(Vec<u8>, PacketInfo)>> {
        match self.rx.try_recv() {
            Ok(data) => Ok(Some((data, PacketInfo::new(None)))),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "memory transport peer dropped",
            )),
        }
    }
}
