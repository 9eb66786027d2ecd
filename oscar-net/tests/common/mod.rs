#![allow(dead_code)]
//! Shared helpers for oscar-net integration tests.

use std::time::{Duration, Instant};

use oscar_net::{OscPort, PortEvent, Transport};

/// Install a test logger once per binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Poll `port` until an event arrives, or panic after `timeout`.
pub fn poll_until<T: Transport>(port: &OscPort<T>, timeout: Duration) -> PortEvent {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if let Some(event) = port.poll().expect("transport failed") {
            return event;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("Timed out after {:?} waiting for a packet", timeout);
}
