//! Binary codec for Open Sound Control packets.
//!
//! Decodes byte buffers into the [`oscar_types`] data model and encodes the
//! model back into OSC 1.0/1.1 wire bytes. Every entry point takes a
//! [`CodecOptions`] controlling type metadata, single-argument unwrapping and
//! the nesting limit.

pub mod args;
pub mod bundle;
pub mod config;
pub mod error;
pub mod infer;
pub mod message;
pub mod options;
pub mod packet;
pub mod primitive;
pub mod timetag;

pub use bundle::{read_bundle, read_bundle_contents, write_bundle};
pub use config::Config;
pub use error::{OscError, Result};
pub use infer::{annotate, infer_type};
pub use message::{read_message, read_message_contents, write_message};
pub use options::CodecOptions;
pub use packet::{read_packet, read_packet_at, write_packet};
pub use primitive::Reader;
pub use timetag::{make_time_tag, read_time_tag, write_time_tag};
