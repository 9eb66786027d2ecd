//! # oscar-types
//!
//! Shared data model for the Oscar OSC toolkit.
//! This crate contains the packet, argument and time-tag types used by
//! oscar-codec and oscar-net. It holds no wire logic of its own.

mod packet;
mod tag;
mod time;
mod value;

pub use packet::{Bundle, Message, Packet};
pub use tag::TypeTag;
pub use time::{NtpTime, TimeTag};
pub use value::{Arg, Arguments, Color, Midi, OscType, Value};

/// Number of seconds between the NTP epoch (1900-01-01) and the Unix epoch.
pub const NTP_UNIX_OFFSET: u64 = 2_208_988_800;

/// 2^32, the denominator of the NTP fractional-second field.
pub const TWO_POW_32: f64 = 4_294_967_296.0;
