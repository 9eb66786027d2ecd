use serde::{Deserialize, Serialize};

use crate::{Arg, Arguments, TimeTag};

/// An OSC message: an address pattern plus arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub address: String,
    #[serde(default)]
    pub args: Arguments,
}

impl Message {
    pub fn new(address: impl Into<String>, args: impl Into<Arguments>) -> Self {
        Self {
            address: address.into(),
            args: args.into(),
        }
    }

    /// A message with no arguments.
    pub fn bare(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            args: Arguments::default(),
        }
    }

    pub fn with_args(address: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            address: address.into(),
            args: Arguments::Many(args),
        }
    }
}

/// A time-stamped group of nested packets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(rename = "timeTag")]
    pub time_tag: TimeTag,
    pub packets: Vec<Packet>,
}

impl Bundle {
    pub fn new(time_tag: TimeTag, packets: Vec<Packet>) -> Self {
        Self { time_tag, packets }
    }
}

/// Either a message or a bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Packet {
    Message(Message),
    Bundle(Bundle),
}

impl Packet {
    pub fn as_message(&self) -> Option<&Message> {
        match self {
            Packet::Message(m) => Some(m),
            Packet::Bundle(_) => None,
        }
    }

    pub fn as_bundle(&self) -> Option<&Bundle> {
        match self {
            Packet::Bundle(b) => Some(b),
            Packet::Message(_) => None,
        }
    }
}

impl From<Message> for Packet {
    fn from(m: Message) -> Self {
        Packet::Message(m)
    }
}

impl From<Bundle> for Packet {
    fn from(b: Bundle) -> Self {
        Packet::Bundle(b)
    }
}
