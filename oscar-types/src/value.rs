use serde::{Deserialize, Serialize};

use crate::{TimeTag, TypeTag};

/// RGBA color argument. Channels are 0-255; alpha is normalized to 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

/// Four raw MIDI bytes, passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Midi {
    pub port: u8,
    pub status: u8,
    pub data1: u8,
    pub data2: u8,
}

impl Midi {
    pub fn to_bytes(self) -> [u8; 4] {
        [self.port, self.status, self.data1, self.data2]
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            port: bytes[0],
            status: bytes[1],
            data1: bytes[2],
            data2: bytes[3],
        }
    }
}

/// An argument value paired with its type tag (the "metadata" representation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OscType {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Symbol(String),
    Blob(Vec<u8>),
    Time(TimeTag),
    True,
    False,
    Nil,
    Impulse,
    Char(char),
    Color(Color),
    Midi(Midi),
}

impl OscType {
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Int(_) => TypeTag::Int32,
            Self::Long(_) => TypeTag::Int64,
            Self::Float(_) => TypeTag::Float32,
            Self::Double(_) => TypeTag::Float64,
            Self::String(_) => TypeTag::String,
            Self::Symbol(_) => TypeTag::Symbol,
            Self::Blob(_) => TypeTag::Blob,
            Self::Time(_) => TypeTag::TimeTag,
            Self::True => TypeTag::True,
            Self::False => TypeTag::False,
            Self::Nil => TypeTag::Nil,
            Self::Impulse => TypeTag::Impulse,
            Self::Char(_) => TypeTag::Char,
            Self::Color(_) => TypeTag::Color,
            Self::Midi(_) => TypeTag::Midi,
        }
    }

    /// Strip the type tag, keeping only the application-level shape.
    ///
    /// Lossy: `i`, `f`, `d` and `I` all become numbers, `s`, `S` and `c`
    /// become strings, `b` and `m` become byte sequences.
    pub fn into_value(self) -> Value {
        match self {
            Self::Int(v) => Value::Number(v as f64),
            Self::Long(v) => Value::Long(v),
            Self::Float(v) => Value::Number(v as f64),
            Self::Double(v) => Value::Number(v),
            Self::String(s) | Self::Symbol(s) => Value::Str(s),
            Self::Blob(b) => Value::Bytes(b),
            Self::Time(t) => Value::Time(t),
            Self::True => Value::Bool(true),
            Self::False => Value::Bool(false),
            Self::Nil => Value::Null,
            Self::Impulse => Value::Number(1.0),
            Self::Char(c) => Value::Str(c.to_string()),
            Self::Color(c) => Value::Color(c),
            Self::Midi(m) => Value::Bytes(m.to_bytes().to_vec()),
        }
    }
}

/// A bare application value, as produced by non-metadata reads.
///
/// `Time` and `Color` come out of the decoder but carry no inference rule,
/// so writing them requires an explicit [`OscType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Str(String),
    Number(f64),
    Null,
    Bytes(Vec<u8>),
    /// A 64-bit integer (the high/low pair).
    Long(i64),
    Time(TimeTag),
    Color(Color),
}

impl Value {
    /// Upper 32 bits of a 64-bit integer value.
    pub fn high(&self) -> Option<i32> {
        match self {
            Self::Long(v) => Some((*v >> 32) as i32),
            _ => None,
        }
    }

    /// Lower 32 bits of a 64-bit integer value.
    pub fn low(&self) -> Option<i32> {
        match self {
            Self::Long(v) => Some(*v as i32),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

/// One message argument: explicitly typed, awaiting inference, or a nested array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Arg {
    Typed(OscType),
    Untyped(Value),
    Array(Vec<Arg>),
}

impl From<OscType> for Arg {
    fn from(v: OscType) -> Self {
        Arg::Typed(v)
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Untyped(v)
    }
}

impl From<Vec<Arg>> for Arg {
    fn from(v: Vec<Arg>) -> Self {
        Arg::Array(v)
    }
}

/// Message arguments. A lone argument may be carried unwrapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arguments {
    One(Arg),
    Many(Vec<Arg>),
}

impl Default for Arguments {
    fn default() -> Self {
        Arguments::Many(Vec::new())
    }
}

impl Arguments {
    pub fn as_slice(&self) -> &[Arg] {
        match self {
            Self::One(arg) => std::slice::from_ref(arg),
            Self::Many(args) => args,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arg> {
        self.as_slice().iter()
    }

    pub fn into_vec(self) -> Vec<Arg> {
        match self {
            Self::One(arg) => vec![arg],
            Self::Many(args) => args,
        }
    }
}

impl From<Vec<Arg>> for Arguments {
    fn from(v: Vec<Arg>) -> Self {
        Arguments::Many(v)
    }
}

impl From<Arg> for Arguments {
    fn from(v: Arg) -> Self {
        Arguments::One(v)
    }
}

impl From<OscType> for Arguments {
    fn from(v: OscType) -> Self {
        Arguments::One(Arg::Typed(v))
    }
}

impl From<Value> for Arguments {
    fn from(v: Value) -> Self {
        Arguments::One(Arg::Untyped(v))
    }
}
