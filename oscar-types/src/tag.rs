use serde::{Deserialize, Serialize};

/// One character of an OSC type-tag string.
///
/// Array brackets (`[` and `]`) are deliberately absent: they belong to the
/// argument grammar, not to any single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Int32,
    Int64,
    Float32,
    Float64,
    String,
    Symbol,
    Blob,
    TimeTag,
    True,
    False,
    Nil,
    Impulse,
    Char,
    Color,
    Midi,
}

impl TypeTag {
    pub const ALL: [TypeTag; 15] = [
        TypeTag::Int32,
        TypeTag::Int64,
        TypeTag::Float32,
        TypeTag::Float64,
        TypeTag::String,
        TypeTag::Symbol,
        TypeTag::Blob,
        TypeTag::TimeTag,
        TypeTag::True,
        TypeTag::False,
        TypeTag::Nil,
        TypeTag::Impulse,
        TypeTag::Char,
        TypeTag::Color,
        TypeTag::Midi,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'i' => Some(Self::Int32),
            'h' => Some(Self::Int64),
            'f' => Some(Self::Float32),
            'd' => Some(Self::Float64),
            's' => Some(Self::String),
            'S' => Some(Self::Symbol),
            'b' => Some(Self::Blob),
            't' => Some(Self::TimeTag),
            'T' => Some(Self::True),
            'F' => Some(Self::False),
            'N' => Some(Self::Nil),
            'I' => Some(Self::Impulse),
            'c' => Some(Self::Char),
            'r' => Some(Self::Color),
            'm' => Some(Self::Midi),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Int32 => 'i',
            Self::Int64 => 'h',
            Self::Float32 => 'f',
            Self::Float64 => 'd',
            Self::String => 's',
            Self::Symbol => 'S',
            Self::Blob => 'b',
            Self::TimeTag => 't',
            Self::True => 'T',
            Self::False => 'F',
            Self::Nil => 'N',
            Self::Impulse => 'I',
            Self::Char => 'c',
            Self::Color => 'r',
            Self::Midi => 'm',
        }
    }

    /// Whether values of this type occupy bytes after the type-tag string.
    /// `T`, `F`, `N` and `I` are pure markers.
    pub fn has_payload(self) -> bool {
        !matches!(self, Self::True | Self::False | Self::Nil | Self::Impulse)
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
