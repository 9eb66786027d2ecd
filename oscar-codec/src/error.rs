use std::fmt;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, OscError>;

/// Every way a read or write can fail. None of these are recovered internally.
#[derive(Debug, Clone, PartialEq)]
pub enum OscError {
    /// Type-tag string without the leading `,`.
    MalformedTypeTags(String),
    UnknownTypeTag { tag: char, type_tags: String },
    /// `[` with no matching `]`.
    UnterminatedArray(String),
    /// Address read off the wire does not start with `/`.
    MalformedAddress(String),
    /// First string of a packet is neither an address nor `#bundle`.
    UnrecognizedHeader(String),
    /// Message rejected on write; carries a JSON dump of the message.
    InvalidMessage(String),
    InvalidBundle(String),
    /// No inference rule for this value; carries a JSON dump of it.
    Uninferrable(String),
    /// Bare value passed while metadata mode requires explicit types.
    UntypedArgument(String),
    /// String argument with an embedded NUL; carries a JSON dump of it.
    InvalidString(String),
    /// Blob longer than an int32 size prefix can describe.
    BlobTooLarge(usize),
    /// `c` argument holding something that is not a Unicode scalar value.
    InvalidChar(u32),
    OutOfBounds {
        offset: usize,
        needed: usize,
        available: usize,
    },
    NestingTooDeep(usize),
}

impl fmt::Display for OscError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTypeTags(s) => write!(
                f,
                "A malformed type tag string was found while reading OSC arguments; it must begin with ','. Type tag string was: {}",
                s
            ),
            Self::UnknownTypeTag { tag, type_tags } => write!(
                f,
                "'{}' is not a valid OSC type tag. Type tag string was: {}",
                tag, type_tags
            ),
            Self::UnterminatedArray(s) => write!(
                f,
                "An open array type tag ('[') was found without a matching close array tag (']'). Type tag string was: {}",
                s
            ),
            Self::MalformedAddress(s) => write!(
                f,
                "A malformed OSC address was found while reading an OSC message. String was: {}",
                s
            ),
            Self::UnrecognizedHeader(s) => write!(
                f,
                "The header of an OSC packet didn't contain an OSC address or a #bundle string. Header was: {}",
                s
            ),
            Self::InvalidMessage(s) => write!(
                f,
                "An OSC message must contain a valid address. Message was: {}",
                s
            ),
            Self::InvalidBundle(s) => write!(f, "Invalid OSC bundle: {}", s),
            Self::Uninferrable(s) => {
                write!(f, "Can't infer OSC argument type for value: {}", s)
            }
            Self::UntypedArgument(s) => write!(
                f,
                "Metadata mode requires every argument to carry a type tag. Argument was: {}",
                s
            ),
            Self::InvalidString(s) => write!(
                f,
                "OSC strings are NUL-terminated and can't contain a NUL byte. String was: {}",
                s
            ),
            Self::BlobTooLarge(len) => write!(
                f,
                "A blob of {} bytes does not fit an int32 size prefix",
                len
            ),
            Self::InvalidChar(code) => {
                write!(f, "0x{:X} is not a valid Unicode code point for an OSC char", code)
            }
            Self::OutOfBounds {
                offset,
                needed,
                available,
            } => write!(
                f,
                "Read past the end of the buffer: needed {} bytes at offset {}, {} available",
                needed, offset, available
            ),
            Self::NestingTooDeep(limit) => {
                write!(f, "OSC packet nesting exceeds the limit of {} levels", limit)
            }
        }
    }
}

impl std::error::Error for OscError {}

/// JSON rendering of a value for error messages.
pub(crate) fn dump<T: serde::Serialize + fmt::Debug>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{:?}", value))
}
