//! Type-tag strings and the argument values they describe.
//!
//! Reading walks the tag string and dispatches each character to its reader.
//! Writing is two passes: every argument is first resolved to a concrete
//! [`OscType`] (inferring bare values) while the tag string is built, then the
//! tag string and the value bytes are emitted in order.

use std::borrow::Cow;

use oscar_types::{Arg, OscType, TypeTag};

use crate::error::{dump, OscError, Result};
use crate::infer::annotate;
use crate::options::CodecOptions;
use crate::primitive::{
    blob_size_prefix, write_blob, write_char32, write_color, write_float32, write_float64, write_int32, write_int64,
    write_midi, write_string, ByteParts, Reader,
};
use crate::timetag::{read_time_tag, write_time_tag};

/// Read a type-tag string, which must start with `,`.
pub fn read_type_tags(reader: &mut Reader<'_>) -> Result<String> {
    let type_tags = reader.read_string()?;
    if !type_tags.starts_with(',') {
        return Err(OscError::MalformedTypeTags(type_tags));
    }
    Ok(type_tags)
}

/// Read a type-tag string and every argument it describes.
pub fn read_arguments(reader: &mut Reader<'_>, options: &CodecOptions) -> Result<Vec<Arg>> {
    read_arguments_nested(reader, options, 0)
}

pub(crate) fn read_arguments_nested(
    reader: &mut Reader<'_>,
    options: &CodecOptions,
    depth: usize,
) -> Result<Vec<Arg>> {
    let type_tags = read_type_tags(reader)?;
    let tags: Vec<char> = type_tags.chars().skip(1).collect();
    read_into(&tags, &type_tags, reader, options, depth)
}

fn read_into(
    tags: &[char],
    type_tags: &str,
    reader: &mut Reader<'_>,
    options: &CodecOptions,
    depth: usize,
) -> Result<Vec<Arg>> {
    let mut args = Vec::with_capacity(tags.len());
    let mut i = 0;
    while i < tags.len() {
        match tags[i] {
            '[' => {
                if depth >= options.max_depth {
                    return Err(OscError::NestingTooDeep(options.max_depth));
                }
                let inner = &tags[i + 1..];
                let close = matching_close(inner)
                    .ok_or_else(|| OscError::UnterminatedArray(type_tags.to_string()))?;
                let items = read_into(&inner[..close], type_tags, reader, options, depth + 1)?;
                args.push(Arg::Array(items));
                i += close + 2;
            }
            c => {
                let tag = TypeTag::from_char(c).ok_or_else(|| OscError::UnknownTypeTag {
                    tag: c,
                    type_tags: type_tags.to_string(),
                })?;
                let value = read_typed(tag, reader)?;
                args.push(if options.metadata {
                    Arg::Typed(value)
                } else {
                    Arg::Untyped(value.into_value())
                });
                i += 1;
            }
        }
    }
    Ok(args)
}

/// Index of the `]` closing an array whose `[` precedes `tags`.
/// Inner brackets are counted, so arrays nest.
fn matching_close(tags: &[char]) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, &c) in tags.iter().enumerate() {
        match c {
            '[' => depth += 1,
            ']' if depth == 0 => return Some(idx),
            ']' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Read one value of the given type.
pub fn read_typed(tag: TypeTag, reader: &mut Reader<'_>) -> Result<OscType> {
    Ok(match tag {
        TypeTag::Int32 => OscType::Int(reader.read_int32()?),
        TypeTag::Int64 => OscType::Long(reader.read_int64()?),
        TypeTag::Float32 => OscType::Float(reader.read_float32()?),
        TypeTag::Float64 => OscType::Double(reader.read_float64()?),
        TypeTag::String => OscType::String(reader.read_string()?),
        TypeTag::Symbol => OscType::Symbol(reader.read_string()?),
        TypeTag::Blob => OscType::Blob(reader.read_blob()?),
        TypeTag::TimeTag => OscType::Time(read_time_tag(reader)?),
        TypeTag::True => OscType::True,
        TypeTag::False => OscType::False,
        TypeTag::Nil => OscType::Nil,
        TypeTag::Impulse => OscType::Impulse,
        TypeTag::Char => OscType::Char(reader.read_char32()?),
        TypeTag::Color => OscType::Color(reader.read_color()?),
        TypeTag::Midi => OscType::Midi(reader.read_midi()?),
    })
}

/// Append the value bytes of one argument. Marker types write nothing.
pub fn write_typed(value: &OscType, parts: &mut ByteParts) -> Result<()> {
    check_writable(value)?;
    match value {
        OscType::Int(v) => parts.push_slice(&write_int32(*v)),
        OscType::Long(v) => parts.push_slice(&write_int64(*v)),
        OscType::Float(v) => parts.push_slice(&write_float32(*v)),
        OscType::Double(v) => parts.push_slice(&write_float64(*v)),
        OscType::String(s) | OscType::Symbol(s) => parts.push(write_string(s)),
        OscType::Blob(b) => parts.push(write_blob(b)?),
        OscType::Time(t) => parts.push_slice(&write_time_tag(t)),
        OscType::True | OscType::False | OscType::Nil | OscType::Impulse => {}
        OscType::Char(c) => parts.push_slice(&write_char32(*c)),
        OscType::Color(c) => parts.push_slice(&write_color(c)),
        OscType::Midi(m) => parts.push_slice(&write_midi(m)),
    }
    Ok(())
}

/// Reject values the wire format can't carry faithfully.
fn check_writable(value: &OscType) -> Result<()> {
    match value {
        OscType::String(s) | OscType::Symbol(s) if s.contains('\0') => {
            Err(OscError::InvalidString(dump(value)))
        }
        OscType::Blob(b) => blob_size_prefix(b.len()).map(|_| ()),
        _ => Ok(()),
    }
}

/// An argument whose type is settled.
enum Resolved<'a> {
    Leaf(Cow<'a, OscType>),
    Array(Vec<Resolved<'a>>),
}

/// Write the type-tag string followed by every argument's bytes.
pub fn write_arguments(args: &[Arg], options: &CodecOptions) -> Result<ByteParts> {
    write_arguments_nested(args, options, 0)
}

pub(crate) fn write_arguments_nested(
    args: &[Arg],
    options: &CodecOptions,
    depth: usize,
) -> Result<ByteParts> {
    let mut type_tags = String::from(",");
    let resolved = resolve(args, options, depth, &mut type_tags)?;

    let mut parts = ByteParts::new();
    parts.push(write_string(&type_tags));
    emit(&resolved, &mut parts)?;
    Ok(parts)
}

fn resolve<'a>(
    args: &'a [Arg],
    options: &CodecOptions,
    depth: usize,
    type_tags: &mut String,
) -> Result<Vec<Resolved<'a>>> {
    let mut out = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Arg::Typed(value) => {
                check_writable(value)?;
                type_tags.push(value.tag().as_char());
                out.push(Resolved::Leaf(Cow::Borrowed(value)));
            }
            Arg::Untyped(value) => {
                if options.metadata {
                    return Err(OscError::UntypedArgument(dump(value)));
                }
                let value = annotate(value)?;
                check_writable(&value)?;
                type_tags.push(value.tag().as_char());
                out.push(Resolved::Leaf(Cow::Owned(value)));
            }
            Arg::Array(items) => {
                if depth >= options.max_depth {
                    return Err(OscError::NestingTooDeep(options.max_depth));
                }
                type_tags.push('[');
                let inner = resolve(items, options, depth + 1, type_tags)?;
                type_tags.push(']');
                out.push(Resolved::Array(inner));
            }
        }
    }
    Ok(out)
}

fn emit(resolved: &[Resolved<'_>], parts: &mut ByteParts) -> Result<()> {
    for item in resolved {
        match item {
            Resolved::Leaf(value) => write_typed(value, parts)?,
            Resolved::Array(items) => emit(items, parts)?,
        }
    }
    Ok(())
}
