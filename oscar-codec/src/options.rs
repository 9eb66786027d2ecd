use serde::{Deserialize, Deserializer, Serialize};

/// Default bound on bundle and array nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Largest `max_depth` accepted from any source.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Switches recognized by every read and write entry point.
///
/// Field names are snake_case; the camelCase spellings used by JSON tooling
/// are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Read typed `{type, value}` arguments and require them on write.
    pub metadata: bool,
    /// Return a single decoded argument unwrapped.
    #[serde(alias = "unpackSingleArgs")]
    pub unpack_single_args: bool,
    /// Nesting depth past which a packet is rejected. Always in 1..=1024.
    #[serde(alias = "maxDepth", deserialize_with = "deserialize_max_depth")]
    pub max_depth: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            metadata: false,
            unpack_single_args: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodecOptions {
    pub fn with_metadata(mut self, metadata: bool) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_unpack_single_args(mut self, unpack: bool) -> Self {
        self.unpack_single_args = unpack;
        self
    }

    /// Set the nesting limit, clamped to 1..=1024.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = clamp_max_depth(max_depth);
        self
    }
}

pub(crate) fn clamp_max_depth(max_depth: usize) -> usize {
    max_depth.clamp(1, MAX_DEPTH_LIMIT)
}

fn deserialize_max_depth<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    usize::deserialize(deserializer).map(clamp_max_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialized_max_depth_is_clamped() {
        let opts: CodecOptions = serde_json::from_str(r#"{"max_depth":0}"#).unwrap();
        assert_eq!(opts.max_depth, 1);
        let opts: CodecOptions = serde_json::from_str(r#"{"max_depth":99999}"#).unwrap();
        assert_eq!(opts.max_depth, MAX_DEPTH_LIMIT);
    }

    #[test]
    fn zero_depth_still_writes_a_flat_bundle() {
        use oscar_types::{Bundle, Message, Packet};

        let opts: CodecOptions = serde_json::from_str(r#"{"max_depth":0}"#).unwrap();
        let bundle = Bundle::new(
            crate::timetag::immediate(),
            vec![Packet::from(Message::bare("/one"))],
        );
        assert!(crate::write_bundle(&bundle, &opts).is_ok());
    }

    #[test]
    fn builder_clamps_too() {
        assert_eq!(CodecOptions::default().with_max_depth(0).max_depth, 1);
        assert_eq!(CodecOptions::default().with_max_depth(5000).max_depth, MAX_DEPTH_LIMIT);
    }

    #[test]
    fn camel_case_names_are_accepted() {
        let opts: CodecOptions =
            serde_json::from_str(r#"{"metadata":true,"unpackSingleArgs":false,"maxDepth":8}"#)
                .unwrap();
        assert_eq!(
            opts,
            CodecOptions {
                metadata: true,
                unpack_single_args: false,
                max_depth: 8,
            }
        );
    }

    #[test]
    fn missing_fields_take_defaults() {
        let opts: CodecOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, CodecOptions::default());
    }
}
