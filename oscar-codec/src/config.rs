use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::options::{clamp_max_depth, CodecOptions};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    codec: CodecConfig,
}

#[derive(Deserialize, Default)]
struct CodecConfig {
    metadata: Option<bool>,
    unpack_single_args: Option<bool>,
    max_depth: Option<usize>,
}

pub struct Config {
    codec: CodecConfig,
}

impl Config {
    /// Embedded defaults, overlaid with the user's config file if one exists.
    pub fn load() -> Self {
        Self::load_with(user_config_path().as_deref())
    }

    /// Embedded defaults, overlaid with the file at `path`.
    pub fn load_from(path: &Path) -> Self {
        Self::load_with(Some(path))
    }

    /// Embedded defaults overlaid with the given TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let mut base = embedded_defaults();
        let user: ConfigFile = toml::from_str(contents)?;
        merge_codec(&mut base.codec, user.codec);
        Ok(Config { codec: base.codec })
    }

    fn load_with(user_path: Option<&Path>) -> Self {
        let mut base = embedded_defaults();

        if let Some(path) = user_path {
            if path.exists() {
                match std::fs::read_to_string(path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => merge_codec(&mut base.codec, user.codec),
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config { codec: base.codec }
    }

    /// Codec options, with `max_depth` clamped to 1..=1024.
    pub fn codec_options(&self) -> CodecOptions {
        let fallback = CodecOptions::default();
        CodecOptions {
            metadata: self.codec.metadata.unwrap_or(fallback.metadata),
            unpack_single_args: self
                .codec
                .unpack_single_args
                .unwrap_or(fallback.unpack_single_args),
            max_depth: clamp_max_depth(self.codec.max_depth.unwrap_or(fallback.max_depth)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            codec: embedded_defaults().codec,
        }
    }
}

fn embedded_defaults() -> ConfigFile {
    toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!(target: "config", "embedded config.toml is invalid: {}", e);
        ConfigFile::default()
    })
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("oscar").join("config.toml"))
}

fn merge_codec(base: &mut CodecConfig, user: CodecConfig) {
    if user.metadata.is_some() {
        base.metadata = user.metadata;
    }
    if user.unpack_single_args.is_some() {
        base.unpack_single_args = user.unpack_single_args;
    }
    if user.max_depth.is_some() {
        base.max_depth = user.max_depth;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_codec_defaults() {
        assert_eq!(Config::default().codec_options(), CodecOptions::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = Config::from_toml_str("[codec]\nmetadata = true\n").unwrap();
        let opts = config.codec_options();
        assert!(opts.metadata);
        assert!(opts.unpack_single_args);
        assert_eq!(opts.max_depth, 64);
    }

    #[test]
    fn max_depth_is_clamped() {
        let opts = Config::from_toml_str("[codec]\nmax_depth = 0\n")
            .unwrap()
            .codec_options();
        assert_eq!(opts.max_depth, 1);

        let opts = Config::from_toml_str("[codec]\nmax_depth = 100000\n")
            .unwrap()
            .codec_options();
        assert_eq!(opts.max_depth, 1024);
    }

    #[test]
    fn malformed_text_is_an_error() {
        assert!(Config::from_toml_str("[codec\nmetadata = ").is_err());
    }

    #[test]
    fn missing_user_file_uses_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/oscar/config.toml"));
        assert_eq!(config.codec_options(), CodecOptions::default());
    }
}
