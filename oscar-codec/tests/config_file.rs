//! Loading codec settings from files on disk.

use std::fs;

use oscar_codec::{CodecOptions, Config};

#[test]
fn test_user_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[codec]\nmetadata = true\nunpack_single_args = false\n").unwrap();

    let opts = Config::load_from(&path).codec_options();
    assert!(opts.metadata);
    assert!(!opts.unpack_single_args);
    assert_eq!(opts.max_depth, CodecOptions::default().max_depth);
}

#[test]
fn test_malformed_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[codec]\nmetadata = \"yes please\"\n").unwrap();

    assert_eq!(Config::load_from(&path).codec_options(), CodecOptions::default());
}

#[test]
fn test_unknown_sections_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[net]\nport = 57120\n\n[codec]\nmax_depth = 8\n").unwrap();

    assert_eq!(Config::load_from(&path).codec_options().max_depth, 8);
}
