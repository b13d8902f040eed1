// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Path-based helpers around the codec.
//!
//! These own the file handle for the duration of one decode or encode;
//! the handle is closed on every exit path when it goes out of scope.
//! Encoding goes through a temporary file in the target directory that is
//! renamed over the target only once every byte is written.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::codec;
use crate::pattern::Pattern;

/// Decode the `.splice` file at `path`
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Pattern> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open pattern file: {:?}", path))?;

    let pattern = codec::decode(BufReader::new(file))
        .with_context(|| format!("Failed to decode pattern file: {:?}", path))?;

    debug!(
        path = %path.display(),
        version = %pattern.version,
        tracks = pattern.tracks.len(),
        "decoded pattern"
    );
    Ok(pattern)
}

/// Encode `pattern` to `path`, replacing any existing file.
///
/// The existing file is left as it was if encoding or writing fails.
pub fn encode_file<P: AsRef<Path>>(pattern: &Pattern, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = codec::encode_to_vec(pattern)
        .with_context(|| format!("Failed to encode pattern file: {:?}", path))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create pattern file: {:?}", path))?;
    staged
        .write_all(&bytes)
        .with_context(|| format!("Failed to write pattern file: {:?}", path))?;
    staged
        .flush()
        .with_context(|| format!("Failed to write pattern file: {:?}", path))?;
    staged
        .persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace pattern file: {:?}", path))?;

    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        tracks = pattern.tracks.len(),
        "encoded pattern"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecError;
    use crate::pattern::{Steps, Track};
    use tempfile::tempdir;

    #[test]
    fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pattern.splice");

        let mut pattern = Pattern::with_version("0.808-alpha", 98.4);
        pattern.add_track(Track::new(0, "kick").with_steps(Steps::from_indices(&[0, 4, 8, 12])));
        encode_file(&pattern, &path).unwrap();

        let loaded = decode_file(&path).unwrap();
        assert_eq!(loaded, pattern);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = decode_file(dir.path().join("nope.splice")).unwrap_err();
        assert!(err.to_string().contains("Failed to open pattern file"));
    }

    #[test]
    fn test_decode_error_is_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.splice");
        std::fs::write(&path, b"NOT A SPLICE FILE AT ALL").unwrap();

        let err = decode_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CodecError>(),
            Some(CodecError::MissingIdentifier)
        ));
    }

    #[test]
    fn test_failed_encode_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pattern.splice");

        let mut pattern = Pattern::with_version("0.808-alpha", 120.0);
        pattern.add_track(Track::new(0, "kick").with_steps(Steps::from_indices(&[0, 8])));
        encode_file(&pattern, &path).unwrap();
        let before = std::fs::read(&path).unwrap();

        let too_long = Pattern::with_version("x".repeat(33), 120.0);
        let err = encode_file(&too_long, &path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CodecError>(),
            Some(CodecError::CapacityExceeded { .. })
        ));

        assert_eq!(std::fs::read(&path).unwrap(), before);
        // No staged file left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_encode_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pattern.splice");
        std::fs::write(&path, vec![0xAA; 500]).unwrap();

        let pattern = Pattern::with_version("0.909", 240.0);
        encode_file(&pattern, &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap().len(), 50);
        assert_eq!(decode_file(&path).unwrap(), pattern);
    }
}
