// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pattern encoding.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use super::{write_error, CodecError, Field, IDENTIFIER_LEN, MAGIC, MAX_NAME_LEN, VERSION_LEN};
use crate::pattern::{Pattern, Track};

/// Encode a pattern to a byte sink.
///
/// Field capacities are checked before anything is written, so a
/// [`CodecError::CapacityExceeded`] leaves the sink untouched.
pub fn encode<W: Write>(pattern: &Pattern, mut writer: W) -> Result<(), CodecError> {
    check_capacity(pattern)?;

    write_header(pattern, &mut writer)?;
    for track in &pattern.tracks {
        write_track(track, &mut writer)?;
    }

    Ok(())
}

/// Encode a pattern into a new buffer
pub fn encode_to_vec(pattern: &Pattern) -> Result<Vec<u8>, CodecError> {
    let mut buffer = Vec::new();
    encode(pattern, &mut buffer)?;
    Ok(buffer)
}

fn check_capacity(pattern: &Pattern) -> Result<(), CodecError> {
    let len = pattern.version.len();
    if len > VERSION_LEN {
        return Err(CodecError::CapacityExceeded {
            field: Field::Version,
            len,
            max: VERSION_LEN,
        });
    }

    if let Some(track) = pattern.tracks.iter().find(|t| t.name.len() > MAX_NAME_LEN) {
        return Err(CodecError::CapacityExceeded {
            field: Field::Name,
            len: track.name.len(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

fn write_header<W: Write>(pattern: &Pattern, writer: &mut W) -> Result<(), CodecError> {
    // Magic followed by the zero-filled reserved region
    let mut identifier = [0u8; IDENTIFIER_LEN];
    identifier[..MAGIC.len()].copy_from_slice(MAGIC);
    writer
        .write_all(&identifier)
        .map_err(write_error(Field::Identifier))?;

    let mut version = [0u8; VERSION_LEN];
    version[..pattern.version.len()].copy_from_slice(pattern.version.as_bytes());
    writer
        .write_all(&version)
        .map_err(write_error(Field::Version))?;

    writer
        .write_f32::<LittleEndian>(pattern.tempo)
        .map_err(write_error(Field::Tempo))?;

    Ok(())
}

fn write_track<W: Write>(track: &Track, writer: &mut W) -> Result<(), CodecError> {
    writer
        .write_i32::<LittleEndian>(track.id)
        .map_err(write_error(Field::TrackId))?;
    writer
        .write_u8(track.name.len() as u8)
        .map_err(write_error(Field::NameLength))?;
    writer
        .write_all(&track.name)
        .map_err(write_error(Field::Name))?;
    writer
        .write_all(&track.steps.to_bytes())
        .map_err(write_error(Field::Steps))?;
    Ok(())
}
