// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pattern decoding.

use std::io::{self, Read};

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};

use super::{read_error, CodecError, Field, IDENTIFIER_LEN, MAGIC, VERSION_LEN};
use crate::pattern::{Pattern, Steps, Track, STEP_COUNT};

/// Decode a pattern from a byte stream.
///
/// Tracks are read until the stream ends cleanly at a record boundary.
/// Running out of bytes anywhere else is a [`CodecError::StreamRead`].
pub fn decode<R: Read>(mut reader: R) -> Result<Pattern, CodecError> {
    let (version, tempo) = decode_header(&mut reader)?;
    let mut pattern = Pattern::with_version(version, tempo);

    while let Some(track) = decode_track(&mut reader)? {
        pattern.add_track(track);
    }

    Ok(pattern)
}

/// Read the identifier, version and tempo fields
fn decode_header<R: Read>(reader: &mut R) -> Result<(String, f32), CodecError> {
    let mut identifier = [0u8; IDENTIFIER_LEN];
    reader
        .read_exact(&mut identifier)
        .map_err(read_error(Field::Identifier))?;
    if !identifier.starts_with(MAGIC) {
        return Err(CodecError::MissingIdentifier);
    }

    let mut raw_version = [0u8; VERSION_LEN];
    reader
        .read_exact(&mut raw_version)
        .map_err(read_error(Field::Version))?;
    let version_bytes: Vec<u8> = raw_version.iter().copied().filter(|&b| b != 0).collect();
    // Invalid UTF-8 is rejected, never replaced
    let version = String::from_utf8(version_bytes).map_err(|e| CodecError::StreamRead {
        field: Field::Version,
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;

    let tempo = reader
        .read_f32::<LittleEndian>()
        .map_err(read_error(Field::Tempo))?;

    Ok((version, tempo))
}

/// Read one track record, or `None` if the stream ended before it began
fn decode_track<R: Read>(reader: &mut R) -> Result<Option<Track>, CodecError> {
    let mut id_bytes = [0u8; 4];
    match read_first_byte(reader).map_err(read_error(Field::TrackId))? {
        Some(b) => id_bytes[0] = b,
        None => return Ok(None),
    }
    reader
        .read_exact(&mut id_bytes[1..])
        .map_err(read_error(Field::TrackId))?;
    let id = LittleEndian::read_i32(&id_bytes);

    let name_len = reader.read_u8().map_err(read_error(Field::NameLength))?;
    let mut name = vec![0u8; name_len as usize];
    reader
        .read_exact(&mut name)
        .map_err(read_error(Field::Name))?;

    let mut raw_steps = [0u8; STEP_COUNT];
    reader
        .read_exact(&mut raw_steps)
        .map_err(read_error(Field::Steps))?;

    Ok(Some(Track {
        id,
        name,
        steps: Steps::from_bytes(&raw_steps),
    }))
}

/// Read a single byte, distinguishing a clean end of stream (`None`)
fn read_first_byte<R: Read>(reader: &mut R) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
