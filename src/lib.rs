// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Decoder and encoder for `.splice` drum machine pattern files.
//!
//! ```
//! use splice::{codec, Pattern, Steps, Track};
//!
//! let mut pattern = Pattern::with_version("0.808-alpha", 98.4);
//! pattern.add_track(Track::new(0, "kick").with_steps(Steps::from_indices(&[0, 4, 8, 12])));
//!
//! let bytes = codec::encode_to_vec(&pattern).unwrap();
//! let decoded = codec::decode(bytes.as_slice()).unwrap();
//! assert_eq!(decoded.to_string(), "Saved with HW Version: 0.808-alpha\nTempo: 98.4\n(0) kick\t|x---|x---|x---|x---|\n");
//! ```

pub mod codec;
pub mod config;
pub mod file;
pub mod pattern;

pub use codec::{decode, encode, CodecError, Field};
pub use config::PatternFile;
pub use file::{decode_file, encode_file};
pub use pattern::{Pattern, Steps, Track};
