// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Drum pattern data model.
//!
//! A [`Pattern`] is the decoded form of one `.splice` file: the hardware
//! version it was saved with, its tempo, and an ordered list of
//! [`Track`]s, each carrying a 16-step [`Steps`] sequence.

pub mod steps;
pub mod track;

pub use steps::{ParseStepsError, Steps, STEP_COUNT};
pub use track::Track;

use std::fmt;

/// A complete drum pattern
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    /// Hardware version string the pattern was saved with
    pub version: String,
    /// Tempo in BPM
    pub tempo: f32,
    /// Tracks in file order
    pub tracks: Vec<Track>,
}

impl Pattern {
    /// Create an empty pattern: no version, zero tempo, no tracks
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pattern with version and tempo set
    pub fn with_version(version: impl Into<String>, tempo: f32) -> Self {
        Self {
            version: version.into(),
            tempo,
            tracks: Vec::new(),
        }
    }

    /// Append a track
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Get tracks
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Get a track by position
    pub fn track_mut(&mut self, index: usize) -> Option<&mut Track> {
        self.tracks.get_mut(index)
    }

    /// Get the first track whose name matches exactly
    pub fn track_by_name_mut(&mut self, name: &str) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.name == name.as_bytes())
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the pattern has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Multi-line description: version, tempo, then one line per track
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        writeln!(f, "Tempo: {}", self.tempo)?;
        for track in &self.tracks {
            writeln!(f, "{}\t{}", track, track.steps)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern() {
        let pattern = Pattern::new();
        assert!(pattern.is_empty());
        assert_eq!(pattern.version, "");
        assert_eq!(pattern.tempo, 0.0);
        assert_eq!(pattern.render(), "Saved with HW Version: \nTempo: 0\n");
    }

    #[test]
    fn test_render() {
        let mut pattern = Pattern::with_version("0.808-alpha", 98.4);
        pattern.add_track(Track::new(0, "kick").with_steps(Steps::from_indices(&[0, 4, 8, 12])));

        assert_eq!(
            pattern.render(),
            "Saved with HW Version: 0.808-alpha\nTempo: 98.4\n(0) kick\t|x---|x---|x---|x---|\n"
        );
    }

    #[test]
    fn test_whole_tempo_renders_without_fraction() {
        let pattern = Pattern::with_version("0.909", 120.0);
        assert!(pattern.render().contains("Tempo: 120\n"));
    }

    #[test]
    fn test_track_lookup() {
        let mut pattern = Pattern::with_version("0.808-alpha", 120.0);
        pattern.add_track(Track::new(0, "kick"));
        pattern.add_track(Track::new(1, "snare"));

        let snare = pattern.track_by_name_mut("snare").unwrap();
        snare.steps.toggle(4);
        assert!(pattern.tracks()[1].steps[4]);

        assert!(pattern.track_by_name_mut("cowbell").is_none());
        assert!(pattern.track_mut(2).is_none());
        assert_eq!(pattern.len(), 2);
    }
}
