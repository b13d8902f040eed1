// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! YAML interchange for patterns.
//!
//! A [`PatternFile`] is a text form of a [`Pattern`] that can be written by
//! hand and compiled into a `.splice` file, or dumped from one for
//! inspection. Step sequences use the same grid syntax the pattern renders
//! with:
//!
//! ```yaml
//! version: 0.808-alpha
//! tempo: 98.4
//! tracks:
//!   - id: 0
//!     name: kick
//!     steps: "|x---|x---|x---|x---|"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::pattern::{Pattern, Steps, Track};

/// Root of a pattern YAML document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternFile {
    /// Hardware version string
    #[serde(default)]
    pub version: String,
    /// Tempo in BPM
    #[serde(default = "default_tempo")]
    pub tempo: f32,
    /// Track definitions in file order
    #[serde(default)]
    pub tracks: Vec<TrackEntry>,
}

/// One track in a pattern document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackEntry {
    pub id: i32,
    pub name: String,
    /// Step grid, e.g. `"|x---|----|x---|----|"`
    #[serde(default = "default_steps")]
    pub steps: String,
}

fn default_tempo() -> f32 {
    120.0
}
fn default_steps() -> String {
    Steps::new().render()
}

impl PatternFile {
    /// Capture a pattern as a document
    pub fn from_pattern(pattern: &Pattern) -> Self {
        Self {
            version: pattern.version.clone(),
            tempo: pattern.tempo,
            tracks: pattern
                .tracks
                .iter()
                .map(|track| TrackEntry {
                    id: track.id,
                    name: track.name_lossy().into_owned(),
                    steps: track.steps.render(),
                })
                .collect(),
        }
    }

    /// Build the pattern this document describes
    pub fn to_pattern(&self) -> Result<Pattern> {
        let mut pattern = Pattern::with_version(self.version.clone(), self.tempo);
        for entry in &self.tracks {
            let steps: Steps = entry
                .steps
                .parse()
                .with_context(|| format!("Invalid steps for track ({}) {}", entry.id, entry.name))?;
            pattern.add_track(Track::new(entry.id, entry.name.as_bytes()).with_steps(steps));
        }
        Ok(pattern)
    }

    /// Load a pattern document from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read pattern document: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a pattern document from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML pattern document")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize pattern document to YAML")
    }

    /// Save the document to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write pattern document: {:?}", path.as_ref()))
    }
}

impl From<&Pattern> for PatternFile {
    fn from(pattern: &Pattern) -> Self {
        Self::from_pattern(pattern)
    }
}
