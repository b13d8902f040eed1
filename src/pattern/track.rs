// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! A single instrument track: id, name and step sequence.

use std::borrow::Cow;
use std::fmt;

use super::steps::Steps;

/// One instrument in a pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    /// Track identifier (not required to be unique)
    pub id: i32,
    /// Raw name bytes, copied verbatim from the file
    pub name: Vec<u8>,
    /// 16-step on/off sequence
    pub steps: Steps,
}

impl Track {
    /// Create a new track with every step inactive
    pub fn new(id: i32, name: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            name: name.into(),
            steps: Steps::new(),
        }
    }

    /// Set the step sequence
    pub fn with_steps(mut self, steps: Steps) -> Self {
        self.steps = steps;
        self
    }

    /// Name as text, replacing invalid UTF-8
    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Render as `(<id>) <name>`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.id, self.name_lossy())
    }
}
