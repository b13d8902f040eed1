// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fixed 16-step on/off sequence.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use thiserror::Error;

/// Number of steps in every track
pub const STEP_COUNT: usize = 16;

/// Steps per group in the rendered grid
const GROUP_SIZE: usize = 4;

const STEP_SEP: char = '|';
const STEP_PLAY: char = 'x';
const STEP_REST: char = '-';

/// Error parsing a rendered step grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStepsError {
    /// Grid contained a character that is neither a step nor a separator
    #[error("invalid step character {0:?}")]
    InvalidCharacter(char),

    /// Grid did not contain exactly 16 steps
    #[error("expected 16 steps, found {0}")]
    WrongLength(usize),
}

/// One track's 16-step on/off pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Steps([bool; STEP_COUNT]);

impl Steps {
    /// Create a sequence with every step inactive
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence with the given positions active.
    ///
    /// Positions outside `0..16` are ignored.
    pub fn from_indices(indices: &[usize]) -> Self {
        let mut steps = Self::new();
        for &i in indices {
            if i < STEP_COUNT {
                steps.0[i] = true;
            }
        }
        steps
    }

    /// Build from the on-wire form: any non-zero byte is an active step
    pub fn from_bytes(bytes: &[u8; STEP_COUNT]) -> Self {
        let mut steps = Self::new();
        for (step, &b) in steps.0.iter_mut().zip(bytes) {
            *step = b != 0;
        }
        steps
    }

    /// On-wire form: 1 for active, 0 for inactive
    pub fn to_bytes(&self) -> [u8; STEP_COUNT] {
        let mut bytes = [0u8; STEP_COUNT];
        for (b, &step) in bytes.iter_mut().zip(&self.0) {
            *b = u8::from(step);
        }
        bytes
    }

    /// Whether step `index` is active (`false` when out of range)
    pub fn get(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Set step `index`; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, active: bool) {
        if let Some(step) = self.0.get_mut(index) {
            *step = active;
        }
    }

    /// Flip step `index`, returning its new state, or `None` when
    /// `index` is out of range
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        self.0.get_mut(index).map(|step| {
            *step = !*step;
            *step
        })
    }

    /// Number of active steps
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|&&s| s).count()
    }

    /// Step states in order, index 0 first
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Underlying fixed-size array
    pub fn as_array(&self) -> &[bool; STEP_COUNT] {
        &self.0
    }

    /// Render as `|x---|x---|x---|x---|`
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(STEP_COUNT + STEP_COUNT / GROUP_SIZE + 1);
        out.push(STEP_SEP);
        for (i, &step) in self.0.iter().enumerate() {
            out.push(if step { STEP_PLAY } else { STEP_REST });
            if (i + 1) % GROUP_SIZE == 0 {
                out.push(STEP_SEP);
            }
        }
        out
    }
}

impl From<[bool; STEP_COUNT]> for Steps {
    fn from(steps: [bool; STEP_COUNT]) -> Self {
        Self(steps)
    }
}

impl Index<usize> for Steps {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.0[index]
    }
}

impl IndexMut<usize> for Steps {
    fn index_mut(&mut self, index: usize) -> &mut bool {
        &mut self.0[index]
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for Steps {
    type Err = ParseStepsError;

    /// Parse a rendered grid. Separators and whitespace are ignored;
    /// `x`/`X` is active, `-`/`.` is inactive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut steps = [false; STEP_COUNT];
        let mut count = 0;

        for c in s.chars() {
            let active = match c {
                STEP_SEP => continue,
                c if c.is_whitespace() => continue,
                'x' | 'X' => true,
                '-' | '.' => false,
                other => return Err(ParseStepsError::InvalidCharacter(other)),
            };
            if count < STEP_COUNT {
                steps[count] = active;
            }
            count += 1;
        }

        if count != STEP_COUNT {
            return Err(ParseStepsError::WrongLength(count));
        }
        Ok(Self(steps))
    }
}
