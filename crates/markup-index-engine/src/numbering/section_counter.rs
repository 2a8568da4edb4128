use serde::Serialize;

use crate::error::{IndexError, Result};

/// Number of heading levels tracked when no depth is configured.
pub const DEFAULT_DEPTH: usize = 5;

/// Separator appended to a visible heading number (ideographic space).
pub const PREFIX_SEPARATOR: &str = "\u{3000}";

/// The numbering produced for a single heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionNumber {
    /// Text shown before the heading caption; empty when numbering is hidden.
    pub prefix: String,
    /// Full hierarchical position, e.g. `"2.1.1"`.
    pub anchor: String,
}

/// Fixed-depth hierarchical heading counter.
///
/// `counts[0]` holds level 1, `counts[depth - 1]` holds the deepest level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCounter {
    counts: Vec<usize>,
}

impl SectionCounter {
    /// Creates a counter tracking `depth` levels, all starting at zero.
    pub fn new(depth: usize) -> Self {
        Self {
            counts: vec![0; depth],
        }
    }

    /// Number of levels this counter tracks.
    pub fn depth(&self) -> usize {
        self.counts.len()
    }

    /// Current value of each level, shallowest first.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Advances `level` and resets every deeper level.
    ///
    /// `visible_depth` is the deepest level whose number is shown; it is
    /// consulted for this call only and never stored.
    ///
    /// # Errors
    /// Returns [`IndexError::LevelOutOfRange`] when `level` is `0` or deeper
    /// than [`depth`](Self::depth). The counter is left unchanged.
    pub fn increment(&mut self, level: usize, visible_depth: usize) -> Result<SectionNumber> {
        self.check_level(level)?;

        self.counts[level - 1] += 1;
        for count in &mut self.counts[level..] {
            *count = 0;
        }

        Ok(SectionNumber {
            prefix: self.prefix(level, visible_depth)?,
            anchor: self.anchor(level)?,
        })
    }

    /// Dot-joined counts of levels `1..=level`.
    pub fn anchor(&self, level: usize) -> Result<String> {
        self.check_level(level)?;
        let parts: Vec<String> = self.counts[..level].iter().map(|c| c.to_string()).collect();
        Ok(parts.join("."))
    }

    /// The anchor plus [`PREFIX_SEPARATOR`], or an empty string when `level`
    /// is deeper than `visible_depth`.
    pub fn prefix(&self, level: usize, visible_depth: usize) -> Result<String> {
        if level > visible_depth {
            self.check_level(level)?;
            return Ok(String::new());
        }
        Ok(format!("{}{PREFIX_SEPARATOR}", self.anchor(level)?))
    }

    fn check_level(&self, level: usize) -> Result<()> {
        if level == 0 || level > self.depth() {
            return Err(IndexError::LevelOutOfRange {
                level,
                depth: self.depth(),
            });
        }
        Ok(())
    }
}

impl Default for SectionCounter {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}
