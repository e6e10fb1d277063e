use log::debug;
use std::fs;
use std::path::Path;

use crate::board::Board;
use crate::error::LevelError;

/// A collection of Sokoban levels in XSB format.
#[derive(Debug, Clone)]
pub struct Levels {
    levels: Vec<Board>,
}

impl Levels {
    /// Parse XSB-formatted Sokoban levels from a string.
    ///
    /// Lines starting with `;` (after leading whitespace) are comments, and
    /// like empty lines they end the level being read. Every level must parse
    /// on its own.
    pub fn from_text(contents: &str) -> Result<Self, LevelError> {
        let mut levels = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in contents.lines() {
            if line.trim_start().starts_with(';') || line.is_empty() {
                if !current.is_empty() {
                    levels.push(Board::from_lines(current.drain(..))?);
                }
                continue;
            }
            current.push(line);
        }

        // Last level may run to the end of the file
        if !current.is_empty() {
            levels.push(Board::from_lines(current)?);
        }

        debug!("read {} levels", levels.len());
        Ok(Levels { levels })
    }

    /// Parse XSB-formatted Sokoban levels from a text file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let contents = fs::read_to_string(path.as_ref())?;
        debug!("loading levels from {}", path.as_ref().display());
        Self::from_text(&contents)
    }

    /// Get the nth level (0-indexed).
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.levels.iter()
    }
}
