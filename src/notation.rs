//! LURD move notation: `l u r d` for walks, `L U R D` for pushes.

use crate::board::Step;
use crate::location::Direction;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("invalid move '{symbol}' at offset {offset}")]
    InvalidMove { symbol: char, offset: usize },
}

/// Parse a move string. Case is ignored, so a recorded solution can be fed
/// back in as is; whitespace is skipped.
pub fn parse_moves(text: &str) -> Result<Vec<Direction>, NotationError> {
    text.chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(offset, symbol)| {
            Direction::from_char(symbol).ok_or(NotationError::InvalidMove { symbol, offset })
        })
        .collect()
}

/// Outcome of applying a sequence of moves to a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replay {
    notation: String,
    pushes: usize,
    blocked: usize,
}

impl Replay {
    /// Tally the result of one move.
    pub fn record(&mut self, dir: Direction, step: Option<Step>) {
        match step {
            Some(step) => {
                if let Step::Push(_) = step {
                    self.pushes += 1;
                }
                self.notation.push(step.notation(dir));
            }
            None => self.blocked += 1,
        }
    }

    /// Add the moves of a later replay to this one.
    pub fn append(&mut self, other: &Replay) {
        self.notation.push_str(&other.notation);
        self.pushes += other.pushes;
        self.blocked += other.blocked;
    }

    /// LURD record of the moves that succeeded.
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// Number of moves that succeeded.
    pub fn moved(&self) -> usize {
        self.notation.len()
    }

    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn blocked(&self) -> usize {
        self.blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::CrateId;

    #[test]
    fn test_parse_moves() {
        assert_eq!(
            parse_moves("lU rD\n").unwrap(),
            vec![
                Direction::Left,
                Direction::Up,
                Direction::Right,
                Direction::Down
            ]
        );
        assert_eq!(parse_moves("").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_moves_invalid() {
        assert_eq!(
            parse_moves("ll x"),
            Err(NotationError::InvalidMove {
                symbol: 'x',
                offset: 3
            })
        );
    }

    #[test]
    fn test_record() {
        let mut replay = Replay::default();
        replay.record(Direction::Left, Some(Step::Walk));
        replay.record(Direction::Up, None);
        replay.record(Direction::Down, Some(Step::Push(CrateId(0))));

        assert_eq!(replay.notation(), "lD");
        assert_eq!(replay.moved(), 2);
        assert_eq!(replay.pushes(), 1);
        assert_eq!(replay.blocked(), 1);
    }

    #[test]
    fn test_append() {
        let mut first = Replay::default();
        first.record(Direction::Right, Some(Step::Push(CrateId(0))));
        let mut second = Replay::default();
        second.record(Direction::Up, None);
        second.record(Direction::Left, Some(Step::Walk));

        first.append(&second);
        assert_eq!(first.notation(), "Rl");
        assert_eq!(first.pushes(), 1);
        assert_eq!(first.blocked(), 1);
    }
}
