use arrayvec::ArrayVec;
use log::debug;

use crate::board::Board;
use crate::error::ParseError;
use crate::location::Location;

/// What a single level symbol puts on its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Wall,
    Player,
    Crate,
    Storage,
}

/// Decode one symbol into zero, one or two placements, or `None` if the
/// symbol is not part of the level alphabet.
///
/// Characters:
/// - `#` = Wall
/// - ` ` = Floor (empty space)
/// - `.` = Storage
/// - `$` = Box
/// - `@` = Player
/// - `*` = Box on storage
/// - `+` = Player on storage
fn placements(symbol: char) -> Option<ArrayVec<Placement, 2>> {
    let mut out = ArrayVec::new();
    match symbol {
        ' ' => {}
        '#' => out.push(Placement::Wall),
        '.' => out.push(Placement::Storage),
        '$' => out.push(Placement::Crate),
        '@' => out.push(Placement::Player),
        '*' => {
            out.push(Placement::Crate);
            out.push(Placement::Storage);
        }
        '+' => {
            out.push(Placement::Player);
            out.push(Placement::Storage);
        }
        _ => return None,
    }
    Some(out)
}

/// Parse a level from its rows, top row first.
///
/// The height is the number of rows. The width is the longest row once
/// trailing spaces are dropped; shorter rows are padded with empty cells.
pub fn parse_lines<I, S>(lines: I) -> Result<Board, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();
    if lines.is_empty() {
        return Err(ParseError::Empty);
    }

    let height = lines.len();
    let width = lines
        .iter()
        .map(|line| line.as_ref().trim_end_matches(' ').chars().count())
        .max()
        .unwrap_or(0);

    let mut walls = Vec::new();
    let mut crates = Vec::new();
    let mut storage = Vec::new();
    let mut players = Vec::new();

    for (y, line) in lines.iter().enumerate() {
        for (x, symbol) in line.as_ref().chars().enumerate() {
            let placed =
                placements(symbol).ok_or(ParseError::InvalidSymbol { symbol, x, y })?;
            let loc = Location::new(x as i32, y as i32);
            for placement in placed {
                match placement {
                    Placement::Wall => walls.push(loc),
                    Placement::Player => players.push(loc),
                    Placement::Crate => crates.push(loc),
                    Placement::Storage => storage.push(loc),
                }
            }
        }
    }

    let player = match players.as_slice() {
        [player] => *player,
        _ => {
            return Err(ParseError::PlayerCount {
                found: players.len(),
            });
        }
    };

    let mut board = Board::empty(width, height, player);
    for loc in walls {
        board.place_wall(loc);
    }
    for loc in storage {
        board.place_storage(loc);
    }
    for loc in crates {
        board.place_crate(loc);
    }

    debug!(
        "parsed {}x{} level with {} boxes and {} storage cells",
        width,
        height,
        board.box_count(),
        board.storage().len()
    );
    Ok(board)
}

/// Parse a level held in one string, one row per line.
pub fn parse_text(text: &str) -> Result<Board, ParseError> {
    parse_lines(text.lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_basic_board() {
        let input = "####\n\
                     # .#\n\
                     #  ###\n\
                     #*@  #\n\
                     #  $ #\n\
                     #  ###\n\
                     ####";
        let board = parse_text(input).unwrap();

        assert_eq!(board.width(), 6);
        assert_eq!(board.height(), 7);
        assert_eq!(board.player().location(), Location::new(2, 3));
        assert_eq!(board.box_count(), 2);
        assert_eq!(board.storage().len(), 2);
    }

    #[test]
    fn test_combined_symbols() {
        let board = parse_lines(["#####", "#+*.#", "#####"]).unwrap();

        let here = Location::new(1, 1);
        assert!(board.has_player(here));
        assert!(board.has_storage(here));

        let there = Location::new(2, 1);
        assert!(board.has_box(there));
        assert!(board.has_storage(there));
    }

    #[test]
    fn test_trailing_spaces_do_not_widen() {
        let board = parse_lines(["###   ", "#@#", "###"]).unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let board = parse_lines(["  ####", "###@ #", "#"]).unwrap();
        assert_eq!(board.width(), 6);
        let padded = Location::new(4, 2);
        assert!(board.is_free(padded));
        assert!(!board.has_wall(padded));
    }

    #[test]
    fn test_no_boxes_is_valid_and_solved() {
        let board = parse_lines(["###", "#@#", "###"]).unwrap();
        assert_eq!(board.box_count(), 0);
        assert!(board.is_solved());
    }

    #[test]
    fn test_unbalanced_boxes_and_storage() {
        let board = parse_lines(["######", "#@$..#", "######"]).unwrap();
        assert_eq!(board.box_count(), 1);
        assert_eq!(board.storage().len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let lines: [&str; 0] = [];
        assert_eq!(parse_lines(lines), Err(ParseError::Empty));
        assert_eq!(parse_text(""), Err(ParseError::Empty));
    }

    #[rstest]
    #[case(&["####", "#@%#", "####"], '%', 2, 1)]
    #[case(&["####", "#@ #", "##-#"], '-', 2, 2)]
    #[case(&["\t###", "#@ #", "####"], '\t', 0, 0)]
    fn test_invalid_symbol(
        #[case] lines: &[&str],
        #[case] symbol: char,
        #[case] x: usize,
        #[case] y: usize,
    ) {
        assert_eq!(
            parse_lines(lines),
            Err(ParseError::InvalidSymbol { symbol, x, y })
        );
    }

    #[rstest]
    #[case(&["####", "#  #", "####"], 0)]
    #[case(&["####", "#@@#", "####"], 2)]
    #[case(&["####", "#@+#", "####"], 2)]
    #[case(&["#####", "#+.@#", "#@  #", "#####"], 3)]
    fn test_player_count(#[case] lines: &[&str], #[case] found: usize) {
        assert_eq!(
            parse_lines(lines),
            Err(ParseError::PlayerCount { found })
        );
    }
}
