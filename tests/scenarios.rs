use rstest::rstest;
use sokoban::{Board, Direction, LevelError, Location, ParseError, Step};

#[test]
fn test_push_box_onto_storage() {
    let mut board = Board::from_lines(["#####", "#@$.#", "#####"]).unwrap();
    let pushed = board.box_at(Location::new(2, 1)).unwrap();

    assert!(board.move_right());

    assert_eq!(board.box_location(pushed), Some(Location::new(3, 1)));
    assert!(!board.has_box(Location::new(2, 1)));
    assert!(board.has_box(Location::new(3, 1)));
    assert_eq!(board.player().location(), Location::new(2, 1));
    assert!(board.is_solved());
    assert_eq!(board.to_text(), "#####\n# @*#\n#####\n");
}

#[test]
fn test_move_into_wall_changes_nothing() {
    let mut board = Board::from_lines(["#####", "#@$.#", "#####"]).unwrap();
    let before = board.to_text();

    assert!(!board.move_left());

    assert_eq!(board.player().location(), Location::new(1, 1));
    assert_eq!(board.to_text(), before);
    assert!(!board.is_solved());
}

#[test]
fn test_two_boxes_in_a_row_cannot_be_pushed() {
    let mut board = Board::from_lines(["#####", "#@$$#", "#####"]).unwrap();
    let before = board.clone();

    assert!(!board.move_right());
    assert_eq!(board, before);
}

#[rstest]
#[case(&["####", "#@%#", "####"], ParseError::InvalidSymbol { symbol: '%', x: 2, y: 1 })]
#[case(&[], ParseError::Empty)]
#[case(&["####", "#@@#", "####"], ParseError::PlayerCount { found: 2 })]
fn test_parser_rejects(#[case] lines: &[&str], #[case] expected: ParseError) {
    assert_eq!(Board::from_lines(lines), Err(expected));
}

#[test]
fn test_moves_in_every_direction() {
    let mut board = Board::from_lines(["#####", "#   #", "# @ #", "#   #", "#####"]).unwrap();
    let start = board.player().location();

    assert_eq!(board.step(Direction::Up), Some(Step::Walk));
    assert!(board.move_down());
    assert!(board.move_left());
    assert!(board.move_right());
    assert_eq!(board.player().location(), start);
}

#[test]
fn test_load_single_level_file() {
    let path = std::env::temp_dir().join(format!("sokoban-level-{}.txt", std::process::id()));
    std::fs::write(&path, "#####\n#+$ #\n#  *#\n#####\n").unwrap();

    let board = Board::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(board.width(), 5);
    assert_eq!(board.height(), 4);
    assert_eq!(board.box_count(), 2);
    assert_eq!(board.storage().len(), 2);
    assert!(board.has_player(Location::new(1, 1)));
    assert!(!board.is_solved());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = Board::from_file("no/such/level.txt");
    assert!(matches!(result, Err(LevelError::Io(_))));
}

#[test]
fn test_parse_error_from_file_is_reported() {
    let path = std::env::temp_dir().join(format!("sokoban-bad-{}.txt", std::process::id()));
    std::fs::write(&path, "###\n# #\n###\n").unwrap();

    let result = Board::from_file(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(LevelError::InvalidLevel(ParseError::PlayerCount { found: 0 }))
    ));
}
