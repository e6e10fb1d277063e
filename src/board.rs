use log::{debug, trace};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::entity::{Crate, CrateId, Player, Storage, Wall};
use crate::error::{LevelError, ParseError};
use crate::location::{Direction, Location};
use crate::notation::Replay;
use crate::parse;

const DEMO_SIZE: usize = 11;

/// Static contents of a cell. Storage never coexists with a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Storage,
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Walk,
    Push(CrateId),
}

impl Step {
    /// LURD letter for this step: lowercase for a walk, uppercase for a push.
    pub fn notation(&self, dir: Direction) -> char {
        match self {
            Step::Walk => dir.to_char(),
            Step::Push(_) => dir.to_char().to_ascii_uppercase(),
        }
    }
}

#[derive(Debug, Clone)]
struct Crates {
    positions: Vec<Location>,
    // Maps cell index to the box standing on it
    index: Vec<Option<CrateId>>,
}

impl Crates {
    fn new(cells: usize) -> Self {
        Crates {
            positions: Vec::new(),
            index: vec![None; cells],
        }
    }

    fn add(&mut self, cell: usize, loc: Location) {
        debug_assert!(self.index[cell].is_none(), "two boxes on {}", loc);
        let id = CrateId(self.positions.len());
        self.positions.push(loc);
        self.index[cell] = Some(id);
    }

    fn move_crate(&mut self, id: CrateId, from: usize, to: usize, loc: Location) {
        debug_assert_eq!(self.index[from], Some(id));
        self.positions[id.0] = loc;
        self.index[from] = None;
        self.index[to] = Some(id);
    }

    fn at(&self, cell: usize) -> Option<CrateId> {
        self.index[cell]
    }
}

/// A Sokoban level in play.
///
/// The board owns every entity. Walls and storage are fixed once the board is
/// built; boxes and the player only move through [`Board::step`] and the
/// `move_*` wrappers around it.
///
/// Cells outside `width` x `height` (including negative coordinates) are void:
/// none of the `has_*` predicates hold there, and they are never free.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: Vec<Tile>,
    crates: Crates,
    player: Player,
    width: usize,
    height: usize,
}

impl Board {
    /// A board with no walls, boxes or storage. Used by the parser and the
    /// demo layout before entities are placed.
    pub(crate) fn empty(width: usize, height: usize, player: Location) -> Self {
        Board {
            tiles: vec![Tile::Floor; width * height],
            crates: Crates::new(width * height),
            player: Player::new(player),
            width,
            height,
        }
    }

    pub(crate) fn place_wall(&mut self, loc: Location) {
        if let Some(cell) = self.cell(loc) {
            self.tiles[cell] = Tile::Wall;
        }
    }

    pub(crate) fn place_storage(&mut self, loc: Location) {
        if let Some(cell) = self.cell(loc) {
            self.tiles[cell] = Tile::Storage;
        }
    }

    pub(crate) fn place_crate(&mut self, loc: Location) {
        if let Some(cell) = self.cell(loc) {
            self.crates.add(cell, loc);
        }
    }

    /// The fixed 11x11 demo level: a walled square with the player at
    /// (4, 5), one box at (5, 5) and one storage cell at (6, 5).
    pub fn demo() -> Self {
        let size = DEMO_SIZE as i32;
        let mut board = Board::empty(DEMO_SIZE, DEMO_SIZE, Location::new(4, 5));
        for i in 0..size {
            board.place_wall(Location::new(i, 0));
            board.place_wall(Location::new(i, size - 1));
            board.place_wall(Location::new(0, i));
            board.place_wall(Location::new(size - 1, i));
        }
        board.place_crate(Location::new(5, 5));
        board.place_storage(Location::new(6, 5));
        board
    }

    /// Parse a board from its rows, top row first.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parse::parse_lines(lines)
    }

    /// Parse a board from text, one row per line.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        parse::parse_text(text)
    }

    /// Read and parse a single-level file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let board = Self::from_text(&contents)?;
        debug!("loaded level from {}", path.as_ref().display());
        Ok(board)
    }

    /// Get the internal index of a cell, or `None` if it is outside the board.
    fn cell(&self, loc: Location) -> Option<usize> {
        let (x, y) = (usize::try_from(loc.x).ok()?, usize::try_from(loc.y).ok()?);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Index of `loc` if it is on the board and holds no wall, box or player.
    fn free_cell(&self, loc: Location) -> Option<usize> {
        let cell = self.cell(loc)?;
        let free = self.tiles[cell] != Tile::Wall
            && self.crates.at(cell).is_none()
            && self.player.location() != loc;
        free.then_some(cell)
    }

    /// Width of the longest row of the source level.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Static contents of a cell, or `None` outside the board.
    pub fn tile(&self, loc: Location) -> Option<Tile> {
        self.cell(loc).map(|cell| self.tiles[cell])
    }

    /// Snapshot of the player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Get the number of boxes.
    pub fn box_count(&self) -> usize {
        self.crates.positions.len()
    }

    /// Current location of a box, or `None` for an unknown handle.
    pub fn box_location(&self, id: CrateId) -> Option<Location> {
        self.crates.positions.get(id.0).copied()
    }

    /// Handle of the box at `loc`, if any.
    pub fn box_at(&self, loc: Location) -> Option<CrateId> {
        self.cell(loc).and_then(|cell| self.crates.at(cell))
    }

    /// Snapshot of the box at `loc`, if any.
    pub fn get_box(&self, loc: Location) -> Option<Crate> {
        self.box_at(loc).map(|id| Crate::new(id, loc))
    }

    /// All walls, in row-major order.
    pub fn walls(&self) -> Vec<Wall> {
        self.locations_of(Tile::Wall).map(Wall::new).collect()
    }

    /// All storage cells, in row-major order.
    pub fn storage(&self) -> Vec<Storage> {
        self.locations_of(Tile::Storage).map(Storage::new).collect()
    }

    /// All boxes, in handle order.
    pub fn boxes(&self) -> Vec<Crate> {
        self.crates
            .positions
            .iter()
            .enumerate()
            .map(|(i, &loc)| Crate::new(CrateId(i), loc))
            .collect()
    }

    /// Box locations in row-major order.
    fn box_locations(&self) -> Vec<Location> {
        let mut locs = self.crates.positions.clone();
        locs.sort();
        locs
    }

    fn locations_of(&self, tile: Tile) -> impl Iterator<Item = Location> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .filter(move |&(_, &t)| t == tile)
            .map(move |(i, _)| Location::new((i % width) as i32, (i / width) as i32))
    }

    /// Check if a wall stands on `loc`.
    pub fn has_wall(&self, loc: Location) -> bool {
        self.tile(loc) == Some(Tile::Wall)
    }

    /// Check if `loc` is a storage cell.
    pub fn has_storage(&self, loc: Location) -> bool {
        self.tile(loc) == Some(Tile::Storage)
    }

    /// Check if a box stands on `loc`.
    pub fn has_box(&self, loc: Location) -> bool {
        self.box_at(loc).is_some()
    }

    /// Check if the player stands on `loc`.
    pub fn has_player(&self, loc: Location) -> bool {
        self.player.location() == loc
    }

    /// `true` if `loc` holds a wall, box or player, or lies outside the board.
    /// Storage alone does not occupy a cell.
    pub fn is_occupied(&self, loc: Location) -> bool {
        self.free_cell(loc).is_none()
    }

    /// Negation of [`Board::is_occupied`].
    pub fn is_free(&self, loc: Location) -> bool {
        !self.is_occupied(loc)
    }

    /// Check if every box stands on storage. Unused storage is allowed.
    pub fn is_solved(&self) -> bool {
        self.crates
            .positions
            .iter()
            .all(|&loc| self.has_storage(loc))
    }

    /// Move the player one cell in `dir`, pushing a box if one is in the way.
    ///
    /// A push needs the cell beyond the box to be free; pushing two boxes at
    /// once is not allowed. Returns `None`, with the board untouched, when the
    /// move is blocked.
    pub fn step(&mut self, dir: Direction) -> Option<Step> {
        let from = self.player.location();
        let target = from.step(dir);

        if self.free_cell(target).is_some() {
            self.player.move_to(target);
            trace!("player {} -> {}", from, target);
            return Some(Step::Walk);
        }

        let pushed = self.cell(target).and_then(|cell| {
            let id = self.crates.at(cell)?;
            let beyond = target.step(dir);
            let to = self.free_cell(beyond)?;
            Some((id, cell, to, beyond))
        });

        match pushed {
            Some((id, cell, to, beyond)) => {
                // box first, so the player never shares its cell
                self.crates.move_crate(id, cell, to, beyond);
                self.player.move_to(target);
                trace!("player {} -> {}, pushed box {} to {}", from, target, id, beyond);
                Some(Step::Push(id))
            }
            None => {
                trace!("player at {} blocked moving {}", from, dir);
                None
            }
        }
    }

    /// Returns `true` if the player moved.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        self.step(dir).is_some()
    }

    /// See [`Board::move_player`].
    pub fn move_left(&mut self) -> bool {
        self.move_player(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_player(Direction::Right)
    }

    pub fn move_up(&mut self) -> bool {
        self.move_player(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_player(Direction::Down)
    }

    /// Apply moves in order. Blocked moves are skipped and counted.
    pub fn apply(&mut self, moves: &[Direction]) -> Replay {
        let mut replay = Replay::default();
        for &dir in moves {
            replay.record(dir, self.step(dir));
        }
        replay
    }

    /// Level-format symbol for a cell.
    pub fn symbol(&self, loc: Location) -> char {
        let storage = self.has_storage(loc);
        if self.has_player(loc) {
            if storage { '+' } else { '@' }
        } else if self.has_box(loc) {
            if storage { '*' } else { '$' }
        } else if self.has_wall(loc) {
            '#'
        } else if storage {
            '.'
        } else {
            ' '
        }
    }

    /// Render in the level text format, one row per line.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

// Two boards are equal when the player, walls, storage and boxes stand on the
// same cells. Width is left out: it comes from the last non-space symbol of the
// source text, so it can shrink when a board is written out and read back after
// the rightmost column empties. Boxes are compared by position only, ignoring
// arena order.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.player == other.player
            && self.locations_of(Tile::Wall).eq(other.locations_of(Tile::Wall))
            && self
                .locations_of(Tile::Storage)
                .eq(other.locations_of(Tile::Storage))
            && self.box_locations() == other.box_locations()
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let line: String = (0..self.width)
                .map(|x| self.symbol(Location::new(x as i32, y as i32)))
                .collect();
            // Trim trailing spaces to match original input format
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}
