//! Read-only records handed out by [`Board`](crate::Board).
//!
//! The board owns all mutable state; these are copies taken at the moment of
//! the query.

use crate::location::Location;
use std::fmt;

/// Handle of a box in the board's arena. Stable for the lifetime of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CrateId(pub usize);

impl fmt::Display for CrateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

/// A movable box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crate {
    id: CrateId,
    location: Location,
}

impl Crate {
    pub(crate) fn new(id: CrateId, location: Location) -> Self {
        Crate { id, location }
    }

    pub fn id(&self) -> CrateId {
        self.id
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    location: Location,
}

impl Wall {
    pub(crate) fn new(location: Location) -> Self {
        Wall { location }
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

/// A target cell. Does not block movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Storage {
    location: Location,
}

impl Storage {
    pub(crate) fn new(location: Location) -> Self {
        Storage { location }
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    location: Location,
}

impl Player {
    pub(crate) fn new(location: Location) -> Self {
        Player { location }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub(crate) fn move_to(&mut self, location: Location) {
        self.location = location;
    }
}
