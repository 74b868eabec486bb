use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

// ============================================================================
// Keys
// ============================================================================

/// A point with integer Cartesian coordinates, used as the dictionary key.
///
/// Points order vertically first and horizontally second: a point with a
/// smaller `y` sorts before one with a larger `y`, and `x` breaks ties.  An
/// in-order walk of the tree therefore visits points row by row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

// ============================================================================
// Interpreter options
// ============================================================================

/// Options for the command interpreter.
#[derive(Clone, Debug, Default)]
pub struct RosterOptions {
    /// Echo each command and print a run summary to stderr.
    pub verbose: bool,
}

// ============================================================================
// Error type
// ============================================================================

/// Failures of the command interpreter.  The tree itself never fails: a
/// missing key is reported as `None`, not as an error.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("bad command {0}")]
    BadCommand(String),
    #[error("bad coordinate {0}")]
    BadCoordinate(String),
    #[error("incomplete command")]
    IncompleteCommand,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Summary statistics
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub num_commands: usize,
    pub num_inserts: usize,
    pub num_queries: usize,
    pub num_deletes: usize,
    pub num_prints: usize,
    pub num_not_found: usize,
}
