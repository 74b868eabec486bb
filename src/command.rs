//! Line-oriented command interpreter for the roster dictionary.
//!
//! Input is a stream of whitespace-separated tokens; line breaks carry no
//! meaning, so one command may span several lines.  Grammar:
//!
//!   insert <x> <y> <value>
//!   query <x> <y>
//!   delete <x> <y>
//!   debug_print

use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};

use crate::splay::SplayTree;
use crate::types::{Point, RosterError, RosterOptions, RunSummary};

pub const NOT_FOUND: &str = "not found";

/// One parsed interpreter command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Insert { key: Point, value: String },
    Query { key: Point },
    Delete { key: Point },
    DebugPrint,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Insert { key, value } => write!(f, "insert {} {} {}", key.x, key.y, value),
            Command::Query { key } => write!(f, "query {} {}", key.x, key.y),
            Command::Delete { key } => write!(f, "delete {} {}", key.x, key.y),
            Command::DebugPrint => write!(f, "debug_print"),
        }
    }
}

// ── tokenizer ────────────────────────────────────────────────────────────

/// Reads commands one at a time from a buffered source.
pub struct CommandReader<R> {
    input: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(input: R) -> Self {
        CommandReader {
            input,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Next whitespace-delimited token, pulling more lines as needed.
    fn next_token(&mut self) -> Result<Option<String>, RosterError> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Token that must be present because a command is under way.
    fn operand(&mut self) -> Result<String, RosterError> {
        self.next_token()?.ok_or(RosterError::IncompleteCommand)
    }

    fn coordinate(&mut self) -> Result<i32, RosterError> {
        let token = self.operand()?;
        token
            .parse::<i32>()
            .map_err(|_| RosterError::BadCoordinate(token))
    }

    fn point(&mut self) -> Result<Point, RosterError> {
        let x = self.coordinate()?;
        let y = self.coordinate()?;
        Ok(Point::new(x, y))
    }

    /// Parse the next command.  `Ok(None)` at a clean end of input.
    pub fn next_command(&mut self) -> Result<Option<Command>, RosterError> {
        let keyword = match self.next_token()? {
            Some(token) => token,
            None => return Ok(None),
        };
        let command = match keyword.as_str() {
            "insert" => {
                let key = self.point()?;
                let value = self.operand()?;
                Command::Insert { key, value }
            }
            "query" => Command::Query { key: self.point()? },
            "delete" => Command::Delete { key: self.point()? },
            "debug_print" => Command::DebugPrint,
            _ => return Err(RosterError::BadCommand(keyword)),
        };
        Ok(Some(command))
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = Result<Command, RosterError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_command().transpose()
    }
}

/// Parse a complete script held in memory.
pub fn parse_commands(input: &str) -> Result<Vec<Command>, RosterError> {
    CommandReader::new(input.as_bytes()).collect()
}

// ── executor ─────────────────────────────────────────────────────────────

/// A dictionary of colored points driven by interpreter commands.
#[derive(Debug, Default)]
pub struct Roster {
    tree: SplayTree<String>,
    opts: RosterOptions,
    summary: RunSummary,
}

impl Roster {
    pub fn new(opts: RosterOptions) -> Self {
        Roster {
            tree: SplayTree::new(),
            opts,
            summary: RunSummary::default(),
        }
    }

    pub fn tree(&self) -> &SplayTree<String> {
        &self.tree
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Apply one command, writing its response line (if any) to `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<(), RosterError> {
        if self.opts.verbose {
            eprintln!("  cmd: {}", command);
        }
        self.summary.num_commands += 1;
        match command {
            Command::Insert { key, value } => {
                self.summary.num_inserts += 1;
                self.tree.insert(key, value);
            }
            Command::Query { key } => {
                self.summary.num_queries += 1;
                let found = self.tree.lookup(key);
                if found.is_none() {
                    self.summary.num_not_found += 1;
                }
                writeln!(out, "query: {}", found.map_or(NOT_FOUND, String::as_str))?;
            }
            Command::Delete { key } => {
                self.summary.num_deletes += 1;
                let removed = self.tree.delete(key);
                if removed.is_none() {
                    self.summary.num_not_found += 1;
                }
                writeln!(out, "delete: {}", removed.as_deref().unwrap_or(NOT_FOUND))?;
            }
            Command::DebugPrint => {
                self.summary.num_prints += 1;
                writeln!(out, "{}", self.tree.render())?;
            }
        }
        Ok(())
    }

    /// Execute every command from `input` in order.  Stops at the first
    /// malformed command; responses to earlier commands are already
    /// written by then.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), RosterError> {
        for command in CommandReader::new(input) {
            self.execute(command?, out)?;
        }
        Ok(())
    }
}
