pub mod types;
pub mod splay;
pub mod command;

// Re-exports for convenience
pub use types::{Point, RosterError, RosterOptions, RunSummary};
pub use splay::{Iter, SplayTree};
pub use command::{parse_commands, Command, CommandReader, Roster, NOT_FOUND};
