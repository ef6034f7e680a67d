//! Line-oriented command input for the `countstore` binary.

mod command;

pub use command::{ActionCommand, Command, CommandError, CounterRef};
