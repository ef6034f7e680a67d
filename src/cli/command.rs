//! Command parser: turns one input line into a store operation.
//!
//! ```text
//! add                 append a counter
//! inc <ref>           increment
//! dec <ref>           decrement
//! del <ref>           remove
//! show                print the current state
//! {"type": ...}       raw JSON action
//! ```
//!
//! `<ref>` is either a literal counter id or `@N`, the 1-based position of a
//! counter in the current state. Blank lines and `#` comments are skipped.

use thiserror::Error;

use crate::counters::{
    add_counter, decrement_counter, del_counter, increment_counter, CounterAction, CounterId,
    CountersState,
};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' requires a counter id or @position")]
    MissingArgument { command: String },

    #[error("'{command}' takes at most {expected} argument(s)")]
    UnexpectedArgument { command: String, expected: usize },

    #[error("Invalid position '{0}': expected @1, @2, ...")]
    InvalidPosition(String),

    #[error("Position @{position} out of range: {len} counter(s)")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Invalid JSON action: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Reference to a counter in a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterRef {
    /// Literal id, passed through as-is.
    Id(CounterId),
    /// 1-based position in the current state.
    Position(usize),
}

impl CounterRef {
    fn parse(raw: &str) -> Result<Self, CommandError> {
        let Some(position) = raw.strip_prefix('@') else {
            return Ok(Self::Id(raw.into()));
        };
        match position.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Self::Position(n)),
            _ => Err(CommandError::InvalidPosition(raw.to_string())),
        }
    }

    /// Resolve to a counter id against `state`.
    ///
    /// Literal ids are not checked: an unknown id makes a no-op action.
    pub fn resolve(self, state: &CountersState) -> Result<CounterId, CommandError> {
        match self {
            Self::Id(id) => Ok(id),
            Self::Position(position) => position
                .checked_sub(1)
                .and_then(|index| state.counters.get(index))
                .map(|c| c.id.clone())
                .ok_or(CommandError::PositionOutOfRange {
                    position,
                    len: state.len(),
                }),
        }
    }
}

/// A command that produces an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionCommand {
    Add,
    Increment(CounterRef),
    Decrement(CounterRef),
    Delete(CounterRef),
    Raw(CounterAction),
}

impl ActionCommand {
    pub fn resolve(self, state: &CountersState) -> Result<CounterAction, CommandError> {
        Ok(match self {
            Self::Add => add_counter(),
            Self::Increment(r) => increment_counter(r.resolve(state)?),
            Self::Decrement(r) => decrement_counter(r.resolve(state)?),
            Self::Delete(r) => del_counter(r.resolve(state)?),
            Self::Raw(action) => action,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the current state.
    Show,
    /// Dispatch an action.
    Act(ActionCommand),
}

impl Command {
    /// Parse one input line. Returns `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        if line.starts_with('{') {
            let action: CounterAction = serde_json::from_str(line)?;
            return Ok(Some(Self::Act(ActionCommand::Raw(action))));
        }

        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();
        let keyword = keyword.to_ascii_lowercase();

        let command = match keyword.as_str() {
            "add" => {
                no_args(&keyword, &args)?;
                Self::Act(ActionCommand::Add)
            }
            "show" | "state" => {
                no_args(&keyword, &args)?;
                Self::Show
            }
            "inc" | "increment" | "+" => {
                Self::Act(ActionCommand::Increment(one_ref(&keyword, &args)?))
            }
            "dec" | "decrement" | "-" => {
                Self::Act(ActionCommand::Decrement(one_ref(&keyword, &args)?))
            }
            "del" | "delete" | "rm" => Self::Act(ActionCommand::Delete(one_ref(&keyword, &args)?)),
            _ => return Err(CommandError::UnknownCommand(keyword)),
        };
        Ok(Some(command))
    }
}

fn no_args(command: &str, args: &[&str]) -> Result<(), CommandError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::UnexpectedArgument {
            command: command.to_string(),
            expected: 0,
        })
    }
}

fn one_ref(command: &str, args: &[&str]) -> Result<CounterRef, CommandError> {
    match args {
        [raw] => CounterRef::parse(raw),
        [] => Err(CommandError::MissingArgument {
            command: command.to_string(),
        }),
        _ => Err(CommandError::UnexpectedArgument {
            command: command.to_string(),
            expected: 1,
        }),
    }
}
