//! Line-oriented event script read from stdin.
//!
//! Each line is one command. Blank lines and `#` comments are skipped.

use std::time::Duration;

use bargroup::events::{ClickEvent, ClickKind, LeaveDetail, PointerEvent};
use thiserror::Error;

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pointer(PointerEvent),
    Click(ClickEvent),
    Refresh(i32),
    Sleep(Duration),
    /// Print the current reveal state.
    State,
    /// Append a labelled child.
    Add(String),
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid argument '{value}' for '{command}'")]
    InvalidArgument { command: &'static str, value: String },
}

/// Parse one script line. Returns `None` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "enter" => Command::Pointer(PointerEvent::Enter),
        "leave" => Command::Pointer(PointerEvent::Leave(LeaveDetail::Outside)),
        "leave-inferior" => Command::Pointer(PointerEvent::Leave(LeaveDetail::Inferior)),
        "click" => {
            let button = number::<u8>("click", rest)?;
            Command::Click(ClickEvent::new(ClickKind::from_button(button)))
        }
        "refresh" => Command::Refresh(number("refresh", rest)?),
        "sleep" => Command::Sleep(Duration::from_millis(number("sleep", rest)?)),
        "state" => Command::State,
        "add" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument("add"));
            }
            Command::Add(rest.to_string())
        }
        "quit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn number<T: std::str::FromStr>(command: &'static str, value: &str) -> Result<T, ParseError> {
    if value.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    value.parse().map_err(|_| ParseError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}
