//! Parses one input line into a [`Command`].

use crate::error::{CommandError, CommandResult};

/// One parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>`
    Add { name: String, phone: String },
    /// `change <name> <phone>`
    Change { name: String, phone: String },
    /// `phone <name>`
    ShowPhone { name: String },
    /// `show all`
    ShowAll,
    /// `good bye`, `close`, or `exit`
    Exit,
}

/// Parse a free-text line into a [`Command`].
///
/// `add` and `change` take exactly a name and a phone number; `phone`
/// takes the whole remainder of the line as the name.
///
/// # Errors
///
/// `MalformedInput` when an `add`/`change` argument list is not exactly
/// two tokens (or a `phone` name is missing), `UnknownCommand` for
/// anything unrecognized.
pub fn parse(line: &str) -> CommandResult<Command> {
    let line = line.trim();

    match line {
        "hello" => return Ok(Command::Hello),
        "show all" => return Ok(Command::ShowAll),
        "good bye" | "close" | "exit" => return Ok(Command::Exit),
        // A command keyword with its arguments missing entirely
        "add" | "change" | "phone" => return Err(CommandError::MalformedInput),
        _ => {}
    }

    if let Some(rest) = line.strip_prefix("add ") {
        let (name, phone) = name_and_phone(rest)?;
        return Ok(Command::Add { name, phone });
    }
    if let Some(rest) = line.strip_prefix("change ") {
        let (name, phone) = name_and_phone(rest)?;
        return Ok(Command::Change { name, phone });
    }
    if let Some(rest) = line.strip_prefix("phone ") {
        let name = rest.trim();
        if name.is_empty() {
            return Err(CommandError::MalformedInput);
        }
        return Ok(Command::ShowPhone {
            name: name.to_string(),
        });
    }

    Err(CommandError::UnknownCommand)
}

fn name_and_phone(rest: &str) -> CommandResult<(String, String)> {
    let mut tokens = rest.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(name), Some(phone), None) => Ok((name.to_string(), phone.to_string())),
        _ => Err(CommandError::MalformedInput),
    }
}
