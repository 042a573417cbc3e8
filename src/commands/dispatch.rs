//! Executes parsed commands against an [`AddressBook`].
//!
//! Every error raised while executing a single line is converted to its
//! one-line user-facing reply here, at the dispatch boundary. The
//! process never crashes from a bad command.

use crate::book::AddressBook;
use crate::commands::parser::{parse, Command};
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;

/// Reply to `hello`, and the banner greeting.
pub const GREETING: &str = "How can I help you?";

const FAREWELL: &str = "Good bye!";

/// Result of executing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Reply to print; the session continues.
    Reply(String),
    /// Farewell to print; the caller should save the book and stop.
    Exit(String),
}

/// Execute one input line, mapping every error to its reply string.
pub fn execute(book: &mut AddressBook, line: &str) -> Outcome {
    match run(book, line) {
        Ok(outcome) => outcome,
        Err(e) => Outcome::Reply(e.to_string()),
    }
}

fn run(book: &mut AddressBook, line: &str) -> CommandResult<Outcome> {
    let reply = match parse(line)? {
        Command::Hello => GREETING.to_string(),

        Command::Add { name, phone } => {
            let phone = PhoneNumber::new(phone)?;
            book.add_record(Record::new(ContactName::new(name)).with_phone(phone));
            "Contact added successfully.".to_string()
        }

        Command::Change { name, phone } => {
            // Look up before validating, so a missing contact reports
            // "not found" rather than a phone complaint
            let record = book.get_mut(&name).ok_or(CommandError::ContactNotFound)?;
            record.phone = Some(PhoneNumber::new(phone)?);
            "Phone number updated successfully.".to_string()
        }

        Command::ShowPhone { name } => {
            let record = book.get(&name).ok_or(CommandError::ContactNotFound)?;
            match &record.phone {
                Some(phone) => phone.to_string(),
                None => "No phone number on record.".to_string(),
            }
        }

        Command::ShowAll => render_all(book),

        Command::Exit => return Ok(Outcome::Exit(FAREWELL.to_string())),
    };

    Ok(Outcome::Reply(reply))
}

fn render_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found.".to_string();
    }

    book.iter()
        .map(|record| {
            let phone = record.phone.as_ref().map_or("-", PhoneNumber::as_str);
            format!("{}: {}", record.name, phone)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
