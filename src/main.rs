//! Rolodex - interactive contact book entry point.
//!
//! Loads the address book from disk, runs the line-oriented command
//! loop, and saves the book back on exit. Replies go to stdout, logging
//! goes to stderr.

use anyhow::Result;
use dialoguer::Input;
use rolodex::{execute, storage, AddressBook, Config, Outcome, StorageError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only, so replies stay clean on stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load the book; first launch without a file starts empty, anything
    // else failing here is a process-level error
    let mut book = match storage::load(&config.book_path, config.load_policy) {
        Ok(book) => {
            info!(
                path = %config.book_path.display(),
                contacts = book.len(),
                "address book loaded"
            );
            book
        }
        Err(StorageError::NotFound(_)) => {
            info!(
                path = %config.book_path.display(),
                "no address book file yet, starting empty"
            );
            AddressBook::new()
        }
        Err(e) => {
            error!("failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    print_banner();

    loop {
        let line: String = match Input::new().with_prompt(">").allow_empty(true).interact_text() {
            Ok(line) => line,
            Err(e) => {
                // Closed input ends the session like an exit command
                info!("input closed: {}", e);
                break;
            }
        };

        match execute(&mut book, &line) {
            Outcome::Reply(reply) => println!("{}", reply),
            Outcome::Exit(farewell) => {
                println!("{}", farewell);
                break;
            }
        }
    }

    // The only persistence trigger besides the startup load
    if let Err(e) = storage::save(&book, &config.book_path) {
        error!("failed to save address book: {}", e);
        return Err(e.into());
    }
    info!(
        path = %config.book_path.display(),
        contacts = book.len(),
        "address book saved"
    );

    Ok(())
}

fn print_banner() {
    println!("Welcome to your address book!");
    println!("Available commands:");
    println!("  hello                 - Greeting");
    println!("  add <name> <phone>    - Add a new contact");
    println!("  change <name> <phone> - Update phone number of an existing contact");
    println!("  phone <name>          - Show phone number of a contact");
    println!("  show all              - Show all contacts");
    println!("  exit                  - Save and exit");
}
