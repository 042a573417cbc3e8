//! Free-text command parsing and dispatch.

pub mod dispatch;
pub mod parser;

pub use dispatch::{execute, Outcome};
pub use parser::{parse, Command};
