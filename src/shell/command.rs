//! Line commands understood by the interactive shell.

use ps_core::RecordId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Page(u32),
    Next,
    Prev,
    Size(u32),
    Toggle(RecordId),
    SelectAll,
    /// Raw count text, validated by the session.
    Bulk(String),
    Selected,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type `help` for the list")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{command}` expects a positive whole number, got {value:?}")]
    InvalidNumber { command: &'static str, value: String },
}

pub const HELP: &str = "\
Commands:
  show                 redraw the current page
  page <n>             go to page n
  next | n             next page
  prev | p             previous page
  size <n>             records per page
  toggle <id> | t <id> select or deselect a row on this page
  all | a              select all on page (press again to undo)
  bulk <n> | b <n>     replace the selection with the first n records
  selected | s         list the selection
  help | ?             this text
  quit | q             exit";

/// Parse one input line. Blank lines redraw the page.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(Command::Show);
    };
    let rest: Vec<&str> = parts.collect();
    let arg = rest.join(" ");

    match head.to_ascii_lowercase().as_str() {
        "show" | "ls" => Ok(Command::Show),
        "page" | "go" => number("page", &arg).map(Command::Page),
        "next" | "n" => Ok(Command::Next),
        "prev" | "p" => Ok(Command::Prev),
        "size" => number("size", &arg).map(Command::Size),
        "toggle" | "t" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "toggle",
                    expected: "a record id",
                });
            }
            Ok(Command::Toggle(RecordId::from_string(arg)))
        }
        "all" | "a" => Ok(Command::SelectAll),
        // Left unvalidated so the session reports bad counts itself
        "bulk" | "b" => Ok(Command::Bulk(arg)),
        "selected" | "s" => Ok(Command::Selected),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn number(command: &'static str, arg: &str) -> Result<u32, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "a number",
        });
    }
    arg.parse().map_err(|_| CommandError::InvalidNumber {
        command,
        value: arg.to_string(),
    })
}
