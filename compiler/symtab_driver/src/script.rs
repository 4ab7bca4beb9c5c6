//! Parses the line-oriented event scripts replayed by the driver.
//!
//! Every non-blank line holds one command; `#` starts a comment. The line
//! number of a `declare` command is used as the declaration line.
//!
//! ```text
//! enter
//! declare a int var
//! resolve a
//! dump
//! exit
//! ```

use symtab_diagnostic::{Diagnostic, Report};

/// A single command of an event script.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Opens a new scope.
    Enter,

    /// Closes the innermost scope.
    Exit,

    /// Declares a symbol in the innermost scope.
    Declare {
        /// The identifier to declare.
        name: String,

        /// The type tag, as written.
        ty: String,

        /// The element-kind tag, as written.
        element_kind: String,
    },

    /// Resolves an identifier from the innermost scope outwards.
    Resolve {
        /// The identifier to resolve.
        name: String,
    },

    /// Prints the open scopes.
    Dump,
}

/// A script line that cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ScriptError {
    /// The first word is not a known command.
    #[error("unknown command `{command}` at line {line}")]
    UnknownCommand {
        /// The unknown word.
        command: String,

        /// The line of the command.
        line: usize,
    },

    /// The command has the wrong number of operands.
    #[error(
        "`{command}` at line {line} takes {expected} operand(s) but {found} \
         were given"
    )]
    WrongArity {
        /// The command.
        command: &'static str,

        /// The number of operands the command takes.
        expected: usize,

        /// The number of operands given.
        found: usize,

        /// The line of the command.
        line: usize,
    },
}

impl Report for ScriptError {
    fn report(&self) -> Diagnostic {
        match self {
            Self::UnknownCommand { command, line } => {
                Diagnostic::error(format!("unknown command `{command}`"))
                    .with_line(*line)
                    .with_help(
                        "expected one of `enter`, `exit`, `declare`, \
                         `resolve`, `dump`",
                    )
            }
            Self::WrongArity { command, expected, found, line } => {
                Diagnostic::error(format!(
                    "`{command}` takes {expected} operand(s) but {found} were \
                     given"
                ))
                .with_line(*line)
            }
        }
    }
}

impl From<ScriptError> for Diagnostic {
    fn from(error: ScriptError) -> Self { error.report() }
}

fn expect_operands(
    command: &'static str,
    operands: &[&str],
    expected: usize,
    line: usize,
) -> Result<(), ScriptError> {
    if operands.len() == expected {
        Ok(())
    } else {
        Err(ScriptError::WrongArity {
            command,
            expected,
            found: operands.len(),
            line,
        })
    }
}

/// Parses one line of a script.
///
/// Returns `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns a [`ScriptError`] if the line is not a well-formed command.
pub fn parse_line(
    text: &str,
    line: usize,
) -> Result<Option<Command>, ScriptError> {
    let text = text.split_once('#').map_or(text, |(code, _)| code);
    let mut words = text.split_whitespace();

    let Some(command) = words.next() else {
        return Ok(None);
    };
    let operands = words.collect::<Vec<_>>();

    let command = match command {
        "enter" => {
            expect_operands("enter", &operands, 0, line)?;
            Command::Enter
        }
        "exit" => {
            expect_operands("exit", &operands, 0, line)?;
            Command::Exit
        }
        "dump" => {
            expect_operands("dump", &operands, 0, line)?;
            Command::Dump
        }
        "resolve" => {
            expect_operands("resolve", &operands, 1, line)?;
            Command::Resolve { name: operands[0].to_owned() }
        }
        "declare" => {
            expect_operands("declare", &operands, 3, line)?;
            Command::Declare {
                name: operands[0].to_owned(),
                ty: operands[1].to_owned(),
                element_kind: operands[2].to_owned(),
            }
        }
        unknown => {
            return Err(ScriptError::UnknownCommand {
                command: unknown.to_owned(),
                line,
            })
        }
    };

    Ok(Some(command))
}
