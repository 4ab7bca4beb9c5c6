//! Contains the main `run()` function replaying event scripts against the
//! symbol table.
//!
//! The driver plays the role of a compiler front end: every `enter`, `exit`,
//! `declare` and `resolve` line of a script becomes the matching call on a
//! [`ScopeStack`]. Semantic findings are collected and printed in batch once
//! the whole script has been replayed; a structural error stops the replay.

use std::{io::Write, path::PathBuf, process::ExitCode};

use log::{info, warn};
use symtab_diagnostic::Diagnostic;
use symtab_handler::{Handler, Storage};
use symtab_table::{
    limits::{DEFAULT_MAX_NAME_LENGTH, DEFAULT_MAX_TAG_LENGTH},
    ElementKind, Limits, ScopeStack, Type,
};

use crate::script::Command;

pub mod script;

#[cfg(test)]
mod test;

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "symtab",
    about = "Replays declaration scripts against a scoped symbol table",
    author = "Simmypeet"
)]
pub struct Arguments {
    /// The script to replay.
    pub file: PathBuf,

    /// Prints the scopes still open at the end of the script.
    #[clap(long)]
    pub dump_symbols: bool,

    /// The longest identifier accepted, in bytes.
    #[clap(long, default_value_t = DEFAULT_MAX_NAME_LENGTH)]
    pub max_name_length: usize,

    /// The longest type or element-kind tag accepted, in bytes.
    #[clap(long, default_value_t = DEFAULT_MAX_TAG_LENGTH)]
    pub max_tag_length: usize,

    /// Disables colored diagnostics.
    #[clap(long)]
    pub no_color: bool,
}

/// Options controlling a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Options {
    /// The limits enforced by the symbol table.
    pub limits: Limits,

    /// Whether to print the open scopes once the script ends.
    pub dump_symbols: bool,
}

impl From<&Arguments> for Options {
    fn from(arguments: &Arguments) -> Self {
        Self {
            limits: Limits::new(
                arguments.max_name_length,
                arguments.max_tag_length,
            ),
            dump_symbols: arguments.dump_symbols,
        }
    }
}

/// The result of replaying a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Every diagnostic produced, in the order it was produced.
    pub diagnostics: Vec<Diagnostic>,

    /// `true` if the replay stopped early because of a structural error.
    pub aborted: bool,
}

impl Outcome {
    /// Returns `true` if the replay aborted or produced an error diagnostic.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.aborted || self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

#[derive(Debug, thiserror::Error)]
enum ReplayError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Table(#[from] symtab_table::Error),
}

fn execute(
    stack: &mut ScopeStack,
    command: Command,
    line: usize,
    handler: &dyn Handler<symtab_table::Error>,
    out: &mut dyn Write,
) -> Result<(), ReplayError> {
    match command {
        Command::Enter => {
            stack.enter_scope();
        }
        Command::Exit => {
            let scope = stack.current_scope()?;
            stack.exit_scope(scope)?;
        }
        Command::Declare { name, ty, element_kind } => {
            let scope = stack.current_scope()?;
            let limits = stack.limits();

            if let Err(error) = limits
                .check_tag(&name, &ty, line)
                .and_then(|()| limits.check_tag(&name, &element_kind, line))
            {
                handler.receive(error.into());
                return Ok(());
            }

            stack.declare_or_report(
                scope,
                name,
                Type::from_tag(&ty),
                ElementKind::from_tag(&element_kind),
                line,
                handler,
            )?;
        }
        Command::Resolve { name } => {
            let Some((id, symbol)) = stack
                .resolve_or_report(&name, line, handler)
                .and_then(|id| stack.get(id).map(|symbol| (id, symbol)))
            else {
                return Ok(());
            };

            writeln!(
                out,
                "{name} -> scope {}: index {}, address {}, {} {} declared at \
                 line {}",
                id.scope(),
                symbol.index(),
                symbol.address(),
                symbol.ty(),
                symbol.element_kind(),
                symbol.line()
            )?;
        }
        Command::Dump => write!(out, "{}", stack.dump())?,
    }

    Ok(())
}

/// Replays the given script, writing resolutions and dumps to `out`.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails; problems in the script
/// itself are returned as diagnostics in the [`Outcome`].
pub fn replay(
    source: &str,
    options: Options,
    out: &mut dyn Write,
) -> std::io::Result<Outcome> {
    let storage = Storage::<Diagnostic>::new();
    let mut stack = ScopeStack::with_limits(options.limits);

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;

        let command = match script::parse_line(text, line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                storage.receive(error);
                continue;
            }
        };

        match execute(&mut stack, command, line, &storage, &mut *out) {
            Ok(()) => {}
            Err(ReplayError::Io(error)) => return Err(error),
            Err(ReplayError::Table(error)) => {
                warn!("replay aborted at line {line}: {error}");
                storage.receive(Diagnostic::from(error).with_line(line));

                return Ok(Outcome {
                    diagnostics: storage.into_vec(),
                    aborted: true,
                });
            }
        }
    }

    if options.dump_symbols {
        write!(out, "{}", stack.dump())?;
    }

    if stack.depth() != 0 {
        storage.receive(Diagnostic::warning(format!(
            "{} scope(s) left open at the end of the script",
            stack.depth()
        )));
    }

    Ok(Outcome { diagnostics: storage.into_vec(), aborted: false })
}

/// Runs the program with the given arguments.
#[must_use]
pub fn run(arguments: Arguments) -> ExitCode {
    if arguments.no_color {
        colored::control::set_override(false);
    }

    let source = match std::fs::read_to_string(&arguments.file) {
        Ok(source) => source,
        Err(error) => {
            let diagnostic = Diagnostic::error(format!(
                "{}: {error}",
                arguments.file.display()
            ));

            eprintln!("{diagnostic}");
            return ExitCode::FAILURE;
        }
    };

    info!("replaying {}", arguments.file.display());

    let stdout = std::io::stdout();
    let outcome =
        match replay(&source, Options::from(&arguments), &mut stdout.lock()) {
            Ok(outcome) => outcome,
            Err(error) => {
                let diagnostic = Diagnostic::error(format!(
                    "failed to write output: {error}"
                ));

                eprintln!("{diagnostic}");
                return ExitCode::FAILURE;
            }
        };

    for diagnostic in &outcome.diagnostics {
        eprintln!("{diagnostic}\n");
    }

    if outcome.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
