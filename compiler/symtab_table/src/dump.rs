//! Renders the open scopes of a [`ScopeStack`] as text, for symbol-dump
//! facilities.

use std::fmt::Display;

use crate::scope::{Scope, ScopeStack};

/// A [`Display`] adapter printing every open scope, outermost first, with its
/// symbols in declaration order.
///
/// ```text
/// scope #0 (depth 0)
///   index  name              type       address  line   kind
///   0      a                 int        0        1      variable
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a> {
    stack: &'a ScopeStack,
}

impl ScopeStack {
    /// Returns a [`Display`] adapter rendering the open scopes.
    #[must_use]
    pub const fn dump(&self) -> Dump<'_> { Dump { stack: self } }
}

fn write_scope(
    f: &mut std::fmt::Formatter<'_>,
    scope: &Scope,
) -> std::fmt::Result {
    writeln!(f, "scope {}", scope.handle())?;

    if scope.is_empty() {
        return writeln!(f, "  (empty)");
    }

    writeln!(
        f,
        "  {:<6} {:<17} {:<10} {:<8} {:<6} kind",
        "index", "name", "type", "address", "line"
    )?;

    for (_, symbol) in scope.symbols() {
        writeln!(
            f,
            "  {:<6} {:<17} {:<10} {:<8} {:<6} {}",
            symbol.index(),
            symbol.name(),
            symbol.ty(),
            symbol.address(),
            symbol.line(),
            symbol.element_kind()
        )?;
    }

    Ok(())
}

impl Display for Dump<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scopes = self.stack.open_scopes();

        if scopes.is_empty() {
            return writeln!(f, "no open scope");
        }

        for scope in scopes {
            write_scope(f, scope)?;
        }

        Ok(())
    }
}
