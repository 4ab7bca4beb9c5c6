//! Contains the [`ScopeStack`] and the per-scope symbol registry [`Scope`].

use std::{collections::HashMap, fmt::Display};

use getset::CopyGetters;
use log::{debug, trace, warn};
use symtab_arena::{Arena, ID};
use symtab_handler::Handler;

use crate::{
    address::AddressAllocator,
    error::{
        AddressSpaceExhausted, DuplicateSymbol, Error, InactiveScope,
        InvalidLine, InvalidName, NoActiveScope, ScopeMismatch,
        UnresolvedSymbol,
    },
    limits::Limits,
    symbol::{Address, ElementKind, Symbol, Type},
};

/// Identifies one scope opened by [`ScopeStack::enter_scope`].
///
/// Handles are never reused by the stack that created them: a scope opened
/// after another one was closed at the same depth gets a different handle, so
/// a stale handle is always detected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, CopyGetters,
)]
pub struct ScopeHandle {
    /// Gets the serial number of the scope, unique within its stack.
    #[get_copy = "pub"]
    serial: u64,

    /// Gets the nesting depth of the scope; the outermost scope has depth 0.
    #[get_copy = "pub"]
    depth: usize,
}

impl Display for ScopeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} (depth {})", self.serial, self.depth)
    }
}

/// Identifies a declared [`Symbol`]; obtained from [`ScopeStack::declare`]
/// and the lookup functions and valid while its scope is open.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, CopyGetters,
)]
pub struct SymbolId {
    /// Gets the scope that owns the symbol.
    #[get_copy = "pub"]
    scope: ScopeHandle,

    /// Gets the ID of the symbol within its scope's arena.
    #[get_copy = "pub"]
    symbol: ID<Symbol>,
}

/// A lexical scope owning the symbols declared directly in it.
///
/// Symbols are kept in declaration order; a name index gives constant-time
/// local lookups and duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters)]
pub struct Scope {
    /// Gets the handle of this scope.
    #[get_copy = "pub"]
    handle: ScopeHandle,

    symbols: Arena<Symbol>,
    names: HashMap<String, ID<Symbol>>,
    allocator: AddressAllocator,
}

impl Scope {
    fn new(handle: ScopeHandle) -> Self {
        Self {
            handle,
            symbols: Arena::new(),
            names: HashMap::new(),
            allocator: AddressAllocator::new(),
        }
    }

    /// Returns the number of symbols declared in this scope.
    #[must_use]
    pub fn len(&self) -> usize { self.symbols.len() }

    /// Returns `true` if nothing has been declared in this scope.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.symbols.is_empty() }

    /// Finds the symbol declared in this scope with the given name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ID<Symbol>> {
        self.names.get(name).copied()
    }

    /// Returns the symbol with the given ID.
    #[must_use]
    pub fn get(&self, id: ID<Symbol>) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    /// Returns the symbols of this scope in declaration order.
    pub fn symbols(
        &self,
    ) -> impl ExactSizeIterator<Item = (ID<Symbol>, &Symbol)> + '_ {
        self.symbols.iter()
    }

    /// Returns the address the next declaration in this scope would receive.
    #[must_use]
    pub const fn watermark(&self) -> Address { self.allocator.peek() }

    const fn symbol_id(&self, symbol: ID<Symbol>) -> SymbolId {
        SymbolId { scope: self.handle, symbol }
    }
}

/// The nesting of currently open lexical scopes, global at the bottom and the
/// innermost block at the top.
///
/// The parent of a scope is the scope right below it on the stack. Closing a
/// scope drops its symbols and its address allocator.
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
    next_serial: u64,
    limits: Limits,
}

impl ScopeStack {
    /// Creates an empty stack with the default [`Limits`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Creates an empty stack enforcing the given [`Limits`].
    #[must_use]
    pub const fn with_limits(limits: Limits) -> Self {
        Self { scopes: Vec::new(), next_serial: 0, limits }
    }

    /// Returns the limits enforced by this stack.
    #[must_use]
    pub const fn limits(&self) -> Limits { self.limits }

    /// Returns the number of open scopes.
    #[must_use]
    pub fn depth(&self) -> usize { self.scopes.len() }

    /// Returns `true` if the given handle refers to an open scope.
    #[must_use]
    pub fn is_open(&self, handle: ScopeHandle) -> bool {
        self.scope(handle).is_ok()
    }

    /// Returns the handles of the open scopes, innermost first.
    pub fn scopes(&self) -> impl ExactSizeIterator<Item = ScopeHandle> + '_ {
        self.scopes.iter().rev().map(Scope::handle)
    }

    /// Returns the open scope with the given handle.
    ///
    /// # Errors
    ///
    /// Returns [`InactiveScope`] if the handle does not refer to an open scope.
    pub fn scope(&self, handle: ScopeHandle) -> Result<&Scope, Error> {
        self.scopes
            .get(handle.depth)
            .filter(|scope| scope.handle == handle)
            .ok_or_else(|| InactiveScope { handle }.into())
    }

    fn scope_mut(&mut self, handle: ScopeHandle) -> Result<&mut Scope, Error> {
        self.scopes
            .get_mut(handle.depth)
            .filter(|scope| scope.handle == handle)
            .ok_or_else(|| InactiveScope { handle }.into())
    }

    /// Opens a new, empty scope nested in the current innermost one.
    pub fn enter_scope(&mut self) -> ScopeHandle {
        let handle =
            ScopeHandle { serial: self.next_serial, depth: self.scopes.len() };
        self.next_serial += 1;

        self.scopes.push(Scope::new(handle));
        debug!("entered scope {handle}");

        handle
    }

    /// Closes the innermost scope, dropping its symbols and addresses.
    ///
    /// # Errors
    ///
    /// - [`NoActiveScope`] if no scope is open.
    /// - [`ScopeMismatch`] if `handle` is not the innermost open scope; the
    ///   stack is left unchanged.
    pub fn exit_scope(&mut self, handle: ScopeHandle) -> Result<(), Error> {
        let top = self.current_scope()?;

        if top != handle {
            warn!("unbalanced scope exit: expected {top}, found {handle}");
            return Err(ScopeMismatch { expected: top, found: handle }.into());
        }

        if let Some(scope) = self.scopes.pop() {
            debug!(
                "exited scope {handle}, released {} symbol(s)",
                scope.len()
            );
        }

        Ok(())
    }

    /// Returns the innermost open scope.
    ///
    /// # Errors
    ///
    /// Returns [`NoActiveScope`] if no scope is open.
    pub fn current_scope(&self) -> Result<ScopeHandle, Error> {
        self.scopes
            .last()
            .map(Scope::handle)
            .ok_or_else(|| NoActiveScope.into())
    }

    /// Hands out a fresh address in the frame of the given scope without
    /// declaring a symbol, for example for compiler temporaries.
    ///
    /// # Errors
    ///
    /// - [`InactiveScope`] if the scope is not open.
    /// - [`AddressSpaceExhausted`] if the scope's counter is exhausted.
    pub fn next_address(
        &mut self,
        scope: ScopeHandle,
    ) -> Result<Address, Error> {
        self.scope_mut(scope)?
            .allocator
            .next_address()
            .ok_or_else(|| AddressSpaceExhausted { scope }.into())
    }

    /// Declares a new symbol in the given scope.
    ///
    /// The symbol receives the next index and the next address of the scope.
    /// Names declared in enclosing scopes are not consulted: shadowing is
    /// legal.
    ///
    /// # Errors
    ///
    /// - [`InactiveScope`] if the scope is not open.
    /// - [`InvalidLine`] if `line` is zero.
    /// - [`InvalidName`] if the name is empty or longer than the limit.
    /// - [`TagTooLong`](crate::error::TagTooLong) if an unrecognized type or
    ///   kind tag, kept verbatim in an `Other` variant, is longer than the
    ///   limit. Front ends that limit the spelling of recognized tags as well
    ///   check it with [`Limits::check_tag`] before classifying.
    /// - [`DuplicateSymbol`] if the scope already contains the name.
    /// - [`AddressSpaceExhausted`] if the scope's counter is exhausted.
    ///
    /// The scope is unchanged whenever an error is returned.
    pub fn declare(
        &mut self,
        scope: ScopeHandle,
        name: impl Into<String>,
        ty: Type,
        element_kind: ElementKind,
        line: usize,
    ) -> Result<SymbolId, Error> {
        let name = name.into();
        let limits = self.limits;
        let target = self.scope_mut(scope)?;

        if line == 0 {
            return Err(InvalidLine { name }.into());
        }

        if let Err(problem) = limits.check_name(&name) {
            return Err(InvalidName { name, line, problem }.into());
        }

        // recognized tags are stored as variants, only verbatim ones count
        for tag in [ty.custom_tag(), element_kind.custom_tag()]
            .into_iter()
            .flatten()
        {
            limits.check_tag(&name, tag, line)?;
        }

        if let Some(existing) = target.lookup(&name) {
            return Err(DuplicateSymbol {
                first_declared_at: target.symbols[existing].line(),
                existing: target.symbol_id(existing),
                name,
                scope,
                redeclared_at: line,
            }
            .into());
        }

        let address = target
            .allocator
            .next_address()
            .ok_or(AddressSpaceExhausted { scope })?;
        let index = target.symbols.len();

        trace!(
            "declared `{name}` in scope {scope}: index {index}, address \
             {address}, {ty} {element_kind}"
        );

        let id = target.symbols.insert(Symbol::new(
            index,
            name.clone(),
            ty,
            address,
            line,
            element_kind,
        ));
        target.names.insert(name, id);

        Ok(target.symbol_id(id))
    }

    /// Declares a symbol like [`Self::declare`], but hands semantic errors
    /// (duplicates, invalid names or tags) to `handler` and returns `Ok(None)`
    /// so that the caller can keep looking for further errors.
    ///
    /// # Errors
    ///
    /// Structural errors (see [`Error::is_structural`]) are returned.
    pub fn declare_or_report(
        &mut self,
        scope: ScopeHandle,
        name: impl Into<String>,
        ty: Type,
        element_kind: ElementKind,
        line: usize,
        handler: &dyn Handler<Error>,
    ) -> Result<Option<SymbolId>, Error> {
        match self.declare(scope, name, ty, element_kind, line) {
            Ok(id) => Ok(Some(id)),
            Err(error) if error.is_structural() => Err(error),
            Err(error) => {
                handler.receive(error);
                Ok(None)
            }
        }
    }

    /// Finds the symbol declared directly in the given scope with the given
    /// name. Enclosing scopes are not searched.
    ///
    /// # Errors
    ///
    /// Returns [`InactiveScope`] if the scope is not open.
    pub fn lookup_local(
        &self,
        scope: ScopeHandle,
        name: &str,
    ) -> Result<Option<SymbolId>, Error> {
        let scope = self.scope(scope)?;

        Ok(scope.lookup(name).map(|id| scope.symbol_id(id)))
    }

    /// Resolves a name from the innermost open scope outwards and returns the
    /// innermost match.
    ///
    /// An undeclared name is a normal outcome and yields `None`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<SymbolId> {
        let found = self.scopes.iter().rev().find_map(|scope| {
            scope.lookup(name).map(|id| scope.symbol_id(id))
        });

        trace!("resolved `{name}` to {found:?}");

        found
    }

    /// Resolves a name like [`Self::resolve`] and reports an
    /// [`UnresolvedSymbol`] referenced at `line` to `handler` if nothing is
    /// found.
    pub fn resolve_or_report(
        &self,
        name: &str,
        line: usize,
        handler: &dyn Handler<Error>,
    ) -> Option<SymbolId> {
        let found = self.resolve(name);

        if found.is_none() {
            handler.receive(
                UnresolvedSymbol { name: name.to_owned(), line }.into(),
            );
        }

        found
    }

    /// Returns the symbols declared directly in the given scope, in
    /// declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`InactiveScope`] if the scope is not open.
    pub fn all_in_scope(
        &self,
        scope: ScopeHandle,
    ) -> Result<impl ExactSizeIterator<Item = SymbolId> + '_, Error> {
        let scope = self.scope(scope)?;

        Ok(scope.symbols.ids().map(move |id| scope.symbol_id(id)))
    }

    /// Returns the symbol with the given ID, or `None` if its scope has been
    /// closed.
    #[must_use]
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.scope(id.scope).ok()?.get(id.symbol)
    }

    /// Returns the open scopes, outermost first.
    pub(crate) fn open_scopes(&self) -> &[Scope] { &self.scopes }
}
