//! Contains the [`Handler`] trait through which the symbol table hands its
//! recoverable diagnostics (duplicate declarations, unresolved references) to
//! the caller, together with a few ready-made implementations.
//!
//! The symbol table never prints anything by itself. A front end picks a
//! handler: [`Storage`] to collect everything and report it in batch at the
//! end of a pass, [`Counter`] when only the number matters, [`Dummy`] to
//! ignore diagnostics and [`Panic`] in tests that expect none.

use std::sync::atomic::{AtomicUsize, Ordering};

use derive_more::Deref;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(test)]
mod test;

/// Represents a trait responsible for handling diagnostics produced while
/// declaring and resolving symbols.
pub trait Handler<T>: Send + Sync {
    /// Receives a diagnostic and handles it.
    fn receive(&self, diagnostic: T);
}

impl<T, H: Handler<T> + ?Sized> Handler<T> for &H {
    fn receive(&self, diagnostic: T) { (**self).receive(diagnostic); }
}

/// Is a struct that implements [`Handler`] trait by storing all diagnostics
/// in a vector, in the order they were received.
#[derive(Debug, Deref)]
pub struct Storage<T: Send + Sync> {
    diagnostics: RwLock<Vec<T>>,
}

impl<T: Send + Sync> Storage<T> {
    /// Creates a new empty [`Storage`]
    #[must_use]
    pub const fn new() -> Self { Self { diagnostics: RwLock::new(Vec::new()) } }

    /// Consumes the [`Storage`] and returns the underlying vector.
    pub fn into_vec(self) -> Vec<T> { self.diagnostics.into_inner() }

    /// Returns a reference to the underlying vector.
    pub fn as_vec(&self) -> RwLockReadGuard<Vec<T>> { self.diagnostics.read() }

    /// Returns a mutable reference to the underlying vector.
    pub fn as_vec_mut(&self) -> RwLockWriteGuard<Vec<T>> {
        self.diagnostics.write()
    }

    /// Returns the number of stored diagnostics.
    #[must_use]
    pub fn len(&self) -> usize { self.diagnostics.read().len() }

    /// Returns `true` if nothing has been received yet.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.diagnostics.read().is_empty() }

    /// Removes and returns every stored diagnostic, leaving the storage empty.
    pub fn take(&self) -> Vec<T> { std::mem::take(&mut *self.as_vec_mut()) }

    /// Moves all stored diagnostics to the given handler.
    pub fn propagate<U: From<T>, H: ?Sized + Handler<U>>(&self, handler: &H) {
        for diagnostic in self.take() {
            handler.receive(diagnostic.into());
        }
    }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, diagnostic: U) {
        self.diagnostics.write().push(diagnostic.into());
    }
}

/// Is a struct that implements [`Handler`] trait by discarding every
/// diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dummy;

impl<T> Handler<T> for Dummy {
    fn receive(&self, _: T) {}
}

/// Is a struct that implements [`Handler`] trait by counting the number of
/// diagnostics received.
#[derive(Debug, Default)]
pub struct Counter {
    counter: AtomicUsize,
}

impl Counter {
    /// Creates a new [`Counter`] starting at zero.
    #[must_use]
    pub const fn new() -> Self { Self { counter: AtomicUsize::new(0) } }

    /// Returns the number of diagnostics received.
    #[must_use]
    pub fn count(&self) -> usize { self.counter.load(Ordering::Relaxed) }

    /// Resets the counter to zero.
    pub fn reset(&self) { self.counter.store(0, Ordering::Relaxed); }
}

impl<T> Handler<T> for Counter {
    fn receive(&self, _: T) { self.counter.fetch_add(1, Ordering::Relaxed); }
}

/// Handles a diagnostic by panicking with its debug representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Panic;

impl<T: std::fmt::Debug> Handler<T> for Panic {
    fn receive(&self, diagnostic: T) {
        panic!("unexpected diagnostic: {diagnostic:?}");
    }
}
