//! Contains the [`AddressAllocator`] handing out storage slots within a
//! scope's frame.

use crate::symbol::Address;

/// Hands out strictly increasing addresses within one scope's storage frame.
///
/// Every scope opened by [`crate::scope::ScopeStack::enter_scope`] gets a
/// fresh allocator starting at zero; addresses are therefore relative to the
/// frame and the caller adds its own frame offset. The allocator is dropped
/// together with its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AddressAllocator {
    next: Address,
}

impl AddressAllocator {
    /// Creates an allocator whose first address is zero.
    #[must_use]
    pub const fn new() -> Self { Self { next: 0 } }

    /// Creates an allocator whose first address is `base`.
    #[must_use]
    pub const fn starting_at(base: Address) -> Self { Self { next: base } }

    /// Returns the address the next call to [`Self::next_address`] would hand
    /// out, without consuming it.
    #[must_use]
    pub const fn peek(&self) -> Address { self.next }

    /// Returns the current counter and increments it.
    ///
    /// Returns `None` once the counter cannot be incremented anymore; the
    /// allocator is left untouched in that case so it never wraps around.
    pub fn next_address(&mut self) -> Option<Address> {
        let address = self.next;
        self.next = self.next.checked_add(1)?;

        Some(address)
    }
}
