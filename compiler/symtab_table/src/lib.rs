//! A scoped symbol table for compiler front ends.
//!
//! The front end drives a [`ScopeStack`]: [`ScopeStack::enter_scope`] when a
//! block or function body begins, [`ScopeStack::declare`] for every
//! declaration, [`ScopeStack::resolve`] for every identifier use and
//! [`ScopeStack::exit_scope`] when the block ends.
//!
//! ```
//! use symtab_table::{ElementKind, ScopeStack, Type};
//!
//! let mut stack = ScopeStack::new();
//! let global = stack.enter_scope();
//! let outer = stack
//!     .declare(global, "a", Type::Int, ElementKind::Variable, 1)
//!     .unwrap();
//!
//! let block = stack.enter_scope();
//! let inner = stack
//!     .declare(block, "a", Type::Int, ElementKind::Variable, 2)
//!     .unwrap();
//! assert_eq!(stack.resolve("a"), Some(inner));
//!
//! stack.exit_scope(block).unwrap();
//! assert_eq!(stack.resolve("a"), Some(outer));
//! ```

pub mod address;
pub mod dump;
pub mod error;
pub mod limits;
pub mod scope;
pub mod symbol;

mod diagnostic;


pub use address::AddressAllocator;
pub use error::Error;
pub use limits::Limits;
pub use scope::{Scope, ScopeHandle, ScopeStack, SymbolId};
pub use symbol::{Address, ElementKind, Symbol, Type};
