// Constants for the interpreter

use crate::memory::Address;

/// First address handed out by a fresh evaluation context
pub const DEFAULT_ADDRESS_BASE: Address = 1000;

/// Largest base accepted from the command line, leaving headroom for
/// allocations before the address space wraps
pub const MAX_ADDRESS_BASE: Address = 1_000_000_000;

/// Number of transcript entries a session keeps by default
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Deepest expression tree the parser will build. Operator chains, `=` and
/// parentheses each count one level.
pub const MAX_EXPRESSION_DEPTH: usize = 256;
