//! Runtime value representation
//!
//! The language has a single value type, the 32-bit signed integer. Addresses
//! share that representation so that a stored value can be read back as an
//! address by the dereference operator.

/// Synthetic storage address
pub type Address = i32;

/// One row of the symbol table, as seen by the memory view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    pub name: &'a str,
    pub address: Address,
    /// `None` until the slot is first written
    pub value: Option<i32>,
}

impl Binding<'_> {
    /// Check if the slot has been written
    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }
}
