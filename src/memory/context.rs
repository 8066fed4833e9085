//! Symbol table with two-level addressing
//!
//! [`EvaluationContext`] maps names to addresses and addresses to values.
//! Looking up the address of a name never fails: an unknown name is given the
//! next free address on the spot. Reading a value does fail when the address
//! has never been written.

use super::value::{Address, Binding};
use crate::interpreter::constants::DEFAULT_ADDRESS_BASE;
use crate::interpreter::errors::RuntimeError;
use log::debug;
use rustc_hash::FxHashMap;

/// Name → address → value store shared by every line of a session.
///
/// Entries are only ever added. Addresses are handed out densely from `base`
/// in order of first use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationContext {
    base: Address,
    addresses: FxHashMap<String, Address>,
    /// Names in allocation order; `names[i]` owns address `base + i`
    names: Vec<String>,
    values: FxHashMap<Address, i32>,
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationContext {
    pub fn new() -> Self {
        Self::with_base(DEFAULT_ADDRESS_BASE)
    }

    /// Create a context whose first allocated address is `base`
    pub fn with_base(base: Address) -> Self {
        EvaluationContext {
            base,
            addresses: FxHashMap::default(),
            names: Vec::new(),
            values: FxHashMap::default(),
        }
    }

    /// True iff `name` has been assigned an address
    pub fn is_defined(&self, name: &str) -> bool {
        self.addresses.contains_key(name)
    }

    /// Address of `name`, allocating the next one if the name is new.
    pub fn address_of(&mut self, name: &str) -> Address {
        if let Some(&address) = self.addresses.get(name) {
            return address;
        }

        let address = self.base.wrapping_add(self.names.len() as Address);
        debug!("allocated address {} for '{}'", address, name);
        self.addresses.insert(name.to_string(), address);
        self.names.push(name.to_string());
        address
    }

    /// Value stored at `address`
    pub fn value_at(&self, address: Address) -> Result<i32, RuntimeError> {
        self.values
            .get(&address)
            .copied()
            .ok_or(RuntimeError::UndefinedValue { address })
    }

    /// Create or overwrite the value stored at `address`
    pub fn set_value(&mut self, address: Address, value: i32) {
        debug!("store {} at {}", value, address);
        self.values.insert(address, value);
    }

    pub fn base(&self) -> Address {
        self.base
    }

    /// Number of allocated names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True iff `address` was handed out to some name
    pub fn is_allocated(&self, address: Address) -> bool {
        self.name_at(address).is_some()
    }

    /// Name owning `address`, if any
    pub fn name_at(&self, address: Address) -> Option<&str> {
        let index = address.checked_sub(self.base)?;
        let index = usize::try_from(index).ok()?;
        self.names.get(index).map(String::as_str)
    }

    /// All bindings in allocation order
    pub fn bindings(&self) -> impl Iterator<Item = Binding<'_>> + '_ {
        self.names.iter().enumerate().map(move |(index, name)| {
            let address = self.base.wrapping_add(index as Address);
            Binding {
                name: name.as_str(),
                address,
                value: self.values.get(&address).copied(),
            }
        })
    }
}
