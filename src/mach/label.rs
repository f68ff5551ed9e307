use super::{Address, Handle, Table, MAX_LABELS};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Outcome of a label definition line.
#[derive(Debug, PartialEq)]
pub enum Defined {
    /// First sighting of the name.
    New(Handle),
    /// The name was branch-referenced earlier; its target is now filled.
    Resolved(Handle),
    /// The name already had a target. First definition wins.
    Duplicate(Handle),
}

/// ## Label table
///
/// Labels map a name to an instruction index. A branch may name a label
/// before its defining line has been parsed; such a forward reference is
/// entered with no target and resolved exactly once, at the definition
/// line.

#[derive(Debug)]
pub struct Labels {
    table: Table<Option<Address>>,
}

impl Labels {
    pub fn new() -> Labels {
        Labels {
            table: Table::new(MAX_LABELS, "TOO MANY LABELS"),
        }
    }

    /// Record a definition line for `name` at instruction index `target`.
    /// The name must not include the trailing `:`.
    pub fn define(&mut self, name: &str, target: Address) -> Result<Defined> {
        match self.table.lookup(name) {
            None => Ok(Defined::New(self.table.insert(name, Some(target))?)),
            Some(handle) => {
                let slot = self.table.get_mut(handle)?;
                match slot {
                    None => {
                        *slot = Some(target);
                        Ok(Defined::Resolved(handle))
                    }
                    Some(_) => Ok(Defined::Duplicate(handle)),
                }
            }
        }
    }

    /// Record a branch reference to `name`, defining it on first use
    /// with no target. Repeated references return the same handle.
    pub fn reference(&mut self, name: &str) -> Result<Handle> {
        match self.table.lookup(name) {
            Some(handle) => Ok(handle),
            None => self.table.insert(name, None),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<Handle> {
        self.table.lookup(name)
    }

    /// The resolved target, or `None` for a forward reference that never
    /// found its definition line.
    pub fn target(&self, handle: Handle) -> Result<Option<Address>> {
        Ok(*self.table.get(handle)?)
    }

    pub fn name(&self, handle: Handle) -> Result<&str> {
        self.table.name(handle)
    }

    pub fn is_valid(&self, handle: Handle) -> bool {
        self.table.is_valid(handle)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Option<Address>)> {
        self.table.iter()
    }

    /// All label names defined to point at instruction index `target`.
    pub fn names_for_target(&self, target: Address) -> Vec<&str> {
        self.table
            .iter()
            .filter(|(_, t)| **t == Some(target))
            .map(|(name, _)| name)
            .collect()
    }
}

impl Default for Labels {
    fn default() -> Labels {
        Labels::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_then_define() {
        let mut labels = Labels::new();
        let handle = labels.reference("loop").unwrap();
        assert_eq!(labels.target(handle).unwrap(), None);
        assert_eq!(labels.define("loop", 4).unwrap(), Defined::Resolved(handle));
        assert_eq!(labels.target(handle).unwrap(), Some(4));
    }

    #[test]
    fn test_duplicate_definition_keeps_first_target() {
        let mut labels = Labels::new();
        let handle = match labels.define("loop", 2).unwrap() {
            Defined::New(handle) => handle,
            defined => panic!("{:?}", defined),
        };
        assert_eq!(labels.define("loop", 9).unwrap(), Defined::Duplicate(handle));
        assert_eq!(labels.target(handle).unwrap(), Some(2));
    }

    #[test]
    fn test_handles_are_idempotent() {
        let mut labels = Labels::new();
        let handle = labels.reference("skip").unwrap();
        assert_eq!(labels.reference("skip").unwrap(), handle);
        labels.define("skip", 1).unwrap();
        assert_eq!(labels.reference("skip").unwrap(), handle);
        assert_eq!(labels.define("skip", 3).unwrap(), Defined::Duplicate(handle));
        assert_eq!(labels.reference("skip").unwrap(), handle);
    }
}
