use super::{Handle, Table, MAX_VARIABLES};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Integer variable table
///
/// Variables are created by the `int` instruction at parse time and hold
/// the only state the virtual machine mutates while a program runs.

#[derive(Debug)]
pub struct Vars {
    table: Table<i32>,
}

impl Vars {
    pub fn new() -> Vars {
        Vars {
            table: Table::new(MAX_VARIABLES, "TOO MANY INTEGER VARIABLES"),
        }
    }

    /// Insert-or-get the named variable and store its initial value.
    /// A repeated `int` for the same name reuses the existing handle.
    pub fn define(&mut self, name: &str, value: i32) -> Result<Handle> {
        match self.table.lookup(name) {
            Some(handle) => {
                *self.table.get_mut(handle)? = value;
                Ok(handle)
            }
            None => self.table.insert(name, value),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<Handle> {
        self.table.lookup(name)
    }

    pub fn value(&self, handle: Handle) -> Result<i32> {
        Ok(*self.table.get(handle)?)
    }

    pub fn set_value(&mut self, handle: Handle, value: i32) -> Result<()> {
        *self.table.get_mut(handle)? = value;
        Ok(())
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

    pub fn iter(&self) -> impl Iterator<Item = (&str, &i32)> {
        self.table.iter()
    }
}

impl Default for Vars {
    fn default() -> Vars {
        Vars::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_then_update() {
        let mut vars = Vars::new();
        let x = vars.define("x", 5).unwrap();
        assert_eq!(vars.value(x).unwrap(), 5);
        vars.set_value(x, 8).unwrap();
        assert_eq!(vars.value(x).unwrap(), 8);
        assert_eq!(vars.define("x", 1).unwrap(), x);
        assert_eq!(vars.value(x).unwrap(), 1);
    }
}
