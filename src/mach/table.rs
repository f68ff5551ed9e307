use super::Handle;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Append-only symbol table
///
/// Maps a token string to a stable integer handle and an associated
/// value. Entries are never renamed or removed; a name's first insert
/// fixes its handle for the life of the program. Lookup is a linear
/// scan, which is fine at flight plan scale.

#[derive(Debug)]
pub struct Table<V> {
    overflow_message: &'static str,
    max_len: usize,
    names: Vec<String>,
    values: Vec<V>,
}

impl<V> Table<V> {
    pub fn new(max_len: usize, overflow_message: &'static str) -> Table<V> {
        Table {
            overflow_message,
            max_len,
            names: vec![],
            values: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn lookup(&self, name: &str) -> Option<Handle> {
        self.names.iter().position(|n| n == name)
    }

    /// Append a new entry. The capacity bound is checked first: a full
    /// table is left untouched and the caller gets a typed failure.
    pub fn insert(&mut self, name: &str, value: V) -> Result<Handle> {
        if self.names.len() >= self.max_len {
            return Err(error!(TableOverflow; self.overflow_message));
        }
        self.names.push(name.to_string());
        self.values.push(value);
        Ok(self.names.len() - 1)
    }

    pub fn get(&self, handle: Handle) -> Result<&V> {
        match self.values.get(handle) {
            Some(value) => Ok(value),
            None => Err(error!(InvalidHandle)),
        }
    }

    pub fn get_mut(&mut self, handle: Handle) -> Result<&mut V> {
        match self.values.get_mut(handle) {
            Some(value) => Ok(value),
            None => Err(error!(InvalidHandle)),
        }
    }

    pub fn name(&self, handle: Handle) -> Result<&str> {
        match self.names.get(handle) {
            Some(name) => Ok(name),
            None => Err(error!(InvalidHandle)),
        }
    }

    pub fn is_valid(&self, handle: Handle) -> bool {
        handle < self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.names
            .iter()
            .map(|n| n.as_str())
            .zip(self.values.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_stable() {
        let mut table: Table<i32> = Table::new(10, "TEST OVERFLOW");
        let a = table.insert("a", 1).unwrap();
        let b = table.insert("b", 2).unwrap();
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(table.lookup("a"), Some(a));
        assert_eq!(*table.get(b).unwrap(), 2);
        assert_eq!(table.name(a).unwrap(), "a");
    }

    #[test]
    fn test_overflow_leaves_table_unchanged() {
        let mut table: Table<i32> = Table::new(2, "TEST OVERFLOW");
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();
        let error = table.insert("c", 3).unwrap_err();
        assert_eq!(error.to_string(), "TABLE OVERFLOW; TEST OVERFLOW");
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("c"), None);
        assert_eq!(table.lookup("a"), Some(0));
        assert_eq!(table.lookup("b"), Some(1));
    }

    #[test]
    fn test_invalid_handle_is_an_error_not_a_panic() {
        let table: Table<i32> = Table::new(2, "TEST OVERFLOW");
        assert!(table.get(0).is_err());
        assert!(table.get(super::super::INVALID).is_err());
        assert!(!table.is_valid(super::super::INVALID));
    }
}
