use super::{Handle, Table, MAX_COMMANDS};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Drone command table
///
/// Stores each distinct command text, `<` `>` delimiters included.
/// Identical command strings from different source lines share one entry.

#[derive(Debug)]
pub struct Commands {
    table: Table<()>,
}

impl Commands {
    pub fn new() -> Commands {
        Commands {
            table: Table::new(MAX_COMMANDS, "TOO MANY DRONE COMMANDS"),
        }
    }

    pub fn add(&mut self, text: &str) -> Result<Handle> {
        match self.table.lookup(text) {
            Some(handle) => Ok(handle),
            None => self.table.insert(text, ()),
        }
    }

    pub fn lookup(&self, text: &str) -> Option<Handle> {
        self.table.lookup(text)
    }

    pub fn text(&self, handle: Handle) -> Result<&str> {
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

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.table.iter().map(|(text, _)| text)
    }
}

impl Default for Commands {
    fn default() -> Commands {
        Commands::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_shares_one_entry() {
        let mut commands = Commands::new();
        let a = commands.add("<land>").unwrap();
        let b = commands.add("<land>").unwrap();
        assert_eq!(a, b);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands.text(a).unwrap(), "<land>");
    }
}
