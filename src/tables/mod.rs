//! DXF table types and management

use crate::types::Handle;
use indexmap::IndexMap;

pub mod layer;
pub mod linetype;
pub mod textstyle;

pub use layer::Layer;
pub use linetype::{LineType, LineTypeElement};
pub use textstyle::TextStyle;

/// Base trait for all table entries
pub trait TableEntry {
    /// Get the entry's unique handle
    fn handle(&self) -> Handle;

    /// Set the entry's handle
    fn set_handle(&mut self, handle: Handle);

    /// Get the entry's name
    fn name(&self) -> &str;

    /// Check if this is a standard/default entry
    fn is_standard(&self) -> bool {
        false
    }
}

/// Generic table for storing named entries
///
/// Entry names are case-insensitive; insertion order is preserved so the
/// serialized table is deterministic.
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    entries: IndexMap<String, T>,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Table {
            entries: IndexMap::new(),
        }
    }

    /// Add an entry to the table
    pub fn add(&mut self, entry: T) -> std::result::Result<(), String> {
        let name = entry.name().to_uppercase();
        if self.entries.contains_key(&name) {
            return Err(format!("Entry '{}' already exists in table", entry.name()));
        }
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Get an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.to_uppercase())
    }

    /// Check if an entry exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_table_add_and_get() {
        let mut table = Table::new();
        table.add(Layer::new("WALLS")).unwrap();

        assert_eq!(table.len(), 1);
        assert!(table.contains("walls"));
        assert_eq!(table.get("Walls").unwrap().name, "WALLS");
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut table = Table::new();
        table.add(Layer::new("A")).unwrap();
        assert!(table.add(Layer::new("a")).is_err());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_iteration_order() {
        let mut table = Table::new();
        table.add(Layer::with_color("Z", Color::RED)).unwrap();
        table.add(Layer::with_color("A", Color::BLUE)).unwrap();

        let names: Vec<&str> = table.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A"]);
    }
}
