//! Injected attribute storage for chapter persistence
//!
//! The surrounding game framework owns real persistence; this trait is the
//! seam it plugs into. `MemoryStore` is the reference implementation used
//! in tests and tools.

use rustc_hash::FxHashMap;
use serde_json::Value;

/// Keyed attribute bag a chapter saves itself into.
pub trait AttributeStore {
    fn get(&self, key: &str) -> Option<&Value>;
    fn set(&mut self, key: &str, value: Value);
}

/// In-memory attribute store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl AttributeStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_and_get() {
        let mut store = MemoryStore::new();
        store.set("chapter_title", json!("The Binding"));
        assert_eq!(store.get("chapter_title"), Some(&json!("The Binding")));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("chapter_num", json!(1));
        store.set("chapter_num", json!(2));
        assert_eq!(store.get("chapter_num"), Some(&json!(2)));
        assert_eq!(store.len(), 1);
    }
}
