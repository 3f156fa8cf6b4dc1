use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::scope::EntityType;
use crate::settings::{Settings, DEFAULT_COLUMN};

/// Keeps entity types by name, so that collection accessors can find the
/// type a name like `"posts"` refers to.
pub struct Registry {
    kept: HashMap<String, Arc<dyn EntityType>>,
    default_column: String,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            kept: HashMap::new(),
            default_column: DEFAULT_COLUMN.to_string(),
        }
    }
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            kept: HashMap::new(),
            default_column: settings.default_column.clone(),
        }
    }
    /// Keeps the type under its own name, returning any type previously kept
    /// under that name.
    pub fn register(&mut self, entity: Arc<dyn EntityType>) -> Option<Arc<dyn EntityType>> {
        let name = entity.name().to_string();
        debug!(entity = %name, "registering entity type");
        self.kept.insert(name, entity)
    }
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn EntityType>> {
        self.kept.get(name).cloned()
    }
    pub fn contains(&self, name: &str) -> bool {
        self.kept.contains_key(name)
    }
    pub fn default_column(&self) -> &str {
        &self.default_column
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.kept.keys().map(String::as_str).collect();
        names.sort();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
