//! The seams between time ranges and whatever stores the records.
//!
//! An [`EntityType`] is anything records can be looked up for. Types that can
//! filter their records by a timestamp column additionally hand out a
//! [`DateRangeScope`]; [`crate::persist::Table`] is the SQLite backed one.

use chrono::{DateTime, Utc};
pub use rusqlite::types::Value;

use crate::error::Result;

/// The `in_date_range` scope: every record whose `column` lies within
/// `[starting, ending]`, both ends inclusive.
pub trait DateRangeScope {
    fn in_date_range(
        &self,
        starting: DateTime<Utc>,
        ending: DateTime<Utc>,
        column: &str,
    ) -> Result<Vec<Record>>;
}

pub trait EntityType {
    /// The type name records are looked up by, e.g. `"ActivityEvent"`.
    fn name(&self) -> &str;
    /// Overrides the configured default timestamp column for this type.
    fn timestamp_column(&self) -> Option<&str> {
        None
    }
    fn date_range_scope(&self) -> Option<&dyn DateRangeScope> {
        None
    }
}

// ------------- Record -------------
/// One row of an entity type. Columns keep the order they were selected in.
#[derive(PartialEq, Clone, Debug)]
pub struct Record {
    entity: String,
    values: Vec<(String, Value)>,
}

impl Record {
    pub fn new(entity: &str) -> Self {
        Self {
            entity: entity.to_string(),
            values: Vec::new(),
        }
    }
    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }
    pub fn insert(&mut self, column: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.values.iter_mut().find(|(name, _)| name == column) {
            Some((_, kept)) => *kept = value,
            None => self.values.push((column.to_string(), value)),
        }
    }
    pub fn entity(&self) -> &str {
        &self.entity
    }
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
    pub fn text(&self, column: &str) -> Option<&str> {
        match self.get(column) {
            Some(Value::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }
    pub fn integer(&self, column: &str) -> Option<i64> {
        match self.get(column) {
            Some(Value::Integer(value)) => Some(*value),
            _ => None,
        }
    }
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }
}
