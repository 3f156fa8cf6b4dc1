//! Collection accessors on time ranges.
//!
//! Any pluralized name can be asked of a range: `"posts"` is taken to mean
//! every `Post` whose timestamp column falls within the range, and is answered
//! by the `Post` type's [`DateRangeScope`](crate::scope::DateRangeScope):
//!
//! ```
//! # use std::sync::Arc;
//! use active_time::{Registry, TimeRange};
//! use active_time::persist::{PersistenceMode, Persistor};
//! let persistor = Persistor::new(PersistenceMode::InMemory).unwrap();
//! persistor.execute_batch(
//!     "create table posts (id integer primary key, created_at text);
//!      insert into posts (created_at) values ('2008-11-14 12:00:00');",
//! ).unwrap();
//! let mut registry = Registry::new();
//! registry.register(Arc::new(persistor.table("Post").unwrap()));
//! let november = TimeRange::month(2008, 11).unwrap();
//! assert_eq!(november.collection(&registry, "posts", None).unwrap().len(), 1);
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::{ActiveTimeError, Result};
use crate::inflect::classify;
use crate::range::TimeRange;
use crate::registry::Registry;
use crate::scope::Record;

lazy_static! {
    static ref COLLECTION_NAME: Regex = Regex::new(r"^[a-z_]+s$").unwrap();
}

/// Whether `name` looks like a pluralized collection name.
pub fn is_collection_name(name: &str) -> bool {
    COLLECTION_NAME.is_match(name)
}

impl TimeRange {
    /// True for exactly the names [`TimeRange::collection`] handles, whether
    /// or not a matching type is registered.
    pub fn responds_to(&self, name: &str) -> bool {
        is_collection_name(name)
    }

    /// All records of the type inferred from `accessor` whose timestamp
    /// column lies within this range. The column defaults to the type's own
    /// timestamp column, then to the registry's default column.
    pub fn collection(
        &self,
        registry: &Registry,
        accessor: &str,
        column: Option<&str>,
    ) -> Result<Vec<Record>> {
        if !is_collection_name(accessor) {
            return Err(ActiveTimeError::UnknownMember(accessor.to_string()));
        }
        let type_name = classify(accessor);
        let entity = registry
            .lookup(&type_name)
            .ok_or_else(|| ActiveTimeError::TypeNotFound {
                type_name: type_name.clone(),
                accessor: accessor.to_string(),
            })?;
        let scope = entity
            .date_range_scope()
            .ok_or_else(|| ActiveTimeError::CapabilityMissing {
                type_name: type_name.clone(),
            })?;
        let column = column
            .or_else(|| entity.timestamp_column())
            .unwrap_or_else(|| registry.default_column());
        debug!(accessor, entity = %type_name, column, range = %self, "collection");
        scope.in_date_range(self.starting(), self.ending(), column)
    }
}
