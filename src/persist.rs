// used for persistence
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};
use chrono::{DateTime, Utc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::{ActiveTimeError, Result};
use crate::inflect::tableize;
use crate::scope::{DateRangeScope, EntityType, Record, Value};
use crate::settings::Settings;

// how timestamps are written to and compared in the database
pub const DB_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Formats an instant the way the date range scope compares it, e.g.
/// `2008-11-14 00:00:00`.
pub fn db_format(instant: DateTime<Utc>) -> String {
    instant.format(DB_FORMAT).to_string()
}

// Table and column names are spliced into SQL, so only plain identifiers pass.
fn identifier(name: &str) -> Result<&str> {
    if IDENTIFIER.is_match(name) {
        Ok(name)
    } else {
        Err(ActiveTimeError::invalid(format!("'{name}' is not a valid identifier")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceMode {
    InMemory,
    File(String),
}

// ------------- Persistence -------------
pub struct Persistor {
    db: Arc<Mutex<Connection>>,
}
impl Persistor {
    pub fn new(mode: PersistenceMode) -> Result<Self> {
        let connection = match &mode {
            PersistenceMode::InMemory => Connection::open_in_memory()?,
            PersistenceMode::File(path) => Connection::open(path)?,
        };
        debug!(?mode, "opened database");
        Ok(Self {
            db: Arc::new(Mutex::new(connection)),
        })
    }
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        match &settings.database {
            Some(path) => Self::new(PersistenceMode::File(path.clone())),
            None => Self::new(PersistenceMode::InMemory),
        }
    }
    /// Runs schema or seed statements, separated by semicolons.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        let connection = self.db.lock().map_err(|e| ActiveTimeError::Lock(e.to_string()))?;
        connection.execute_batch(sql)?;
        Ok(())
    }
    /// An entity type named `entity` backed by its tableized table, so
    /// `"ActivityEvent"` reads from `activity_events`.
    pub fn table(&self, entity: &str) -> Result<Table> {
        let table = tableize(entity);
        identifier(&table)?;
        Ok(Table {
            name: entity.to_string(),
            table,
            timestamp_column: None,
            db: Arc::clone(&self.db),
        })
    }
}

/// A persisted entity type. Tables support the date range scope.
pub struct Table {
    name: String,
    table: String,
    timestamp_column: Option<String>,
    db: Arc<Mutex<Connection>>,
}
impl Table {
    pub fn with_timestamp_column(mut self, column: &str) -> Result<Self> {
        self.timestamp_column = Some(identifier(column)?.to_string());
        Ok(self)
    }
    pub fn table_name(&self) -> &str {
        &self.table
    }
}

impl EntityType for Table {
    fn name(&self) -> &str {
        &self.name
    }
    fn timestamp_column(&self) -> Option<&str> {
        self.timestamp_column.as_deref()
    }
    fn date_range_scope(&self) -> Option<&dyn DateRangeScope> {
        Some(self)
    }
}

impl DateRangeScope for Table {
    fn in_date_range(
        &self,
        starting: DateTime<Utc>,
        ending: DateTime<Utc>,
        column: &str,
    ) -> Result<Vec<Record>> {
        let sql = format!(
            "select * from {} where {} between ?1 and ?2",
            self.table,
            identifier(column)?
        );
        trace!(%sql, %starting, %ending, "in_date_range");
        let connection = self.db.lock().map_err(|e| ActiveTimeError::Lock(e.to_string()))?;
        let mut statement = connection.prepare(&sql)?;
        let columns: Vec<String> = statement
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let rows = statement.query_map(params![db_format(starting), db_format(ending)], |row| {
            let mut record = Record::new(&self.name);
            for (i, column) in columns.iter().enumerate() {
                record.insert(column, row.get::<_, Value>(i)?);
            }
            Ok(record)
        })?;
        let records = rows.collect::<rusqlite::Result<Vec<Record>>>()?;
        debug!(entity = %self.name, column, count = records.len(), "in_date_range");
        Ok(records)
    }
}
