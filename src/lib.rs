//! Active Time – date range lookups over persisted records.
//!
//! The crate centers on the [`range::TimeRange`]: a period with an inclusive
//! `starting` and `ending` instant (UTC), created either for a whole calendar
//! unit or between any two instants.
//! * [`range::TimeRange::year`], [`range::TimeRange::month`] and
//!   [`range::TimeRange::day`] span a whole unit, from its first instant to
//!   its last second.
//! * [`range::TimeRange::between`] spans two explicit instants.
//! * [`calendar::Year`], [`calendar::Month`] and [`calendar::Day`] wrap a
//!   range and can also be created from any instant inside the unit.
//!
//! ## Collections
//! A range answers pluralized accessor names with the records that fall within
//! it. `"posts"` is classified to the `Post` type, which is looked up in a
//! [`registry::Registry`] and asked for its records through the
//! [`scope::DateRangeScope`] capability:
//! ```
//! # use std::sync::Arc;
//! use active_time::{Day, Registry};
//! use active_time::persist::{PersistenceMode, Persistor};
//! let persistor = Persistor::new(PersistenceMode::InMemory).unwrap();
//! persistor.execute_batch("create table activity_events (id integer primary key, created_at text);").unwrap();
//! let mut registry = Registry::new();
//! registry.register(Arc::new(persistor.table("ActivityEvent").unwrap()));
//! let day = Day::of(2008, 11, 14).unwrap();
//! assert_eq!(day.description(), "on November 14, 2008");
//! assert!(day.collection(&registry, "activity_events", None).unwrap().is_empty());
//! ```
//!
//! ## Persistence
//! The [`persist::Persistor`] owns a SQLite connection and hands out
//! [`persist::Table`]s, entity types whose date range scope runs
//! `<column> between ? and ?` against their table.
//!
//! ## Configuration
//! [`settings::Settings`] carries the default timestamp column (`created_at`)
//! and the database location, read from `active_time.toml` and `ACTIVE_TIME_*`
//! environment variables.

pub mod calendar;
pub mod error;
pub mod inflect;
pub mod persist;
pub mod range;
pub mod registry;
pub mod relation;
pub mod scope;
pub mod settings;

pub use calendar::{Day, Month, Year};
pub use error::{ActiveTimeError, Result};
pub use range::{Granularity, TimeArg, TimeRange};
pub use registry::Registry;
pub use scope::{DateRangeScope, EntityType, Record};
pub use settings::Settings;
