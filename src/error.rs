use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActiveTimeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("called {accessor} on a time range, but could not find a {type_name} type")]
    TypeNotFound { type_name: String, accessor: String },
    #[error("expected {type_name} to have a date range scope of 'in_date_range'")]
    CapabilityMissing { type_name: String },
    #[error("Unknown member: {0}")]
    UnknownMember(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Lock poisoned: {0}")]
    Lock(String),
}

pub type Result<T> = std::result::Result<T, ActiveTimeError>;

// Helper conversions
impl From<rusqlite::Error> for ActiveTimeError {
    fn from(e: rusqlite::Error) -> Self { Self::Persistence(e.to_string()) }
}

impl From<config::ConfigError> for ActiveTimeError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}

impl ActiveTimeError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
