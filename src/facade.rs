use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;

/// Severity levels of the minimal facade, ordered by increasing urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Alert,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Alert => "alert",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single log entry as produced by the facade right before dispatch.
///
/// The message is kept as raw bytes: the facade scrapes it from a writer
/// and never validates the encoding. Field values are opaque to the
/// bridge and pass through conversions unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: Vec<u8>,
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl Entry {
    /// Create an entry stamped with the current UTC time and no fields.
    pub fn new(level: Level, message: impl Into<Vec<u8>>) -> Self {
        Entry {
            time: Utc::now(),
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Hook capability of the facade.
///
/// A hook observes entries at the levels it declares and performs some
/// side effect. The facade consults `levels` when deciding whether to
/// dispatch an entry to the hook at all.
pub trait Hook: Send + Sync {
    /// Levels for which this hook should be fired.
    fn levels(&self) -> &[Level];

    /// Called once per entry matching one of the declared levels.
    ///
    /// **Returns**
    /// - `Ok(())` if the hook handled the entry.
    /// - `Err(..)` with whatever error the hook's side effect produced.
    fn fire(&self, entry: &Entry) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// Formatter capability of the facade.
///
/// Renders an entry to the byte sequence the facade writes to its output.
/// The flag accessors mirror the standard-library logger flags the facade
/// historically exposed; formatters that have no flag concept keep
/// `set_flags` as a no-op and report [`STD_FLAGS`].
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>>;

    fn set_flags(&mut self, flags: u32);

    fn flags(&self) -> u32;
}

/// Date in the local time zone: `2009/01/23`.
pub const FLAG_DATE: u32 = 1 << 0;
/// Time in the local time zone: `01:23:23`.
pub const FLAG_TIME: u32 = 1 << 1;
/// Initial flag value of the facade's historical stdlib-logger shape.
pub const STD_FLAGS: u32 = FLAG_DATE | FLAG_TIME;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_urgency() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Alert);
    }

    #[test]
    fn entry_builder_sets_fields() {
        let entry = Entry::new(Level::Info, "hello").with_field("foo", "bar");
        assert_eq!(entry.level, Level::Info);
        assert_eq!(entry.message, b"hello");
        assert_eq!(entry.fields["foo"], serde_json::json!("bar"));
    }
}
