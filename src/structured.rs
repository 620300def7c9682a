use chrono::{DateTime, Utc};
use std::any::Any;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Severity levels of the structured library.
///
/// One level fewer than the facade: there is no trace level, and the
/// top of the scale is `Fatal` rather than `Alert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A log entry in the structured library's shape.
///
/// `logger` is the back-reference an entry normally carries to the logger
/// that owns it. Entries produced by the bridge live outside any such
/// logger's lifecycle, so the bridge always leaves it `None`; the type is
/// opaque because the owning library is not reproduced here.
#[derive(Clone)]
pub struct Entry {
    pub logger: Option<Arc<dyn Any + Send + Sync>>,
    pub data: BTreeMap<String, serde_json::Value>,
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("logger", &self.logger.as_ref().map(|_| "<logger>"))
            .field("data", &self.data)
            .field("time", &self.time)
            .field("level", &self.level)
            .field("message", &self.message)
            .finish()
    }
}

/// Hook capability of the structured library.
///
/// Foreign hooks implement this; the bridge adapts them to
/// [`crate::facade::Hook`] via [`crate::hook::HookAdapter`].
pub trait Hook: Send + Sync {
    /// Levels this hook wants to observe, in declaration order.
    fn levels(&self) -> Vec<Level>;

    /// Receive one entry at a declared level.
    fn fire(&self, entry: &Entry) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// Formatter capability of the structured library.
///
/// Foreign formatters implement this; the bridge adapts them to
/// [`crate::facade::Formatter`] via [`crate::formatter::FormatterAdapter`].
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>>;
}
