//! Pure translations between the facade and structured type systems.
//!
//! The two level scales are not isomorphic (six facade levels, five
//! structured levels), so the conversions are deliberately lossy at the
//! extremes and do not round-trip there: the facade's trace and alert
//! levels both collapse to fatal, and fatal comes back as alert.

use crate::facade;
use crate::structured;

impl From<facade::Level> for structured::Level {
    fn from(level: facade::Level) -> Self {
        match level {
            facade::Level::Debug => structured::Level::Debug,
            facade::Level::Info => structured::Level::Info,
            facade::Level::Warning => structured::Level::Warn,
            facade::Level::Error => structured::Level::Error,
            facade::Level::Trace | facade::Level::Alert => structured::Level::Fatal,
        }
    }
}

impl From<structured::Level> for facade::Level {
    fn from(level: structured::Level) -> Self {
        match level {
            structured::Level::Debug => facade::Level::Debug,
            structured::Level::Info => facade::Level::Info,
            structured::Level::Warn => facade::Level::Warning,
            structured::Level::Error => facade::Level::Error,
            structured::Level::Fatal => facade::Level::Alert,
        }
    }
}

/// Convert a facade entry into the structured library's shape.
///
/// The field map is copied pair by pair into fresh storage, so mutating
/// the result never touches the source entry. The timestamp is carried
/// over verbatim and the message bytes are reinterpreted as text without
/// re-encoding (invalid UTF-8 degrades to replacement characters rather
/// than failing). The owning-logger back-reference is always left unset.
pub fn to_structured(entry: &facade::Entry) -> structured::Entry {
    let mut data = std::collections::BTreeMap::new();
    for (key, value) in &entry.fields {
        data.insert(key.clone(), value.clone());
    }

    structured::Entry {
        logger: None,
        data,
        time: entry.time,
        level: entry.level.into(),
        message: String::from_utf8_lossy(&entry.message).into_owned(),
    }
}
