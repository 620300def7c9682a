use crate::structured::{Entry, Formatter};
use chrono::SecondsFormat;
use std::error::Error;

/// Structured-side JSON-lines formatter.
///
/// Each entry becomes one JSON object with the entry's fields at the top
/// level plus fixed `time`, `level` and `msg` keys. Fixed keys win when a
/// field uses the same name. `pretty` switches to indented output for
/// human consumption.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
        let mut row = serde_json::Map::with_capacity(entry.data.len() + 3);
        for (key, value) in &entry.data {
            row.insert(key.clone(), value.clone());
        }
        row.insert(
            "time".to_string(),
            entry.time.to_rfc3339_opts(SecondsFormat::Secs, true).into(),
        );
        row.insert("level".to_string(), entry.level.as_str().into());
        row.insert("msg".to_string(), entry.message.clone().into());

        let row = serde_json::Value::Object(row);
        let mut out = if self.pretty {
            serde_json::to_vec_pretty(&row)?
        } else {
            serde_json::to_vec(&row)?
        };
        out.push(b'\n');
        Ok(out)
    }
}
