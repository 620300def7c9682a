use crate::structured::{Entry, Formatter, Level};
use chrono::SecondsFormat;
use std::error::Error;
use std::fmt::Write as _;

/// Structured-side logfmt formatter.
///
/// Renders entries as `time="..." level=... msg="..." key=value` pairs,
/// one entry per line. Timestamps are RFC3339 at second precision. With
/// colors enabled the level is highlighted with ANSI escapes instead of
/// being emitted as a pair; tooling that consumes the output should set
/// `disable_colors`.
///
/// **Fields**
/// - `disable_colors`: emit plain key=value pairs with no ANSI escapes.
/// - `disable_timestamp`: omit the `time` pair entirely.
#[derive(Clone, Debug, Default)]
pub struct TextFormatter {
    pub disable_colors: bool,
    pub disable_timestamp: bool,
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
        let mut line = String::with_capacity(128);
        let time = entry.time.to_rfc3339_opts(SecondsFormat::Secs, true);

        if self.disable_colors {
            if !self.disable_timestamp {
                append_pair(&mut line, "time", &time);
            }
            append_pair(&mut line, "level", entry.level.as_str());
            append_pair(&mut line, "msg", &entry.message);
            for (key, value) in &entry.data {
                append_pair(&mut line, key, &value_text(value));
            }
        } else {
            let color = level_color(entry.level);
            let _ = write!(line, "\x1b[{}m{:<5}\x1b[0m", color, entry.level.as_str().to_uppercase());
            if !self.disable_timestamp {
                let _ = write!(line, "[{}]", time);
            }
            let _ = write!(line, " {}", entry.message);
            for (key, value) in &entry.data {
                let _ = write!(line, " \x1b[{}m{}\x1b[0m={}", color, key, value_text(value));
            }
        }

        line.push('\n');
        Ok(line.into_bytes())
    }
}

fn append_pair(line: &mut String, key: &str, value: &str) {
    if !line.is_empty() {
        line.push(' ');
    }
    line.push_str(key);
    line.push('=');
    if needs_quoting(value) {
        let _ = write!(line, "{:?}", value);
    } else {
        line.push_str(value);
    }
}

/// Bare logfmt values are restricted to a conservative character set;
/// anything else is rendered as a quoted, escaped string.
fn needs_quoting(text: &str) -> bool {
    text.is_empty()
        || !text
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '/'))
}

/// Render a field value without the surrounding JSON quotes for strings.
fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn level_color(level: Level) -> u8 {
    match level {
        Level::Debug => 37,
        Level::Info => 36,
        Level::Warn => 33,
        Level::Error | Level::Fatal => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn entry() -> Entry {
        let mut data = BTreeMap::new();
        data.insert("foo".to_string(), json!("bar"));
        Entry {
            logger: None,
            data,
            time: Utc.with_ymd_and_hms(2015, 8, 1, 20, 45, 30).unwrap(),
            level: Level::Debug,
            message: "some message".to_string(),
        }
    }

    #[test]
    fn plain_output_is_logfmt() {
        let formatter = TextFormatter { disable_colors: true, ..Default::default() };
        let out = formatter.format(&entry()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "time=\"2015-08-01T20:45:30Z\" level=debug msg=\"some message\" foo=bar\n"
        );
    }

    #[test]
    fn timestamp_can_be_omitted() {
        let formatter = TextFormatter { disable_colors: true, disable_timestamp: true };
        let out = formatter.format(&entry()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "level=debug msg=\"some message\" foo=bar\n"
        );
    }

    #[test]
    fn quoting_is_only_applied_when_needed() {
        let mut line = String::new();
        append_pair(&mut line, "a", "plain-value_1.0/x");
        append_pair(&mut line, "b", "has space");
        append_pair(&mut line, "c", "");
        assert_eq!(line, "a=plain-value_1.0/x b=\"has space\" c=\"\"");
    }

    #[test]
    fn colored_output_highlights_the_level() {
        let formatter = TextFormatter::default();
        let out = String::from_utf8(formatter.format(&entry()).unwrap()).unwrap();
        assert!(out.starts_with("\x1b[37mDEBUG\x1b[0m"));
        assert!(out.contains("some message"));
    }
}
