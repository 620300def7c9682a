//! Wraps the structured-side logfmt formatter and a capturing hook for
//! use behind the facade's formatter/hook seams, then runs one entry
//! through both.

use std::io::Write;
use std::sync::Arc;

use structured_log_bridge::capture::MemoryHook;
use structured_log_bridge::facade::{self, Formatter as _, Hook as _};
use structured_log_bridge::formatter::FormatterAdapter;
use structured_log_bridge::hook::HookAdapter;
use structured_log_bridge::structured;
use structured_log_bridge::text_format::TextFormatter;

fn main() {
    let formatter = FormatterAdapter::new(Arc::new(TextFormatter {
        disable_colors: true,
        ..Default::default()
    }));

    let memory = Arc::new(MemoryHook::new(vec![
        structured::Level::Warn,
        structured::Level::Error,
        structured::Level::Fatal,
    ]));
    let hook = HookAdapter::new(memory.clone());

    let entry = facade::Entry::new(facade::Level::Warning, "disk almost full")
        .with_field("mount", "/var")
        .with_field("used_pct", 93);

    let line = formatter.format(&entry).expect("format entry");
    std::io::stdout().write_all(&line).expect("write line");

    hook.fire(&entry).expect("fire hook");
    println!(
        "hook observes facade levels {:?} and captured {} entry",
        hook.levels(),
        memory.entries().len()
    );
}
