use crate::convert::to_structured;
use crate::facade;
use crate::structured;
use std::error::Error;
use std::sync::Arc;

/// Adapts a structured-library formatter into the facade's formatter
/// capability.
///
/// Formatting converts the entry and delegates byte production to the
/// wrapped formatter; the result and any error come back verbatim. The
/// flag accessors exist only because the facade's formatter shape mirrors
/// the standard-library logger: the wrapped formatter has no flag
/// concept, so `set_flags` does nothing and `flags` always reports
/// [`facade::STD_FLAGS`].
pub struct FormatterAdapter {
    formatter: Arc<dyn structured::Formatter>,
}

impl FormatterAdapter {
    /// Wrap a structured-library formatter.
    pub fn new(formatter: Arc<dyn structured::Formatter>) -> Self {
        FormatterAdapter { formatter }
    }
}

impl facade::Formatter for FormatterAdapter {
    fn format(&self, entry: &facade::Entry) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
        self.formatter.format(&to_structured(entry))
    }

    fn set_flags(&mut self, _flags: u32) {}

    fn flags(&self) -> u32 {
        facade::STD_FLAGS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::Formatter as _;

    struct EchoFormatter;

    impl structured::Formatter for EchoFormatter {
        fn format(&self, entry: &structured::Entry) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
            Ok(entry.message.clone().into_bytes())
        }
    }

    #[test]
    fn flags_ignore_set_and_report_the_standard_value() {
        let mut adapter = FormatterAdapter::new(Arc::new(EchoFormatter));
        adapter.set_flags(0xdead_beef);
        assert_eq!(adapter.flags(), facade::STD_FLAGS);
    }

    #[test]
    fn format_delegates_to_the_wrapped_formatter() {
        let adapter = FormatterAdapter::new(Arc::new(EchoFormatter));
        let entry = facade::Entry::new(facade::Level::Info, "pass through");
        let out = adapter.format(&entry).unwrap();
        assert_eq!(out, b"pass through");
    }
}
