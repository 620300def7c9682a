use crate::convert::to_structured;
use crate::facade;
use crate::structured;
use std::error::Error;
use std::sync::Arc;

/// Adapts a structured-library hook into the facade's hook capability.
///
/// The wrapped hook's declared levels are read once here and translated
/// element-wise into facade levels; the resulting list keeps the original
/// order and any duplicates, and never changes afterwards. Firing converts
/// the entry and delegates, so the only failures a `HookAdapter` can
/// report are the wrapped hook's own.
///
/// The adapter holds no other state, so it is safe to share across
/// threads whenever the wrapped hook is.
pub struct HookAdapter {
    hook: Arc<dyn structured::Hook>,
    levels: Vec<facade::Level>,
}

impl HookAdapter {
    /// Wrap a structured-library hook.
    ///
    /// **Parameters**
    /// - `hook`: the foreign hook to adapt. Shared ownership lets the
    ///   caller keep a handle for inspection (useful in tests).
    pub fn new(hook: Arc<dyn structured::Hook>) -> Self {
        let levels = hook.levels().into_iter().map(facade::Level::from).collect();
        HookAdapter { hook, levels }
    }
}

impl facade::Hook for HookAdapter {
    fn levels(&self) -> &[facade::Level] {
        &self.levels
    }

    fn fire(&self, entry: &facade::Entry) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.hook.fire(&to_structured(entry))
    }
}
