//! Script element discovery.

use super::ScriptSource;

/// Snapshot of the document's script elements.
///
/// `current` is the `src` of the currently executing script when the
/// runtime exposes it; `scripts` lists every script element's `src` in
/// document order (empty string for inline scripts).
#[derive(Debug, Clone, Default)]
pub struct ScriptTags {
    pub current: Option<String>,
    pub scripts: Vec<String>,
}

impl ScriptTags {
    pub fn new(current: Option<String>, scripts: Vec<String>) -> Self {
        Self { current, scripts }
    }
}

impl ScriptSource for ScriptTags {
    /// The executing script's `src`, else the last script with a non-empty `src`.
    fn current_script_source(&self) -> Option<String> {
        self.current
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| {
                self.scripts
                    .iter()
                    .rev()
                    .map(String::as_str)
                    .find(|s| !s.is_empty())
            })
            .map(str::to_string)
    }
}
