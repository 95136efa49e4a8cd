//! Shared fakes for the browser capabilities.

use sockurl_core::{PageLocation, ScriptSource, UrlParts};

/// Stand-in for a page: a fixed location and an optional script `src`.
pub struct FakePage {
    pub location: UrlParts,
    pub script_src: Option<String>,
}

impl FakePage {
    pub fn new(location: &str, script_src: Option<&str>) -> Self {
        Self {
            location: UrlParts::parse(location, false).expect("valid page location"),
            script_src: script_src.map(str::to_string),
        }
    }
}

impl ScriptSource for FakePage {
    fn current_script_source(&self) -> Option<String> {
        self.script_src.clone()
    }
}

impl PageLocation for FakePage {
    fn current_location(&self) -> UrlParts {
        self.location.clone()
    }
}
