//! Input resolution: pick the URL to decompose and the page location.
//!
//! The browser globals the client would normally read (the executing
//! `<script>` element and `self.location`) are injected through the
//! [`ScriptSource`] and [`PageLocation`] traits.

mod resolve;
mod script;

pub use resolve::{resolve_source, ROOT_PATH};
pub use script::ScriptTags;

use crate::url_parts::UrlParts;

/// Reports the `src` of the script that loaded the client, if any.
pub trait ScriptSource {
    fn current_script_source(&self) -> Option<String>;
}

impl<F> ScriptSource for F
where
    F: Fn() -> Option<String>,
{
    fn current_script_source(&self) -> Option<String> {
        self()
    }
}

/// Reports the already-decomposed address of the current page.
pub trait PageLocation {
    fn current_location(&self) -> UrlParts;
}

impl PageLocation for UrlParts {
    fn current_location(&self) -> UrlParts {
        self.clone()
    }
}

impl<F> PageLocation for F
where
    F: Fn() -> UrlParts,
{
    fn current_location(&self) -> UrlParts {
        self()
    }
}
