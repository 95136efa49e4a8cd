pub mod config;
pub mod error;
pub mod logging;

// Resolution pipeline: source -> url_parts -> merge.
pub mod merge;
pub mod resolver;
pub mod source;
pub mod url_parts;

pub use error::SocketUrlError;
pub use merge::{merge_to_socket_url, merge_with_default_path, DEFAULT_SOCK_PATH};
pub use resolver::{create_socket_url, SocketUrlResolver};
pub use source::{resolve_source, PageLocation, ScriptSource, ScriptTags};
pub use url_parts::{SocketUrl, UrlParts};
