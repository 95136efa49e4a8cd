//! Error type for socket URL resolution.

use thiserror::Error;

/// Failure while resolving a socket URL.
///
/// Only parsing can fail. A missing script source or missing location
/// fields fall through to defaults instead of erroring.
#[derive(Debug, Error)]
pub enum SocketUrlError {
    /// The underlying URL parser rejected the input.
    #[error("malformed URL {input:?}")]
    MalformedUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

impl SocketUrlError {
    pub(crate) fn malformed(input: &str, source: url::ParseError) -> Self {
        SocketUrlError::MalformedUrl {
            input: input.to_string(),
            source,
        }
    }
}
