// Failure taxonomy for a single upload attempt. Each variant maps to a
// distinct console report in `cli`; everything the taxonomy does not name
// falls into `Other`, including a 200 response whose body is not JSON.

use thiserror::Error;

/// Everything that can go wrong between "the user named a file" and
/// "the server said 200 with a parseable body".
#[derive(Error, Debug)]
pub enum UploadError {
    /// The local path does not exist. Raised before any network I/O.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path as the user supplied it.
        path: String,
    },

    /// The transport could not reach the server at all (connection
    /// refused, unreachable host, DNS failure).
    #[error("Cannot connect to {url}")]
    Connect {
        /// Base URL of the target service, not the full endpoint.
        url: String,
    },

    /// The server answered with a non-200 status.
    #[error("Upload failed: HTTP {status}")]
    Http {
        /// Numeric status code of the response.
        status: u16,
        /// Raw response body, not parsed.
        body: String,
    },

    /// Any other failure during the request/parse sequence.
    #[error("{0}")]
    Other(String),
}
