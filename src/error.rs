use thiserror::Error;

/// Error types for library export operations.
///
/// This enum covers everything that can go wrong while talking to the library API
/// and writing the export file: missing credentials, network issues, rejected
/// tokens, unexpected status codes, malformed bodies and file system failures.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use music_library_export::{AppleMusicClient, Config, LibraryClient, LibraryError};
///
/// #[tokio::main]
/// async fn main() {
///     let config = match Config::from_env() {
///         Ok(config) => config,
///         Err(e) => {
///             eprintln!("{e}");
///             return;
///         }
///     };
///     let client = AppleMusicClient::new(Box::new(http_client::native::NativeClient::new()), config);
///
///     match client.get_library_albums_page(100, 0).await {
///         Ok(page) => println!("Fetched {} albums", page.items.len()),
///         Err(LibraryError::Auth(msg)) => eprintln!("Token rejected: {}", msg),
///         Err(LibraryError::Http(msg)) => eprintln!("Network error: {}", msg),
///         Err(e) => eprintln!("Other error: {}", e),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum LibraryError {
    /// HTTP/network related errors.
    ///
    /// This includes connection failures, timeouts, DNS errors, invalid request
    /// URLs and failures while reading a response body.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API rejected the supplied tokens.
    ///
    /// Returned for `401 Unauthorized` and `403 Forbidden` responses, which
    /// usually mean an expired developer token or a revoked user token.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Any other non-success status code.
    #[error("API request failed with status {status}: {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Failed to parse the API's response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A required credential was not present in the environment.
    #[error("Missing credential: {0} environment variable not set")]
    MissingCredential(String),

    /// File system I/O errors.
    ///
    /// This can occur while creating or writing the export file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
