/*!
 * Error types for the honyaku application.
 *
 * Language validation and driver failures are hard errors surfaced to the
 * caller. A translation that has not rendered in time is not an error at
 * all: see `translation::TranslationResult::NotReady`.
 */

use thiserror::Error;

/// A language name or code that is not in the language table.
///
/// Carries the input exactly as the caller supplied it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Language \"{0}\" not valid")]
pub struct InvalidLanguageError(pub String);

impl InvalidLanguageError {
    /// The rejected input, not lowercased
    pub fn input(&self) -> &str {
        &self.0
    }
}

/// Errors raised while talking to a browser driver
#[derive(Error, Debug)]
pub enum DriverError {
    /// The driver binary could not be started or never became ready
    #[error("Failed to launch browser driver: {0}")]
    LaunchFailed(String),

    /// The HTTP request to the driver failed
    #[error("Driver request failed: {0}")]
    RequestFailed(String),

    /// The driver answered with something that is not a WebDriver payload
    #[error("Failed to parse driver response: {0}")]
    ParseError(String),

    /// The driver reported a WebDriver error
    #[error("WebDriver error: {error} - {message}")]
    WebDriver {
        /// W3C error code, e.g. "invalid session id"
        error: String,
        /// Human readable message from the driver
        message: String,
    },

    /// No element matched within the implicit wait window
    #[error("No such element: {0}")]
    NoSuchElement(String),

    /// The session has already been torn down
    #[error("Browser session is closed")]
    SessionClosed,
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The requested source or target language is unknown
    #[error(transparent)]
    InvalidLanguage(#[from] InvalidLanguageError),

    /// The browser driver failed
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),
}
