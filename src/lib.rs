/*!
 * # Honyaku - browser-driven translation and Japanese reading helpers
 *
 * A Rust library that drives a web translation page through a WebDriver
 * controlled headless browser, plus helpers to show Japanese text as
 * romaji, hiragana and furigana.
 *
 * ## Features
 *
 * - One long-lived browser session reused across translations
 * - Chrome, Firefox, Safari and Edge through their WebDriver binaries
 * - Language names or codes, case-insensitive
 * - Slow renders degrade to a fixed message instead of an error
 * - Romaji / hiragana / furigana forms of Japanese text
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language_utils`: The service's language table
 * - `translation`: Translator sessions:
 *   - `translation::resolver`: Language codes and pairs
 *   - `translation::session`: Session lifecycle and the translate operation
 * - `browser`: WebDriver plumbing:
 *   - `browser::engine`: Supported engines and capabilities
 *   - `browser::client`: W3C WebDriver HTTP client
 *   - `browser::launcher`: Local driver processes
 * - `japanese`: Multi-representation Japanese strings
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the GPL-3.0 License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod browser;
pub mod errors;
pub mod japanese;
pub mod language_utils;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use browser::BrowserEngine;
pub use errors::{DriverError, InvalidLanguageError, TranslationError};
pub use japanese::{JpStr, Representation};
pub use language_utils::resolve_code;
pub use translation::{LanguageCode, LanguagePair, NOT_READY_MESSAGE, TranslationResult, TranslatorSession, get_lang};
