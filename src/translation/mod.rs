/*!
 * Translation through a browser-driven web translation service.
 *
 * - `resolver`: language codes, language pairs and name resolution
 * - `session`: the translator session owning one browser
 */

// Re-export main types for easier usage
pub use self::resolver::{LanguageCode, LanguagePair, get_lang};
pub use self::session::{NOT_READY_MESSAGE, TranslationResult, TranslatorSession};

// Submodules
pub mod resolver;
pub mod session;
