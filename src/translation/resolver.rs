/*!
 * Language resolution for translation requests.
 *
 * Turns user supplied language names or codes into validated service codes
 * and decides which language pair a request navigates to.
 */

use std::fmt;

use crate::errors::InvalidLanguageError;
use crate::language_utils;

/// Source language used when the caller does not pick one
pub const DEFAULT_SOURCE_LANGUAGE: &str = "auto";

/// Target language used when the caller does not pick one
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// A language code understood by the translation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageCode(&'static str);

impl LanguageCode {
    /// Automatic source language detection
    pub const AUTO: LanguageCode = LanguageCode(DEFAULT_SOURCE_LANGUAGE);

    /// English
    pub const ENGLISH: LanguageCode = LanguageCode(DEFAULT_TARGET_LANGUAGE);

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Resolve a language name or code into a service code.
///
/// Pure and idempotent. The error carries `language` as given.
pub fn get_lang(language: &str) -> Result<LanguageCode, InvalidLanguageError> {
    language_utils::resolve_code(language).map(LanguageCode)
}

/// Ordered (source, target) pair for one translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: LanguageCode,
    pub target: LanguageCode,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            source: LanguageCode::AUTO,
            target: LanguageCode::ENGLISH,
        }
    }
}

impl LanguagePair {
    /// Build the pair for a request.
    ///
    /// When both arguments are exactly the defaults they are used as-is and
    /// nothing is validated. Otherwise both go through [`get_lang`], target
    /// first, and the first unknown one aborts.
    pub fn for_request(target_lang: &str, source_lang: &str) -> Result<Self, InvalidLanguageError> {
        if !Self::overrides_defaults(target_lang, source_lang) {
            return Ok(Self::default());
        }

        let target = get_lang(target_lang)?;
        let source = get_lang(source_lang)?;
        Ok(Self { source, target })
    }

    /// True if either language differs from its default
    pub fn overrides_defaults(target_lang: &str, source_lang: &str) -> bool {
        target_lang != DEFAULT_TARGET_LANGUAGE || source_lang != DEFAULT_SOURCE_LANGUAGE
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
