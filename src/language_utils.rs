/*!
 * Language table for the translation service.
 *
 * A fixed mapping from lowercase language names to the short codes the
 * service understands. Built once on first use and never mutated. Lookups
 * lowercase their input and accept either a name or a code.
 */

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::errors::InvalidLanguageError;

/// (name, code) pairs understood by the translation service
const LANGUAGES: &[(&str, &str)] = &[
    ("detect language", "auto"),
    ("afrikaans", "af"),
    ("albanian", "sq"),
    ("amharic", "am"),
    ("arabic", "ar"),
    ("armenian", "hy"),
    ("azerbaijani", "az"),
    ("basque", "eu"),
    ("belarusian", "be"),
    ("bengali", "bn"),
    ("bosnian", "bs"),
    ("bulgarian", "bg"),
    ("catalan", "ca"),
    ("cebuano", "ceb"),
    ("chichewa", "ny"),
    ("chinese (simplified)", "zh-cn"),
    ("chinese (traditional)", "zh-tw"),
    ("corsican", "co"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("english", "en"),
    ("esperanto", "eo"),
    ("estonian", "et"),
    ("filipino", "tl"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("frisian", "fy"),
    ("galician", "gl"),
    ("georgian", "ka"),
    ("german", "de"),
    ("greek", "el"),
    ("gujarati", "gu"),
    ("haitian creole", "ht"),
    ("hausa", "ha"),
    ("hawaiian", "haw"),
    ("hebrew", "iw"),
    ("hindi", "hi"),
    ("hmong", "hmn"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("igbo", "ig"),
    ("indonesian", "id"),
    ("irish", "ga"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("javanese", "jw"),
    ("kannada", "kn"),
    ("kazakh", "kk"),
    ("khmer", "km"),
    ("korean", "ko"),
    ("kurdish (kurmanji)", "ku"),
    ("kyrgyz", "ky"),
    ("lao", "lo"),
    ("latin", "la"),
    ("latvian", "lv"),
    ("lithuanian", "lt"),
    ("luxembourgish", "lb"),
    ("macedonian", "mk"),
    ("malagasy", "mg"),
    ("malay", "ms"),
    ("malayalam", "ml"),
    ("maltese", "mt"),
    ("maori", "mi"),
    ("marathi", "mr"),
    ("mongolian", "mn"),
    ("myanmar (burmese)", "my"),
    ("nepali", "ne"),
    ("norwegian", "no"),
    ("odia", "or"),
    ("pashto", "ps"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("punjabi", "pa"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("samoan", "sm"),
    ("scots gaelic", "gd"),
    ("serbian", "sr"),
    ("sesotho", "st"),
    ("shona", "sn"),
    ("sindhi", "sd"),
    ("sinhala", "si"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("somali", "so"),
    ("spanish", "es"),
    ("sundanese", "su"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tajik", "tg"),
    ("tamil", "ta"),
    ("telugu", "te"),
    ("thai", "th"),
    ("turkish", "tr"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("uyghur", "ug"),
    ("uzbek", "uz"),
    ("vietnamese", "vi"),
    ("welsh", "cy"),
    ("xhosa", "xh"),
    ("yiddish", "yi"),
    ("yoruba", "yo"),
    ("zulu", "zu"),
];

static NAME_TO_CODE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LANGUAGES.iter().copied().collect());

static KNOWN_CODES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| LANGUAGES.iter().map(|(_, code)| *code).collect());

static CODE_TO_NAME: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LANGUAGES.iter().map(|(name, code)| (*code, *name)).collect());

/// Look up the service code for a language name or code.
///
/// Names take precedence over codes; a string that is already a known
/// code maps to itself.
pub fn lookup_code(name_or_code: &str) -> Option<&'static str> {
    let lowered = name_or_code.to_lowercase();

    if let Some(code) = NAME_TO_CODE.get(lowered.as_str()) {
        return Some(*code);
    }

    KNOWN_CODES.get(lowered.as_str()).copied()
}

/// Resolve a language name or code, case-insensitively
pub fn resolve_code(name_or_code: &str) -> Result<&'static str, InvalidLanguageError> {
    lookup_code(name_or_code).ok_or_else(|| InvalidLanguageError(name_or_code.to_string()))
}

/// Check whether a string is a known code (not a name)
pub fn is_known_code(code: &str) -> bool {
    KNOWN_CODES.contains(code.to_lowercase().as_str())
}

/// Get the table's display name for a code
pub fn language_name(code: &str) -> Option<&'static str> {
    CODE_TO_NAME.get(code.to_lowercase().as_str()).copied()
}

/// All (name, code) pairs, sorted by name
pub fn supported_languages() -> Vec<(&'static str, &'static str)> {
    let mut languages = LANGUAGES.to_vec();
    languages.sort_by_key(|(name, _)| *name);
    languages
}
