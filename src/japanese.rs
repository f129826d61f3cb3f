/*!
 * Multi-representation Japanese strings.
 *
 * `JpStr` keeps a piece of text together with its romaji, hiragana and
 * furigana forms. The conversion itself sits behind the `Transliterator`
 * trait; `KakasiTransliterator` is the built-in one and reads kanji as well
 * as kana.
 */

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

/// Which form a `JpStr` displays as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    #[default]
    Romaji,
    Hiragana,
    Furigana,
}

impl FromStr for Representation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "romaji" => Ok(Self::Romaji),
            "hiragana" => Ok(Self::Hiragana),
            "furigana" => Ok(Self::Furigana),
            _ => Err(anyhow!("Invalid representation: {}", s)),
        }
    }
}

/// The three forms produced for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub romanized: String,
    pub hiragana: String,
    pub furigana: String,
}

/// Converts text into its romanized, hiragana and furigana forms.
///
/// Implementations must be deterministic and accept any input.
pub trait Transliterator: Send + Sync {
    fn enrich(&self, text: &str) -> Enrichment;
}

/// Dictionary-backed transliterator built on kakasi.
///
/// Kanji are read in context from the whole input, so the romanized and
/// hiragana forms come from a single conversion. The furigana form
/// annotates each Japanese segment as `segment[romaji]`; a kanji run keeps
/// its trailing hiragana (okurigana) in the same segment. Non-Japanese
/// text is copied through.
#[derive(Debug, Clone, Copy, Default)]
pub struct KakasiTransliterator;

impl Transliterator for KakasiTransliterator {
    fn enrich(&self, text: &str) -> Enrichment {
        let converted = kakasi::convert(text);

        let mut furigana = String::with_capacity(text.len() * 2);
        for (segment, script) in segments(text) {
            furigana.push_str(segment);
            if script != Script::Other {
                furigana.push('[');
                furigana.push_str(kakasi::convert(segment).romaji.trim());
                furigana.push(']');
            }
        }

        Enrichment {
            romanized: converted.romaji,
            hiragana: converted.hiragana,
            furigana,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Kanji,
    Hiragana,
    Katakana,
    Other,
}

fn script_of(c: char) -> Script {
    match c {
        '\u{3041}'..='\u{3096}' | '\u{309D}'..='\u{309F}' => Script::Hiragana,
        '\u{30A1}'..='\u{30FA}' | '\u{30FC}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' => Script::Katakana,
        '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}' | '\u{3005}' | '\u{3006}' => {
            Script::Kanji
        }
        _ => Script::Other,
    }
}

/// Split text into annotation segments.
///
/// Hiragana directly after kanji stays in the kanji segment.
fn segments(text: &str) -> Vec<(&str, Script)> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut current: Option<(Script, bool)> = None;

    for (index, c) in text.char_indices() {
        let script = script_of(c);
        match current {
            // okurigana
            Some((Script::Kanji, _)) if script == Script::Hiragana => {
                current = Some((Script::Kanji, true));
                continue;
            }
            Some((Script::Kanji, false)) if script == Script::Kanji => continue,
            Some((previous, _)) if previous == script && previous != Script::Kanji => continue,
            Some((previous, _)) => {
                segments.push((&text[start..index], previous));
                start = index;
            }
            None => {}
        }
        current = Some((script, false));
    }

    if let Some((script, _)) = current {
        segments.push((&text[start..], script));
    }

    segments
}

/// A string with its Japanese reading forms attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JpStr {
    original: String,
    romaji: String,
    hiragana: String,
    furigana: String,
    default: Representation,
}

impl JpStr {
    /// Enrich `text` with the built-in transliterator, displaying as romaji
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_transliterator(text, &KakasiTransliterator, Representation::Romaji)
    }

    pub fn with_transliterator(
        text: impl Into<String>,
        transliterator: &dyn Transliterator,
        default: Representation,
    ) -> Self {
        let original = text.into();
        let Enrichment {
            romanized,
            hiragana,
            furigana,
        } = transliterator.enrich(&original);

        Self {
            original,
            romaji: romanized,
            hiragana,
            furigana,
            default,
        }
    }

    /// Same as [`JpStr::new`]
    pub fn to_romaji(text: impl Into<String>) -> Self {
        Self::new(text)
    }

    pub fn to_hiragana(text: impl Into<String>) -> Self {
        Self::with_transliterator(text, &KakasiTransliterator, Representation::Hiragana)
    }

    pub fn to_furigana(text: impl Into<String>) -> Self {
        Self::with_transliterator(text, &KakasiTransliterator, Representation::Furigana)
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn romaji(&self) -> &str {
        &self.romaji
    }

    pub fn hiragana(&self) -> &str {
        &self.hiragana
    }

    pub fn furigana(&self) -> &str {
        &self.furigana
    }

    pub fn default_representation(&self) -> Representation {
        self.default
    }

    pub fn get(&self, representation: Representation) -> &str {
        match representation {
            Representation::Romaji => &self.romaji,
            Representation::Hiragana => &self.hiragana,
            Representation::Furigana => &self.furigana,
        }
    }

    /// All forms, one per line
    pub fn describe(&self) -> String {
        format!(
            "Original: {}\nRomaji: {}\nHiragana: {}\nFurigana: {}\n",
            self.original, self.romaji, self.hiragana, self.furigana
        )
    }
}

impl fmt::Display for JpStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get(self.default))
    }
}
