use crate::script::{Script, ScriptSet};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The language catalog. Variant order is the canonical catalog order and
/// the deterministic tie-break for equal confidences.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[repr(usize)]
pub enum Language {
    Chinese,
    English,
    French,
    German,
    Indonesian,
    Italian,
    Japanese,
    Korean,
    Malay,
    Portuguese,
    Russian,
    Spanish,
    Tagalog,
    Thai,
    Vietnamese,
}

impl Language {
    /// Number of catalog entries.
    pub const COUNT: usize = 15;

    /// All catalog languages in catalog order.
    pub fn all() -> impl Iterator<Item = Language> {
        Language::iter()
    }

    /// Position in catalog order.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// ISO 639-1 tag.
    pub fn iso_code(self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Indonesian => "id",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Malay => "ms",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Tagalog => "tl",
            Language::Thai => "th",
            Language::Vietnamese => "vi",
        }
    }

    /// Writing systems this language is written in.
    pub fn scripts(self) -> ScriptSet {
        match self {
            Language::Chinese => ScriptSet::from_scripts(&[Script::Han]),
            Language::Japanese => {
                ScriptSet::from_scripts(&[Script::Hiragana, Script::Katakana, Script::Han])
            }
            Language::Korean => ScriptSet::from_scripts(&[Script::Hangul]),
            Language::Russian => ScriptSet::from_scripts(&[Script::Cyrillic]),
            Language::Thai => ScriptSet::from_scripts(&[Script::Thai]),
            _ => ScriptSet::from_scripts(&[Script::Latin]),
        }
    }
}
