use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Writing systems distinguished by the pre-filter. Everything the
/// catalog languages use, plus a handful of scripts kept so that text in
/// an unclaimed script is still recognized as letter-bearing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Script {
    Latin,
    Greek,
    Cyrillic,
    Hebrew,
    Arabic,
    Devanagari,
    Thai,
    Myanmar,
    Hangul,
    Hiragana,
    Katakana,
    Han,
}

struct ScriptRange {
    lo: u32,
    hi: u32,
    script: Script,
}

const fn range(lo: u32, hi: u32, script: Script) -> ScriptRange {
    ScriptRange { lo, hi, script }
}

/// Inclusive codepoint ranges, sorted by start, derived from Unicode
/// block data. Letter blocks only: digits, punctuation, and symbols fall
/// between ranges and classify to no script.
static SCRIPT_RANGES: &[ScriptRange] = &[
    range(0x0041, 0x005A, Script::Latin),
    range(0x0061, 0x007A, Script::Latin),
    range(0x00C0, 0x00D6, Script::Latin),
    range(0x00D8, 0x00F6, Script::Latin),
    range(0x00F8, 0x024F, Script::Latin),
    range(0x0370, 0x03FF, Script::Greek),
    range(0x0400, 0x04FF, Script::Cyrillic),
    range(0x0500, 0x052F, Script::Cyrillic),
    range(0x0590, 0x05FF, Script::Hebrew),
    range(0x0600, 0x06FF, Script::Arabic),
    range(0x0900, 0x097F, Script::Devanagari),
    range(0x0E01, 0x0E3A, Script::Thai),
    range(0x0E40, 0x0E4E, Script::Thai),
    range(0x1000, 0x109F, Script::Myanmar),
    range(0x1100, 0x11FF, Script::Hangul),
    range(0x1E00, 0x1EFF, Script::Latin),
    range(0x3041, 0x3096, Script::Hiragana),
    range(0x309D, 0x309F, Script::Hiragana),
    range(0x30A1, 0x30FA, Script::Katakana),
    range(0x30FC, 0x30FF, Script::Katakana),
    range(0x3130, 0x318F, Script::Hangul),
    range(0x31F0, 0x31FF, Script::Katakana),
    range(0x3400, 0x4DBF, Script::Han),
    range(0x4E00, 0x9FFF, Script::Han),
    range(0xAC00, 0xD7AF, Script::Hangul),
    range(0xF900, 0xFAFF, Script::Han),
];

/// Classifies a single character, or None for characters carrying no
/// script signal (whitespace, digits, punctuation, unlisted blocks).
pub fn script_of(c: char) -> Option<Script> {
    let cp = c as u32;
    let idx = SCRIPT_RANGES.partition_point(|r| r.hi < cp);
    SCRIPT_RANGES
        .get(idx)
        .filter(|r| r.lo <= cp && cp <= r.hi)
        .map(|r| r.script)
}

/// Set of scripts, packed into a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptSet(u16);

impl ScriptSet {
    pub const EMPTY: ScriptSet = ScriptSet(0);

    pub fn from_scripts(scripts: &[Script]) -> Self {
        let mut set = Self::EMPTY;
        for &s in scripts {
            set.insert(s);
        }
        set
    }

    pub fn insert(&mut self, script: Script) {
        self.0 |= 1 << script as u16;
    }

    pub fn contains(&self, script: Script) -> bool {
        self.0 & (1 << script as u16) != 0
    }

    pub fn intersects(&self, other: ScriptSet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Script> + '_ {
        Script::iter().filter(|&s| self.contains(s))
    }
}

/// Accumulates the set of scripts present in a text.
pub fn scripts_of(text: &str) -> ScriptSet {
    let mut set = ScriptSet::EMPTY;
    for c in text.chars() {
        if let Some(script) = script_of(c) {
            set.insert(script);
        }
    }
    set
}
