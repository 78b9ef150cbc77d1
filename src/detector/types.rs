use crate::language::Language;
use serde::{Deserialize, Serialize};

/// One entry of a ranked detection result: a language and its normalized
/// confidence in [0, 1]. Within one query, entries are ordered by
/// descending confidence with catalog-order tie-break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageResult {
    pub language: Language,
    pub confidence: f64,
}

impl LanguageResult {
    pub fn into_pair(self) -> (Language, f64) {
        (self.language, self.confidence)
    }
}
