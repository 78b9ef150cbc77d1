//! Natural-language identification over character n-gram statistics.
//!
//! Text is classified in four stages: a script pre-filter narrows the
//! candidate set, per-language n-gram models score the candidates, the
//! raw scores are normalized into a confidence distribution, and ranked
//! views answer best / threshold / top-n queries. Models are embedded
//! frequency tables, loaded once per process and shared read-only by all
//! callers.
//!
//! ```no_run
//! use glossa::Language;
//!
//! let detected = glossa::detect_language("Hello, how are you today?")?;
//! assert_eq!(detected, Some(Language::English));
//! # Ok::<(), glossa::GlossaError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod consts;
pub mod detector;
pub mod error;
pub mod language;
pub mod model;
pub mod script;

pub use catalog::ModelCatalog;
pub use config::DetectorConfig;
pub use detector::{default_detector, Detector, DetectorBuilder, LanguageResult};
pub use error::{GlResult, GlossaError};
pub use language::Language;
pub use model::LanguageModel;
pub use script::{script_of, scripts_of, Script, ScriptSet};

/// Single best guess against the default detector.
pub fn detect_language(text: &str) -> GlResult<Option<Language>> {
    default_detector()?.detect_language(text)
}

/// Single best guess plus confidence against the default detector.
pub fn detect_language_with_confidence(text: &str) -> GlResult<Option<(Language, f64)>> {
    default_detector()?.detect_language_with_confidence(text)
}

/// Threshold query against the default detector.
pub fn detect_multiple_languages(text: &str, threshold: f64) -> GlResult<Vec<LanguageResult>> {
    default_detector()?.detect_multiple_languages(text, threshold)
}

/// Top-n query against the default detector.
pub fn detect_top_languages(text: &str, n: usize) -> GlResult<Vec<LanguageResult>> {
    default_detector()?.detect_top_languages(text, n)
}
