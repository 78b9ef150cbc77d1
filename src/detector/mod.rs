pub mod confidence;
pub mod score;
pub mod types;
pub mod units;

pub use self::types::LanguageResult;

use crate::catalog::ModelCatalog;
use crate::config::DetectorConfig;
use crate::error::{GlResult, GlossaError};
use crate::language::Language;
use crate::script::scripts_of;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::{debug, warn};

static DEFAULT: OnceLock<Detector> = OnceLock::new();
static DEFAULT_INIT: Mutex<()> = Mutex::new(());

/// The detection facade. Holds the shared immutable catalog, the
/// calibration config, and the candidate language list; every call is a
/// pure computation over those, so one instance serves any number of
/// concurrent callers.
pub struct Detector {
    catalog: Arc<ModelCatalog>,
    config: DetectorConfig,
    languages: Vec<Language>,
}

pub struct DetectorBuilder {
    languages: Option<Vec<Language>>,
    config: DetectorConfig,
    catalog: Option<Arc<ModelCatalog>>,
}

impl DetectorBuilder {
    /// Restricts detection to the given languages. Duplicates are
    /// dropped; catalog order is restored.
    pub fn from_languages(languages: &[Language]) -> Self {
        let mut selected: Vec<Language> = Language::all()
            .filter(|l| languages.contains(l))
            .collect();
        selected.dedup();
        Self {
            languages: Some(selected),
            config: DetectorConfig::default(),
            catalog: None,
        }
    }

    /// Considers every language the catalog has a model for.
    pub fn all_languages() -> Self {
        Self {
            languages: None,
            config: DetectorConfig::default(),
            catalog: None,
        }
    }

    pub fn with_config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Swaps in an isolated catalog, e.g. a test fixture built from
    /// inline TSV instead of the embedded tables.
    pub fn with_catalog(mut self, catalog: Arc<ModelCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn build(self) -> GlResult<Detector> {
        self.config.validate()?;

        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => ModelCatalog::shared()?,
        };

        let languages = match self.languages {
            Some(languages) => {
                if languages.is_empty() {
                    return Err(GlossaError::Config(
                        "detector needs at least one language".to_string(),
                    ));
                }
                for &lang in &languages {
                    if catalog.model(lang).is_none() {
                        return Err(GlossaError::Config(format!(
                            "catalog has no model for {lang}"
                        )));
                    }
                }
                languages
            }
            None => {
                let languages: Vec<Language> = catalog.languages().collect();
                if languages.is_empty() {
                    return Err(GlossaError::Config("catalog is empty".to_string()));
                }
                languages
            }
        };

        for &lang in &languages {
            if let Some(model) = catalog.model(lang) {
                if self.config.unseen_logp >= model.min_logp() {
                    warn!(
                        language = %lang,
                        floor = self.config.unseen_logp,
                        observed_min = model.min_logp(),
                        "unseen floor is not below the model's observed minimum"
                    );
                }
            }
        }

        Ok(Detector {
            catalog,
            config: self.config,
            languages,
        })
    }
}

impl Detector {
    /// Detector over the embedded catalog's full language set with
    /// default calibration.
    pub fn new() -> GlResult<Self> {
        DetectorBuilder::all_languages().build()
    }

    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::all_languages()
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Single best guess, or None when the input carries no signal.
    pub fn detect_language(&self, text: &str) -> GlResult<Option<Language>> {
        Ok(self
            .detect_language_with_confidence(text)?
            .map(|(language, _)| language))
    }

    /// Single best guess plus its calibrated confidence.
    pub fn detect_language_with_confidence(
        &self,
        text: &str,
    ) -> GlResult<Option<(Language, f64)>> {
        let results = self.confidence_values(text)?;
        Ok(confidence::best_view(&results).map(LanguageResult::into_pair))
    }

    /// Every candidate at or above `threshold`, descending. An empty
    /// result signals "nothing confidently detected", not an error.
    pub fn detect_multiple_languages(
        &self,
        text: &str,
        threshold: f64,
    ) -> GlResult<Vec<LanguageResult>> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(GlossaError::InvalidInput(format!(
                "threshold {threshold} outside (0, 1]"
            )));
        }
        let results = self.confidence_values(text)?;
        Ok(confidence::threshold_view(&results, threshold))
    }

    /// The `n` highest-confidence candidates, descending; fewer when
    /// fewer scored.
    pub fn detect_top_languages(&self, text: &str, n: usize) -> GlResult<Vec<LanguageResult>> {
        if n == 0 {
            return Err(GlossaError::InvalidInput(
                "top-n requires n >= 1".to_string(),
            ));
        }
        let results = self.confidence_values(text)?;
        Ok(confidence::top_view(&results, n))
    }

    /// The full normalized distribution over scored candidates,
    /// descending. Empty iff the input has no script-bearing content.
    pub fn confidence_values(&self, text: &str) -> GlResult<Vec<LanguageResult>> {
        let char_count = text.chars().count();
        if char_count > self.config.max_text_chars {
            return Err(GlossaError::InvalidInput(format!(
                "text length {char_count} exceeds maximum {}",
                self.config.max_text_chars
            )));
        }

        let inventory = units::NgramInventory::from_text(text);
        if inventory.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self.filter_candidates(text);
        let scored = score::score_candidates(&inventory, &candidates, &self.catalog, &self.config);
        debug!(
            grams = inventory.total(),
            candidates = scored.len(),
            "scored detection query"
        );
        Ok(confidence::normalize(scored, self.config.sharpness))
    }

    /// Script pre-filter: keep languages whose writing systems intersect
    /// the scripts present in the text. No detected script, or a script
    /// set no candidate claims, falls back to the full list and lets
    /// n-gram scoring decide alone.
    fn filter_candidates(&self, text: &str) -> Vec<Language> {
        let detected = scripts_of(text);
        if detected.is_empty() {
            return self.languages.clone();
        }
        let filtered: Vec<Language> = self
            .languages
            .iter()
            .copied()
            .filter(|l| l.scripts().intersects(detected))
            .collect();
        if filtered.is_empty() {
            return self.languages.clone();
        }
        filtered
    }
}

/// The process-wide default detector over the embedded catalog, built on
/// first use behind a lock.
pub fn default_detector() -> GlResult<&'static Detector> {
    if let Some(detector) = DEFAULT.get() {
        return Ok(detector);
    }
    let _guard = DEFAULT_INIT
        .lock()
        .map_err(|_| GlossaError::ModelLoad("detector init lock poisoned".to_string()))?;
    if let Some(detector) = DEFAULT.get() {
        return Ok(detector);
    }
    let detector = Detector::new()?;
    Ok(DEFAULT.get_or_init(|| detector))
}
