use crate::error::{GlResult, GlossaError};
use crate::language::Language;
use crate::model::LanguageModel;
use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::{debug, info};

/// Embedded default frequency tables, one TSV asset per catalog language.
static EMBEDDED_MODELS: [(Language, &str); Language::COUNT] = [
    (Language::Chinese, include_str!("../data/models/chinese.tsv")),
    (Language::English, include_str!("../data/models/english.tsv")),
    (Language::French, include_str!("../data/models/french.tsv")),
    (Language::German, include_str!("../data/models/german.tsv")),
    (
        Language::Indonesian,
        include_str!("../data/models/indonesian.tsv"),
    ),
    (Language::Italian, include_str!("../data/models/italian.tsv")),
    (
        Language::Japanese,
        include_str!("../data/models/japanese.tsv"),
    ),
    (Language::Korean, include_str!("../data/models/korean.tsv")),
    (Language::Malay, include_str!("../data/models/malay.tsv")),
    (
        Language::Portuguese,
        include_str!("../data/models/portuguese.tsv"),
    ),
    (Language::Russian, include_str!("../data/models/russian.tsv")),
    (Language::Spanish, include_str!("../data/models/spanish.tsv")),
    (Language::Tagalog, include_str!("../data/models/tagalog.tsv")),
    (Language::Thai, include_str!("../data/models/thai.tsv")),
    (
        Language::Vietnamese,
        include_str!("../data/models/vietnamese.tsv"),
    ),
];

static SHARED: OnceLock<Arc<ModelCatalog>> = OnceLock::new();
static SHARED_INIT: Mutex<()> = Mutex::new(());

/// Read-only collection of per-language n-gram models, indexed by catalog
/// order. Built once, shared by every concurrent detection call.
#[derive(Debug)]
pub struct ModelCatalog {
    models: Vec<Option<LanguageModel>>,
}

impl ModelCatalog {
    /// Builds the full catalog from the embedded default tables.
    pub fn from_embedded() -> GlResult<Self> {
        let mut catalog = Self::empty();
        for (lang, tsv) in EMBEDDED_MODELS.iter() {
            let model = LanguageModel::from_tsv_reader(tsv.as_bytes()).map_err(|e| {
                GlossaError::ModelLoad(format!("embedded model for {lang}: {e}"))
            })?;
            catalog.insert(*lang, model);
        }
        info!(
            languages = catalog.len(),
            grams = catalog.total_grams(),
            "catalog built from embedded tables"
        );
        Ok(catalog)
    }

    /// Loads `<language>.tsv` files (lowercase canonical names) from a
    /// directory. Missing files are load failures; the catalog must be
    /// complete for the languages it claims.
    pub fn from_dir<P: AsRef<Path>>(dir: P, languages: &[Language]) -> GlResult<Self> {
        let dir = dir.as_ref();
        let mut catalog = Self::empty();
        for &lang in languages {
            let path = dir.join(format!("{}.tsv", lang.to_string().to_lowercase()));
            if !path.exists() {
                return Err(GlossaError::ModelLoad(format!(
                    "model file not found: {}",
                    path.display()
                )));
            }
            let file = File::open(&path)?;
            let model = LanguageModel::from_tsv_reader(file)
                .map_err(|e| GlossaError::ModelLoad(format!("{}: {e}", path.display())))?;
            debug!(language = %lang, grams = model.gram_count(), "model loaded");
            catalog.insert(lang, model);
        }
        Ok(catalog)
    }

    /// An empty catalog; used together with [`insert`](Self::insert) to
    /// assemble isolated fixtures in tests.
    pub fn empty() -> Self {
        Self {
            models: (0..Language::COUNT).map(|_| None).collect(),
        }
    }

    pub fn insert(&mut self, lang: Language, model: LanguageModel) {
        self.models[lang.index()] = Some(model);
    }

    pub fn model(&self, lang: Language) -> Option<&LanguageModel> {
        self.models[lang.index()].as_ref()
    }

    /// Languages the catalog has a model for, in catalog order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        Language::all().filter(|l| self.models[l.index()].is_some())
    }

    pub fn len(&self) -> usize {
        self.models.iter().filter(|m| m.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.models.iter().all(|m| m.is_none())
    }

    fn total_grams(&self) -> usize {
        self.models
            .iter()
            .flatten()
            .map(|m| m.gram_count())
            .sum()
    }

    /// The process-wide catalog built from embedded data. Constructed on
    /// first use behind a lock so concurrent callers cannot build it
    /// twice; immutable afterwards. A failure here is fatal for
    /// detection and is reported to every caller.
    pub fn shared() -> GlResult<Arc<ModelCatalog>> {
        if let Some(catalog) = SHARED.get() {
            return Ok(catalog.clone());
        }
        let _guard = SHARED_INIT
            .lock()
            .map_err(|_| GlossaError::ModelLoad("catalog init lock poisoned".to_string()))?;
        if let Some(catalog) = SHARED.get() {
            return Ok(catalog.clone());
        }
        let catalog = Arc::new(Self::from_embedded()?);
        let _ = SHARED.set(catalog.clone());
        Ok(catalog)
    }
}
