#![allow(dead_code)] // not every test file uses every helper

use glossa::{Detector, DetectorBuilder, Language, LanguageModel, ModelCatalog};
use std::sync::{Arc, Once};

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once so `--nocapture` runs show the
/// engine's load and scoring logs.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Builds an isolated catalog from inline TSV tables, independent of the
/// embedded data.
pub fn catalog_from(entries: &[(Language, &str)]) -> Arc<ModelCatalog> {
    let mut catalog = ModelCatalog::empty();
    for (lang, tsv) in entries {
        let model = LanguageModel::from_tsv_reader(tsv.as_bytes()).unwrap();
        catalog.insert(*lang, model);
    }
    Arc::new(catalog)
}

/// Detector over an isolated two-language fixture: English-ish "the"
/// statistics versus German-ish "der" statistics.
pub fn mock_latin_detector() -> Detector {
    let catalog = catalog_from(&[
        (
            Language::English,
            "t\t9\nh\t7\ne\t12\nth\t8\nhe\t7\nthe\t6\n",
        ),
        (
            Language::German,
            "d\t9\ne\t13\nr\t8\nde\t8\ner\t7\nder\t6\n",
        ),
    ]);
    DetectorBuilder::from_languages(&[Language::English, Language::German])
        .with_catalog(catalog)
        .build()
        .unwrap()
}

/// Detector over the full embedded catalog.
pub fn embedded_detector() -> Detector {
    init_tracing();
    Detector::new().unwrap()
}
