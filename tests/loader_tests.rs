use glossa::{GlossaError, Language, LanguageModel, ModelCatalog};
use std::io::Write;
use tempfile::tempdir;

#[test]
fn loads_models_from_directory() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("english.tsv"),
        "t\t9\nh\t7\ne\t12\nth\t8\nthe\t6\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("german.tsv"),
        "d\t9\ne\t13\nr\t8\nde\t8\nder\t6\n",
    )
    .unwrap();

    let catalog = ModelCatalog::from_dir(
        dir.path(),
        &[Language::English, Language::German],
    )
    .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.model(Language::English).unwrap().gram_count(), 5);
    assert!(catalog.model(Language::French).is_none());
    let listed: Vec<Language> = catalog.languages().collect();
    assert_eq!(listed, vec![Language::English, Language::German]);
}

#[test]
fn missing_model_file_is_a_load_failure() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("english.tsv"), "a\t1\n").unwrap();

    let err = ModelCatalog::from_dir(dir.path(), &[Language::English, Language::Thai])
        .unwrap_err();
    assert!(matches!(err, GlossaError::ModelLoad(_)), "got {err}");
}

#[test]
fn malformed_model_file_is_a_load_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("english.tsv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "a\t100").unwrap();
    writeln!(file, "b\tplenty").unwrap();
    drop(file);

    let err = ModelCatalog::from_dir(dir.path(), &[Language::English]).unwrap_err();
    assert!(matches!(err, GlossaError::ModelLoad(_)), "got {err}");
}

#[test]
fn oversized_gram_is_a_load_failure() {
    let err = LanguageModel::from_tsv_reader("abcdef\t10\n".as_bytes()).unwrap_err();
    assert!(matches!(err, GlossaError::ModelLoad(_)), "got {err}");
}

#[test]
fn loader_lowercases_grams() {
    let model = LanguageModel::from_tsv_reader("TH\t100\n".as_bytes()).unwrap();
    assert!(model.log_prob(2, "th", -7.0) > -7.0);
    assert_eq!(model.log_prob(2, "TH", -7.0), -7.0);
}

#[test]
fn unseen_floor_sits_below_observed_minimum() {
    // Default floor must undercut the sparsest embedded table, or unseen
    // grams would stop being a penalty.
    let catalog = ModelCatalog::from_embedded().unwrap();
    for lang in Language::all() {
        let model = catalog.model(lang).unwrap();
        assert!(
            model.min_logp() > glossa::consts::DEFAULT_UNSEEN_LOGP,
            "{lang} observed minimum {} is at or below the floor",
            model.min_logp()
        );
    }
}
