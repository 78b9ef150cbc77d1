use glossa::{Detector, DetectorBuilder, DetectorConfig, Language};
use proptest::prelude::*;

mod common;
use common::catalog_from;

fn small_detector(config: DetectorConfig) -> Detector {
    let catalog = catalog_from(&[
        (Language::English, "t\t9\nh\t7\ne\t12\nth\t8\nthe\t6\n"),
        (Language::German, "d\t9\ne\t13\nr\t8\nde\t8\nder\t6\n"),
        (Language::Thai, "ส\t5\nว\t4\nั\t3\nสว\t3\nวั\t2\n"),
    ]);
    DetectorBuilder::from_languages(&[Language::English, Language::German, Language::Thai])
        .with_catalog(catalog)
        .with_config(config)
        .build()
        .unwrap()
}

prop_compose! {
    fn arb_config()(
        sharpness in 0.25..4.0f64,
        floor in -12.0..-5.0f64,
        w1 in 0.5..2.0f64,
        w5 in 3.0..8.0f64,
    ) -> DetectorConfig {
        DetectorConfig {
            order_weights: [w1, 2.0, 3.0, 4.0, w5],
            unseen_logp: floor,
            sharpness,
            ..Default::default()
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn distribution_is_well_formed_for_any_text(
        text in "\\PC{0,64}",
        config in arb_config(),
    ) {
        let detector = small_detector(config);
        let results = detector.confidence_values(&text).unwrap();

        for r in &results {
            prop_assert!(r.confidence.is_finite());
            prop_assert!(r.confidence >= 0.0 && r.confidence <= 1.0);
        }
        if !results.is_empty() {
            let total: f64 = results.iter().map(|r| r.confidence).sum();
            prop_assert!((total - 1.0).abs() < 1e-9, "sum was {}", total);
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn detection_is_idempotent(text in "\\PC{0,64}") {
        let detector = small_detector(DetectorConfig::default());
        let first = detector.confidence_values(&text).unwrap();
        let second = detector.confidence_values(&text).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn best_matches_distribution_head(text in "\\PC{0,64}") {
        let detector = small_detector(DetectorConfig::default());
        let best = detector.detect_language(&text).unwrap();
        let distribution = detector.confidence_values(&text).unwrap();
        prop_assert_eq!(best, distribution.first().map(|r| r.language));
    }

    #[test]
    fn lower_thresholds_are_supersets(
        text in "\\PC{1,64}",
        t1 in 0.01..0.5f64,
        delta in 0.01..0.5f64,
    ) {
        let detector = small_detector(DetectorConfig::default());
        let t2 = t1 + delta;
        let loose = detector.detect_multiple_languages(&text, t1).unwrap();
        let strict = detector.detect_multiple_languages(&text, t2).unwrap();
        for r in &strict {
            prop_assert!(loose.iter().any(|l| l.language == r.language));
        }
    }

    #[test]
    fn top_n_is_a_prefix_of_the_distribution(
        text in "\\PC{1,64}",
        n in 1usize..6,
    ) {
        let detector = small_detector(DetectorConfig::default());
        let top = detector.detect_top_languages(&text, n).unwrap();
        let distribution = detector.confidence_values(&text).unwrap();
        prop_assert!(top.len() <= n);
        prop_assert_eq!(&top[..], &distribution[..top.len().min(distribution.len())]);
    }
}
