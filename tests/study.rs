//! End-to-end run of the five-strategy study on the canonical dataset.

use seesaw_classifiers::config::StudyConfig;
use seesaw_classifiers::io::generate_balance_scale;
use seesaw_classifiers::study::{ImbalanceStudy, Strategy};

#[test]
fn full_study_on_canonical_dataset() {
    let dataset = generate_balance_scale().unwrap();
    let report = ImbalanceStudy::new(StudyConfig::default())
        .run(&dataset)
        .unwrap();

    assert_eq!(report.outcomes.len(), 5);

    // The baseline fit ignores the minority class entirely: every prediction
    // is the majority label, so accuracy equals the majority share.
    let baseline = report.outcome(Strategy::Baseline).unwrap();
    assert_eq!(baseline.predicted_labels, vec![0]);
    assert!((baseline.accuracy - 576.0 / 625.0).abs() < 1e-3);
    assert_eq!(baseline.confusion.true_positives, 0);
    assert_eq!(baseline.confusion.false_positives, 0);

    // Rebalanced fits see both classes again.
    let upsample = report.outcome(Strategy::UpsampleMinority).unwrap();
    assert_eq!(upsample.train_rows, 1152);
    assert_eq!(upsample.predicted_labels, vec![0, 1]);

    let downsample = report.outcome(Strategy::DownsampleMajority).unwrap();
    assert_eq!(downsample.train_rows, 98);
    assert_eq!(downsample.predicted_labels, vec![0, 1]);
    // Weak but above-chance signal on the balanced frame
    assert!(downsample.accuracy > 0.5);
    assert!(downsample.auroc.as_ref().unwrap().auroc >= 0.5);

    // Metric reinterpretation: orientation-checked AUROC is never below chance.
    assert!(report.baseline_auroc_on_downsampled.auroc >= 0.5);

    // The tree ensemble separates the training frame nearly perfectly.
    let ensemble = report.outcome(Strategy::TreeEnsemble).unwrap();
    assert!(ensemble.accuracy > 0.9, "accuracy {}", ensemble.accuracy);
    assert!(ensemble.auroc.as_ref().unwrap().auroc > 0.9);
}

#[test]
fn study_respects_explicit_resample_targets() {
    let dataset = generate_balance_scale().unwrap();
    let config = StudyConfig {
        upsample_target: Some(200),
        downsample_target: Some(40),
        ..StudyConfig::default()
    };
    let report = ImbalanceStudy::new(config).run(&dataset).unwrap();

    let upsample = report.outcome(Strategy::UpsampleMinority).unwrap();
    assert_eq!(upsample.train_rows, 576 + 200);

    let downsample = report.outcome(Strategy::DownsampleMajority).unwrap();
    assert_eq!(downsample.train_rows, 40 + 49);
}
