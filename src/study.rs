//! The imbalance study: five remediation strategies run in sequence against
//! the same base dataset.
//!
//! The baseline fit documents the majority-only failure mode; the remaining
//! strategies rebalance the training frame (up/downsampling), reweight the
//! loss (cost-sensitive SVM), or switch model family (tree ensemble). Every
//! strategy reports accuracy, the confusion matrix, the distinct predicted
//! labels, and an orientation-checked AUROC.
use std::fmt;

use anyhow::{Context, Result};
use ndarray::Array1;

use crate::config::{ModelConfig, ModelType, StudyConfig};
use crate::data_handling::Dataset;
use crate::models::classifier_trait::BinaryClassifier;
use crate::models::factory::build_model;
use crate::models::svm::balanced_class_weights;
use crate::sampling::{downsample_majority, upsample_minority};
use crate::stats::{
    accuracy_score, confusion_matrix, oriented_auroc, unique_labels, ConfusionMatrix,
    OrientedAuroc,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Baseline,
    UpsampleMinority,
    DownsampleMajority,
    CostSensitiveSvm,
    TreeEnsemble,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Baseline => "baseline",
            Strategy::UpsampleMinority => "upsample-minority",
            Strategy::DownsampleMajority => "downsample-majority",
            Strategy::CostSensitiveSvm => "cost-sensitive-svm",
            Strategy::TreeEnsemble => "tree-ensemble",
        };
        f.write_str(name)
    }
}

/// Metrics for one strategy, evaluated on its own training frame.
#[derive(Debug, Clone)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    pub model_name: String,
    /// Row count of the frame the model was fitted on.
    pub train_rows: usize,
    pub accuracy: f32,
    /// Distinct predicted labels; a single entry flags a degenerate model.
    pub predicted_labels: Vec<i32>,
    pub confusion: ConfusionMatrix,
    pub auroc: Option<OrientedAuroc>,
    /// True labels of the training frame, kept for downstream plotting.
    pub labels: Array1<i32>,
    /// Positive-class probabilities on the training frame.
    pub probabilities: Array1<f32>,
}

impl StrategyOutcome {
    pub fn log(&self) {
        println!("----- {} ({}) -----", self.strategy, self.model_name);
        println!("trained on {} rows", self.train_rows);
        println!("accuracy: {:.4}", self.accuracy);
        println!("predicted labels: {:?}", self.predicted_labels);
        println!("confusion matrix:\n{}", self.confusion);
        if let Some(auroc) = &self.auroc {
            if auroc.inverted {
                println!(
                    "AUROC: {:.4} (probability column inverted; raw {:.4})",
                    auroc.auroc, auroc.raw_auroc
                );
            } else {
                println!("AUROC: {:.4}", auroc.auroc);
            }
        }
    }
}

/// Results of the full study.
#[derive(Debug, Clone)]
pub struct StudyReport {
    pub outcomes: Vec<StrategyOutcome>,
    /// The baseline model rescored against the downsampled frame, the
    /// metric-reinterpretation comparison point.
    pub baseline_auroc_on_downsampled: OrientedAuroc,
}

impl StudyReport {
    pub fn outcome(&self, strategy: Strategy) -> Option<&StrategyOutcome> {
        self.outcomes.iter().find(|o| o.strategy == strategy)
    }

    pub fn log_summary(&self) {
        for outcome in &self.outcomes {
            outcome.log();
        }
        let rescored = &self.baseline_auroc_on_downsampled;
        println!(
            "baseline AUROC on downsampled frame: {:.4}{}",
            rescored.auroc,
            if rescored.inverted {
                " (probability column inverted)"
            } else {
                ""
            }
        );
    }
}

pub struct ImbalanceStudy {
    config: StudyConfig,
}

impl ImbalanceStudy {
    pub fn new(config: StudyConfig) -> Self {
        ImbalanceStudy { config }
    }

    /// Run all five strategies against `dataset`.
    ///
    /// Each strategy fits a fresh model; nothing is shared between them
    /// besides the base dataset and the study seed.
    pub fn run(&self, dataset: &Dataset) -> Result<StudyReport> {
        dataset.log_summary();

        // Baseline on the unbalanced frame. The fitted model is kept around
        // for the metric-reinterpretation step.
        let (baseline, baseline_model) = self.run_strategy(
            Strategy::Baseline,
            self.config.linear_model.clone(),
            dataset,
        )?;

        let upsampled = upsample_minority(dataset, self.config.upsample_target, self.config.seed)?;
        let (upsample, _) = self.run_strategy(
            Strategy::UpsampleMinority,
            self.config.linear_model.clone(),
            &upsampled,
        )?;

        let downsampled =
            downsample_majority(dataset, self.config.downsample_target, self.config.seed)?;
        let (downsample, _) = self.run_strategy(
            Strategy::DownsampleMajority,
            self.config.linear_model.clone(),
            &downsampled,
        )?;

        // Metric reinterpretation: rescore the baseline probabilities on the
        // rebalanced frame, with the orientation check made explicit.
        let baseline_probs = baseline_model
            .predict_proba(&downsampled.x)
            .context("Rescoring baseline model on the downsampled frame")?;
        let baseline_auroc_on_downsampled = oriented_auroc(&downsampled.y, &baseline_probs)?;
        if baseline_auroc_on_downsampled.inverted {
            log::warn!(
                "Baseline probability column ranked the negative class higher (raw AUROC {:.4}); inverted",
                baseline_auroc_on_downsampled.raw_auroc
            );
        }

        // Cost-sensitive SVM: balanced per-class penalties on the original frame.
        let mut svm_config = self.config.cost_sensitive_model.clone();
        let (w_pos, w_neg) = balanced_class_weights(&dataset.y)?;
        if let ModelType::Svm { c, .. } = &mut svm_config.model_type {
            *c = (c.0 * w_pos, c.1 * w_neg);
            log::info!("Balanced SVM penalties: positive {:.3}, negative {:.3}", c.0, c.1);
        }
        let (svm, _) = self.run_strategy(Strategy::CostSensitiveSvm, svm_config, dataset)?;

        let (ensemble, _) = self.run_strategy(
            Strategy::TreeEnsemble,
            self.config.ensemble_model.clone(),
            dataset,
        )?;

        Ok(StudyReport {
            outcomes: vec![baseline, upsample, downsample, svm, ensemble],
            baseline_auroc_on_downsampled,
        })
    }

    fn run_strategy(
        &self,
        strategy: Strategy,
        config: ModelConfig,
        frame: &Dataset,
    ) -> Result<(StrategyOutcome, Box<dyn BinaryClassifier>)> {
        let mut model = build_model(config);
        log::info!(
            "Strategy {}: fitting {} on {} rows",
            strategy,
            model.name(),
            frame.n_samples()
        );
        model
            .fit(&frame.x, &frame.y)
            .with_context(|| format!("Fitting model for strategy {}", strategy))?;

        let preds = model.predict(&frame.x)?;
        let accuracy = accuracy_score(&frame.y, &preds)?;
        let confusion = confusion_matrix(&frame.y, &preds)?;
        let predicted_labels = unique_labels(&preds);

        let probs = model.predict_proba(&frame.x)?;
        let auroc = match oriented_auroc(&frame.y, &probs) {
            Ok(value) => Some(value),
            // A degenerate frame (single class) has no ranking metric.
            Err(err) => {
                log::warn!("Strategy {}: AUROC unavailable: {}", strategy, err);
                None
            }
        };

        let outcome = StrategyOutcome {
            strategy,
            model_name: model.name().to_string(),
            train_rows: frame.n_samples(),
            accuracy,
            predicted_labels,
            confusion,
            auroc,
            labels: frame.y.clone(),
            probabilities: probs,
        };
        Ok((outcome, model))
    }
}
