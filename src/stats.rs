//! Classification metrics: accuracy, confusion matrix, and AUROC.
//!
//! All metrics follow the binary 0/1 label convention used across the crate,
//! with 1 as the positive class. AUROC is computed from tie-averaged ranks,
//! which matches the trapezoidal area under the empirical ROC curve.
use std::fmt;

use ndarray::Array1;

use crate::error::MetricError;

/// Binary confusion matrix, positive class = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub true_positives: usize,
}

impl ConfusionMatrix {
    /// True positive rate (sensitivity, recall): TP / (TP + FN).
    pub fn tpr(&self) -> f32 {
        let denom = self.true_positives + self.false_negatives;
        if denom == 0 {
            return 0.0;
        }
        self.true_positives as f32 / denom as f32
    }

    /// False positive rate (fall-out): FP / (FP + TN).
    pub fn fpr(&self) -> f32 {
        let denom = self.false_positives + self.true_negatives;
        if denom == 0 {
            return 0.0;
        }
        self.false_positives as f32 / denom as f32
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rows are true labels (0 then 1), columns predicted labels.
        writeln!(f, "[[{} {}]", self.true_negatives, self.false_positives)?;
        write!(f, " [{} {}]]", self.false_negatives, self.true_positives)
    }
}

/// Fraction of predictions equal to the true label.
pub fn accuracy_score(y_true: &Array1<i32>, y_pred: &Array1<i32>) -> Result<f32, MetricError> {
    check_lengths(y_true.len(), y_pred.len())?;
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f32 / y_true.len() as f32)
}

/// Count prediction outcomes against true labels.
pub fn confusion_matrix(
    y_true: &Array1<i32>,
    y_pred: &Array1<i32>,
) -> Result<ConfusionMatrix, MetricError> {
    check_lengths(y_true.len(), y_pred.len())?;
    let mut cm = ConfusionMatrix {
        true_negatives: 0,
        false_positives: 0,
        false_negatives: 0,
        true_positives: 0,
    };
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        match (t, p) {
            (0, 0) => cm.true_negatives += 1,
            (0, _) => cm.false_positives += 1,
            (_, 0) => cm.false_negatives += 1,
            _ => cm.true_positives += 1,
        }
    }
    Ok(cm)
}

/// Distinct predicted labels, sorted ascending.
///
/// A degenerate classifier trained on a heavily imbalanced set shows up here
/// as a single-element result.
pub fn unique_labels(y_pred: &Array1<i32>) -> Vec<i32> {
    let mut labels: Vec<i32> = y_pred.to_vec();
    labels.sort_unstable();
    labels.dedup();
    labels
}

/// Area under the ROC curve for positive-class scores.
///
/// Computed via the rank-sum (Mann-Whitney U) formulation with tie-averaged
/// ranks, so equal scores contribute half a concordant pair.
///
/// # Arguments
///
/// * `y_true` - Binary labels, 1 for the positive class.
/// * `scores` - Score or probability assigned to the positive class.
///
/// # Returns
///
/// AUROC in [0, 1]. 0.5 is chance level; below 0.5 indicates the score
/// column ranks the negative class higher (see `oriented_auroc`).
pub fn roc_auc_score(y_true: &Array1<i32>, scores: &Array1<f32>) -> Result<f32, MetricError> {
    check_lengths(y_true.len(), scores.len())?;

    let n_pos = y_true.iter().filter(|&&l| l == 1).count();
    let n_neg = y_true.len() - n_pos;
    if n_pos == 0 {
        return Err(MetricError::SingleClass(0));
    }
    if n_neg == 0 {
        return Err(MetricError::SingleClass(1));
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[a]
            .partial_cmp(&scores[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Assign average ranks (1-based) across tied score groups.
    let mut ranks = vec![0f64; scores.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && scores[order[j + 1]] == scores[order[i]] {
            j += 1;
        }
        let avg_rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = avg_rank;
        }
        i = j + 1;
    }

    let pos_rank_sum: f64 = y_true
        .iter()
        .zip(ranks.iter())
        .filter_map(|(&l, &r)| if l == 1 { Some(r) } else { None })
        .sum();

    let u = pos_rank_sum - (n_pos * (n_pos + 1)) as f64 / 2.0;
    Ok((u / (n_pos as f64 * n_neg as f64)) as f32)
}

/// AUROC with an explicit positive-class orientation check.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedAuroc {
    /// AUROC after any inversion; always >= 0.5.
    pub auroc: f32,
    /// AUROC of the scores as given.
    pub raw_auroc: f32,
    /// True when the score column was inverted (p -> 1 - p).
    pub inverted: bool,
}

/// Compute AUROC, inverting the score column when the raw value is below 0.5.
///
/// A raw AUROC under 0.5 means the scores rank the negative class higher,
/// i.e. the probability column belongs to the wrong class. Inverting each
/// score as `1 - p` flips the ranking, so the corrected AUROC is
/// `1 - raw`. The inversion is reported rather than silently applied.
pub fn oriented_auroc(
    y_true: &Array1<i32>,
    scores: &Array1<f32>,
) -> Result<OrientedAuroc, MetricError> {
    let raw = roc_auc_score(y_true, scores)?;
    if raw >= 0.5 {
        return Ok(OrientedAuroc {
            auroc: raw,
            raw_auroc: raw,
            inverted: false,
        });
    }
    let flipped = scores.mapv(|p| 1.0 - p);
    let auroc = roc_auc_score(y_true, &flipped)?;
    Ok(OrientedAuroc {
        auroc,
        raw_auroc: raw,
        inverted: true,
    })
}

/// ROC curve points as (FPR, TPR) pairs, one per distinct score threshold.
///
/// Points are ordered from (0, 0) to (1, 1) as the threshold sweeps from the
/// highest score downwards.
pub fn roc_curve(
    y_true: &Array1<i32>,
    scores: &Array1<f32>,
) -> Result<(Vec<f32>, Vec<f32>), MetricError> {
    check_lengths(y_true.len(), scores.len())?;

    let n_pos = y_true.iter().filter(|&&l| l == 1).count();
    let n_neg = y_true.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return Err(MetricError::SingleClass(if n_pos == 0 { 0 } else { 1 }));
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut fpr = vec![0.0];
    let mut tpr = vec![0.0];
    let mut tp = 0usize;
    let mut fp = 0usize;

    let mut i = 0;
    while i < order.len() {
        let threshold = scores[order[i]];
        // Consume the whole tied group before emitting a point.
        while i < order.len() && scores[order[i]] == threshold {
            if y_true[order[i]] == 1 {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        fpr.push(fp as f32 / n_neg as f32);
        tpr.push(tp as f32 / n_pos as f32);
    }

    Ok((fpr, tpr))
}

fn check_lengths(expected: usize, got: usize) -> Result<(), MetricError> {
    if expected == 0 {
        return Err(MetricError::EmptyInput);
    }
    if expected != got {
        return Err(MetricError::LengthMismatch { expected, got });
    }
    Ok(())
}
