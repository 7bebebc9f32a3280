use ndarray::Array1;
use plotly::common::{DashType, Line, Mode};
use plotly::layout::{Axis, Layout};
use plotly::{Histogram, Plot, Scatter};

use crate::stats::roc_curve;

/// Plot a histogram of the scores for the positive and negative classes
pub fn plot_score_histogram(
    scores: &Array1<f32>,
    labels: &Array1<i32>,
    title: &str,
) -> Result<Plot, String> {
    if scores.len() != labels.len() {
        return Err("Scores and labels must have the same length".to_string());
    }
    if !labels.iter().all(|&l| l == 0 || l == 1) {
        return Err("Labels must be binary, 0 for negatives and 1 for positives".to_string());
    }

    let mut scores_positive = Vec::new();
    let mut scores_negative = Vec::new();

    for (score, label) in scores.iter().zip(labels.iter()) {
        if *label == 1 {
            scores_positive.push(*score);
        } else {
            scores_negative.push(*score);
        }
    }

    let trace_positive = Histogram::new(scores_positive).name("Positive");
    let trace_negative = Histogram::new(scores_negative).name("Negative");

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Score"))
        .y_axis(Axis::new().title("Count"));

    let mut plot = Plot::new();
    plot.add_trace(trace_negative);
    plot.add_trace(trace_positive);
    plot.set_layout(layout);

    Ok(plot)
}

/// Plot the ROC curve for positive-class scores with a chance-level diagonal.
pub fn plot_roc_curve(
    labels: &Array1<i32>,
    scores: &Array1<f32>,
    title: &str,
) -> Result<Plot, String> {
    let (fpr, tpr) = roc_curve(labels, scores).map_err(|e| e.to_string())?;

    let curve = Scatter::new(fpr, tpr).mode(Mode::Lines).name("ROC");

    let reference_line = Scatter::new(vec![0.0, 1.0], vec![0.0, 1.0])
        .mode(Mode::Lines)
        .name("chance level")
        .line(Line::new().color("red").dash(DashType::Dash));

    let mut plot = Plot::new();
    plot.add_trace(curve);
    plot.add_trace(reference_line);
    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title("False positive rate"))
            .y_axis(Axis::new().title("True positive rate")),
    );

    Ok(plot)
}
