//! Balance-scale data file reader.
//!
//! The UCI balance-scale file is headerless CSV with five columns: a
//! categorical label (`L`, `B`, or `R`) followed by four integer features
//! (left weight, left distance, right weight, right distance), each in 1..=5.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ndarray::Array2;

use crate::data_handling::{binarize_labels, Dataset, DatasetMetadata};

/// Parsed balance-scale rows before label binarization.
#[derive(Debug)]
pub struct BalanceScaleData {
    pub x: Array2<f32>,
    pub raw_labels: Vec<String>,
    pub feature_names: Vec<String>,
}

/// Configuration for reading balance-scale style CSV files.
#[derive(Debug, Clone)]
pub struct BalanceScaleReaderConfig {
    /// Field delimiter; the canonical file is comma separated.
    pub delimiter: u8,
    /// Names assigned to the unlabeled feature columns, in file order.
    pub feature_names: Vec<String>,
    /// Name assigned to the label column.
    pub label_name: String,
    /// Raw label value mapped to 1 when binarizing.
    pub positive_class: String,
}

impl Default for BalanceScaleReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            feature_names: vec![
                "var1".to_string(),
                "var2".to_string(),
                "var3".to_string(),
                "var4".to_string(),
            ],
            label_name: "balance".to_string(),
            positive_class: "B".to_string(),
        }
    }
}

/// Read a balance-scale CSV file with the default column layout.
pub fn read_balance_scale<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    read_balance_scale_with_config(path, &BalanceScaleReaderConfig::default())
}

/// Read a balance-scale CSV file using a custom configuration and binarize
/// the label column against the configured positive class.
pub fn read_balance_scale_with_config<P: AsRef<Path>>(
    path: P,
    config: &BalanceScaleReaderConfig,
) -> Result<Dataset> {
    let data = read_raw(&path, config)?;
    let y = binarize_labels(&data.raw_labels, &config.positive_class);
    Dataset::new(
        data.x,
        y,
        DatasetMetadata {
            label_name: config.label_name.clone(),
            feature_names: data.feature_names,
            positive_class: config.positive_class.clone(),
        },
    )
}

/// Read raw rows without binarizing, preserving the categorical labels.
pub fn read_raw<P: AsRef<Path>>(
    path: P,
    config: &BalanceScaleReaderConfig,
) -> Result<BalanceScaleData> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .from_path(&path)
        .with_context(|| {
            format!(
                "Failed to open balance-scale file: {}",
                path.as_ref().display()
            )
        })?;

    let n_features = config.feature_names.len();
    let mut features = Vec::new();
    let mut raw_labels = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        if record.len() != n_features + 1 {
            return Err(anyhow!(
                "Expected {} columns at row {}, got {}",
                n_features + 1,
                row_idx + 1,
                record.len()
            ));
        }

        let label = record
            .get(0)
            .ok_or_else(|| anyhow!("Missing label value at row {}", row_idx + 1))?
            .trim();
        raw_labels.push(label.to_string());

        for (col, value) in record.iter().skip(1).enumerate() {
            let parsed = value.trim().parse::<f32>().with_context(|| {
                format!(
                    "Invalid feature '{}' at row {}",
                    config.feature_names[col],
                    row_idx + 1
                )
            })?;
            features.push(parsed);
        }
    }

    let n_samples = raw_labels.len();
    let x = Array2::from_shape_vec((n_samples, n_features), features)
        .context("Failed to build feature matrix")?;

    Ok(BalanceScaleData {
        x,
        raw_labels,
        feature_names: config.feature_names.clone(),
    })
}

/// Reconstruct the canonical 625-row balance-scale dataset.
///
/// The file enumerates every combination of the four features in 1..=5; the
/// label compares left torque (weight x distance) against right torque. This
/// yields 288 `L`, 288 `R`, and 49 `B` rows, so the binarized split is 576
/// majority / 49 minority.
pub fn generate_balance_scale() -> Result<Dataset> {
    let config = BalanceScaleReaderConfig::default();
    let mut features = Vec::with_capacity(625 * 4);
    let mut raw_labels = Vec::with_capacity(625);

    for lw in 1..=5 {
        for ld in 1..=5 {
            for rw in 1..=5 {
                for rd in 1..=5 {
                    let left = lw * ld;
                    let right = rw * rd;
                    let label = if left > right {
                        "L"
                    } else if left < right {
                        "R"
                    } else {
                        "B"
                    };
                    raw_labels.push(label.to_string());
                    features.extend_from_slice(&[lw as f32, ld as f32, rw as f32, rd as f32]);
                }
            }
        }
    }

    let x = Array2::from_shape_vec((raw_labels.len(), 4), features)
        .context("Failed to build feature matrix")?;
    let y = binarize_labels(&raw_labels, &config.positive_class);
    Dataset::new(
        x,
        y,
        DatasetMetadata {
            label_name: config.label_name,
            feature_names: config.feature_names,
            positive_class: config.positive_class,
        },
    )
}
