//! Data structures and helpers for tabular binary-classification datasets.
//!
//! This module defines `DatasetMetadata` and `Dataset` and contains helpers
//! for binarizing labels, counting classes, and selecting row subsets used by
//! the resampling strategies.
use std::collections::BTreeMap;

use anyhow::{bail, Result};
use ndarray::{concatenate, Array1, Array2, Axis};

#[derive(Debug, Clone)]
pub struct DatasetMetadata {
    /// Name of the label column
    pub label_name: String,
    /// Feature names, one per column of `x`
    pub feature_names: Vec<String>,
    /// Raw label value treated as the positive (minority) class
    pub positive_class: String,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub x: Array2<f32>,
    pub y: Array1<i32>,
    pub metadata: DatasetMetadata,
}

/// Binarize raw categorical labels: 1 iff the label equals `positive_class`.
pub fn binarize_labels(labels: &[String], positive_class: &str) -> Array1<i32> {
    labels
        .iter()
        .map(|label| i32::from(label == positive_class))
        .collect()
}

impl Dataset {
    pub fn new(x: Array2<f32>, y: Array1<i32>, metadata: DatasetMetadata) -> Result<Self> {
        if x.nrows() != y.len() {
            bail!(
                "Feature matrix has {} rows but label vector has {} entries",
                x.nrows(),
                y.len()
            );
        }
        if metadata.feature_names.len() != x.ncols() {
            bail!(
                "Expected {} feature names, got {}",
                x.ncols(),
                metadata.feature_names.len()
            );
        }
        Ok(Dataset { x, y, metadata })
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    /// Count rows per binary label, keyed by label value.
    pub fn class_counts(&self) -> BTreeMap<i32, usize> {
        let mut counts = BTreeMap::new();
        for &label in self.y.iter() {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }

    /// The label with the most rows. Ties resolve to the smaller label value.
    pub fn majority_label(&self) -> i32 {
        self.class_counts()
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
            .map(|(label, _)| label)
            .unwrap_or(0)
    }

    /// The label with the fewest rows. Ties resolve to the larger label value.
    pub fn minority_label(&self) -> i32 {
        self.class_counts()
            .into_iter()
            .min_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
            .map(|(label, _)| label)
            .unwrap_or(1)
    }

    /// Row indices carrying the given label, in dataset order.
    pub fn class_indices(&self, label: i32) -> Vec<usize> {
        self.y
            .iter()
            .enumerate()
            .filter_map(|(i, &l)| if l == label { Some(i) } else { None })
            .collect()
    }

    /// Select a row subset by index. Indices may repeat, which duplicates rows.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            x: self.x.select(Axis(0), indices),
            y: self.y.select(Axis(0), indices),
            metadata: self.metadata.clone(),
        }
    }

    /// Filter rows by a boolean mask of the same length as the dataset.
    pub fn filter(&self, mask: &Array1<bool>) -> Dataset {
        let selected: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &keep)| if keep { Some(i) } else { None })
            .collect();
        self.select(&selected)
    }

    /// Stack two datasets row-wise. Schemas must match.
    pub fn concat(&self, other: &Dataset) -> Result<Dataset> {
        if self.metadata.feature_names != other.metadata.feature_names {
            bail!("Cannot concatenate datasets with different feature columns");
        }
        let x = concatenate(Axis(0), &[self.x.view(), other.x.view()])?;
        let y = concatenate(Axis(0), &[self.y.view(), other.y.view()])?;
        Ok(Dataset {
            x,
            y,
            metadata: self.metadata.clone(),
        })
    }

    pub fn log_summary(&self) {
        let counts = self.class_counts();
        println!("----- Input Data Summary -----");
        println!(
            "Info: {} rows, {} feature columns",
            self.n_samples(),
            self.x.ncols()
        );
        for (label, count) in &counts {
            println!("Info: class {}: {} rows", label, count);
        }
        println!(
            "Info: positive class is '{}' (label 1)",
            self.metadata.positive_class
        );
        println!("-------------------------------");
    }
}
