//! Seeded resampling utilities for rebalancing class counts.
//!
//! Upsampling duplicates minority rows (drawn with replacement) until the
//! minority matches a target count; downsampling keeps a without-replacement
//! subset of the majority. Both take an explicit seed so row counts and draws
//! reproduce across runs.
use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::data_handling::Dataset;

/// Draw `n_samples` row indices from `indices`.
///
/// With replacement the draw is independent per sample; without replacement
/// the result is a distinct subset, so `n_samples` must not exceed the pool.
pub fn sample_indices(
    indices: &[usize],
    n_samples: usize,
    replace: bool,
    rng: &mut StdRng,
) -> Result<Vec<usize>> {
    if indices.is_empty() {
        bail!("Cannot sample from an empty index pool");
    }
    if replace {
        let drawn = (0..n_samples)
            .map(|_| *indices.choose(rng).expect("non-empty pool"))
            .collect();
        return Ok(drawn);
    }
    if n_samples > indices.len() {
        bail!(
            "Cannot draw {} samples without replacement from a pool of {}",
            n_samples,
            indices.len()
        );
    }
    Ok(indices.choose_multiple(rng, n_samples).copied().collect())
}

/// Duplicate minority rows (with replacement) until the minority count
/// reaches `target`, defaulting to the majority count.
///
/// The returned dataset keeps every majority row unchanged, in order, followed
/// by the resampled minority block.
pub fn upsample_minority(dataset: &Dataset, target: Option<usize>, seed: u64) -> Result<Dataset> {
    let majority = dataset.majority_label();
    let minority = dataset.minority_label();
    if majority == minority {
        bail!("Dataset must contain two classes to upsample");
    }

    let majority_rows = dataset.class_indices(majority);
    let minority_rows = dataset.class_indices(minority);
    let n_samples = target.unwrap_or(majority_rows.len());

    let mut rng = StdRng::seed_from_u64(seed);
    let drawn = sample_indices(&minority_rows, n_samples, true, &mut rng)?;

    log::debug!(
        "Upsampled class {} from {} to {} rows (seed {})",
        minority,
        minority_rows.len(),
        n_samples,
        seed
    );

    let majority_part = dataset.select(&majority_rows);
    let minority_part = dataset.select(&drawn);
    majority_part.concat(&minority_part)
}

/// Keep a without-replacement subset of the majority of size `target`,
/// defaulting to the minority count.
///
/// The returned dataset holds the downsampled majority block followed by
/// every minority row unchanged, in order.
pub fn downsample_majority(dataset: &Dataset, target: Option<usize>, seed: u64) -> Result<Dataset> {
    let majority = dataset.majority_label();
    let minority = dataset.minority_label();
    if majority == minority {
        bail!("Dataset must contain two classes to downsample");
    }

    let majority_rows = dataset.class_indices(majority);
    let minority_rows = dataset.class_indices(minority);
    let n_samples = target.unwrap_or(minority_rows.len());

    let mut rng = StdRng::seed_from_u64(seed);
    let drawn = sample_indices(&majority_rows, n_samples, false, &mut rng)?;

    log::debug!(
        "Downsampled class {} from {} to {} rows (seed {})",
        majority,
        majority_rows.len(),
        n_samples,
        seed
    );

    let majority_part = dataset.select(&drawn);
    let minority_part = dataset.select(&minority_rows);
    majority_part.concat(&minority_part)
}
