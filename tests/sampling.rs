//! Integration tests for seeded resampling against the canonical dataset.

use std::collections::HashSet;

use ndarray::s;
use seesaw_classifiers::io::generate_balance_scale;
use seesaw_classifiers::sampling::{downsample_majority, upsample_minority};

// ---------------------------------------------------------------------------
// Canonical dataset shape
// ---------------------------------------------------------------------------

#[test]
fn canonical_dataset_counts() {
    let ds = generate_balance_scale().unwrap();
    assert_eq!(ds.n_samples(), 625);
    let counts = ds.class_counts();
    assert_eq!(counts[&0], 576, "majority (L/R) count");
    assert_eq!(counts[&1], 49, "minority (B) count");
}

// ---------------------------------------------------------------------------
// Upsampling
// ---------------------------------------------------------------------------

#[test]
fn upsample_matches_majority_count() {
    let ds = generate_balance_scale().unwrap();
    let up = upsample_minority(&ds, None, 123).unwrap();
    let counts = up.class_counts();
    assert_eq!(counts[&0], 576);
    assert_eq!(counts[&1], 576);
    assert_eq!(up.n_samples(), 1152);
}

#[test]
fn upsample_leaves_majority_rows_untouched() {
    let ds = generate_balance_scale().unwrap();
    let up = upsample_minority(&ds, None, 123).unwrap();

    // The majority block leads the resampled frame, in original order.
    let majority = ds.select(&ds.class_indices(0));
    let head = up.x.slice(s![..majority.n_samples(), ..]);
    assert_eq!(head, majority.x.view());
    assert!(up
        .y
        .slice(s![..majority.n_samples()])
        .iter()
        .all(|&l| l == 0));
}

#[test]
fn upsample_honors_explicit_target() {
    let ds = generate_balance_scale().unwrap();
    let up = upsample_minority(&ds, Some(100), 123).unwrap();
    assert_eq!(up.class_counts()[&1], 100);
}

#[test]
fn upsampled_rows_come_from_minority_pool() {
    let ds = generate_balance_scale().unwrap();
    let minority_rows: HashSet<Vec<u32>> = ds
        .select(&ds.class_indices(1))
        .x
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|&v| v as u32).collect())
        .collect();

    let up = upsample_minority(&ds, None, 123).unwrap();
    for (row, &label) in up.x.rows().into_iter().zip(up.y.iter()) {
        if label == 1 {
            let key: Vec<u32> = row.iter().map(|&v| v as u32).collect();
            assert!(minority_rows.contains(&key), "row {:?} not a minority row", key);
        }
    }
}

// ---------------------------------------------------------------------------
// Downsampling
// ---------------------------------------------------------------------------

#[test]
fn downsample_matches_minority_count() {
    let ds = generate_balance_scale().unwrap();
    let down = downsample_majority(&ds, None, 123).unwrap();
    let counts = down.class_counts();
    assert_eq!(counts[&0], 49);
    assert_eq!(counts[&1], 49);
    assert_eq!(down.n_samples(), 98);
}

#[test]
fn downsample_draws_without_replacement() {
    let ds = generate_balance_scale().unwrap();
    let down = downsample_majority(&ds, None, 123).unwrap();

    // Balance-scale rows are unique, so a repeated draw would collapse here.
    let mut majority_rows: HashSet<Vec<u32>> = HashSet::new();
    for (row, &label) in down.x.rows().into_iter().zip(down.y.iter()) {
        if label == 0 {
            majority_rows.insert(row.iter().map(|&v| v as u32).collect());
        }
    }
    assert_eq!(majority_rows.len(), 49, "duplicate majority row drawn");
}

#[test]
fn downsample_target_larger_than_pool_errors() {
    let ds = generate_balance_scale().unwrap();
    assert!(downsample_majority(&ds, Some(1000), 123).is_err());
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn same_seed_reproduces_resamples() {
    let ds = generate_balance_scale().unwrap();

    let up_a = upsample_minority(&ds, None, 7).unwrap();
    let up_b = upsample_minority(&ds, None, 7).unwrap();
    assert_eq!(up_a.x, up_b.x);
    assert_eq!(up_a.y, up_b.y);

    let down_a = downsample_majority(&ds, None, 7).unwrap();
    let down_b = downsample_majority(&ds, None, 7).unwrap();
    assert_eq!(down_a.x, down_b.x);
    assert_eq!(down_a.y, down_b.y);
}
