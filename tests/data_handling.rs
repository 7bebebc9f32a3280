//! Integration tests for Dataset construction and data_handling.

use ndarray::{Array1, Array2};
use seesaw_classifiers::data_handling::{binarize_labels, Dataset, DatasetMetadata};

fn make_metadata() -> DatasetMetadata {
    DatasetMetadata {
        label_name: "balance".to_string(),
        feature_names: vec!["f1".to_string(), "f2".to_string()],
        positive_class: "B".to_string(),
    }
}

fn make_dataset(y: Vec<i32>) -> Dataset {
    let n = y.len();
    let x = Array2::from_shape_vec((n, 2), (0..n * 2).map(|v| v as f32).collect()).unwrap();
    Dataset::new(x, Array1::from_vec(y), make_metadata()).unwrap()
}

// ---------------------------------------------------------------------------
// Label binarization
// ---------------------------------------------------------------------------

#[test]
fn binarize_maps_positive_class_to_one() {
    let labels: Vec<String> = ["L", "B", "R", "B", "L"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let y = binarize_labels(&labels, "B");
    assert_eq!(y.to_vec(), vec![0, 1, 0, 1, 0]);
}

#[test]
fn binarize_output_is_always_binary() {
    let labels: Vec<String> = ["L", "R", "X", ""].iter().map(|s| s.to_string()).collect();
    let y = binarize_labels(&labels, "B");
    assert!(y.iter().all(|&v| v == 0 || v == 1));
    assert_eq!(y.iter().sum::<i32>(), 0, "no row matches the positive class");
}

// ---------------------------------------------------------------------------
// Dataset construction
// ---------------------------------------------------------------------------

#[test]
fn dataset_new_valid() {
    let x = Array2::from_shape_vec((4, 2), vec![1.0; 8]).unwrap();
    let y = Array1::from_vec(vec![1, 0, 1, 0]);
    assert!(Dataset::new(x, y, make_metadata()).is_ok());
}

#[test]
fn dataset_new_dimension_mismatch() {
    let x = Array2::from_shape_vec((4, 2), vec![1.0; 8]).unwrap();
    let y = Array1::from_vec(vec![1, 0]); // wrong length
    assert!(
        Dataset::new(x, y, make_metadata()).is_err(),
        "should error on dimension mismatch"
    );
}

#[test]
fn dataset_new_feature_name_mismatch() {
    let x = Array2::from_shape_vec((2, 3), vec![1.0; 6]).unwrap();
    let y = Array1::from_vec(vec![1, 0]);
    assert!(
        Dataset::new(x, y, make_metadata()).is_err(),
        "should error when feature names do not cover all columns"
    );
}

// ---------------------------------------------------------------------------
// Class bookkeeping
// ---------------------------------------------------------------------------

#[test]
fn class_counts_and_majority() {
    let ds = make_dataset(vec![0, 0, 0, 1]);
    let counts = ds.class_counts();
    assert_eq!(counts[&0], 3);
    assert_eq!(counts[&1], 1);
    assert_eq!(ds.majority_label(), 0);
    assert_eq!(ds.minority_label(), 1);
}

#[test]
fn class_indices_in_dataset_order() {
    let ds = make_dataset(vec![1, 0, 1, 0, 1]);
    assert_eq!(ds.class_indices(1), vec![0, 2, 4]);
    assert_eq!(ds.class_indices(0), vec![1, 3]);
}

// ---------------------------------------------------------------------------
// Row selection
// ---------------------------------------------------------------------------

#[test]
fn select_duplicates_rows() {
    let ds = make_dataset(vec![0, 1, 0]);
    let sub = ds.select(&[1, 1, 0]);
    assert_eq!(sub.n_samples(), 3);
    assert_eq!(sub.y.to_vec(), vec![1, 1, 0]);
    assert_eq!(sub.x.row(0), sub.x.row(1));
}

#[test]
fn filter_by_mask() {
    let ds = make_dataset(vec![0, 1, 0, 1]);
    let mask = Array1::from_vec(vec![false, true, false, true]);
    let sub = ds.filter(&mask);
    assert_eq!(sub.n_samples(), 2);
    assert!(sub.y.iter().all(|&l| l == 1));
}

#[test]
fn concat_appends_rows() {
    let a = make_dataset(vec![0, 0]);
    let b = make_dataset(vec![1]);
    let joined = a.concat(&b).unwrap();
    assert_eq!(joined.n_samples(), 3);
    assert_eq!(joined.y.to_vec(), vec![0, 0, 1]);
}

#[test]
fn concat_schema_mismatch_errors() {
    let a = make_dataset(vec![0, 0]);
    let x = Array2::from_shape_vec((1, 1), vec![1.0]).unwrap();
    let b = Dataset::new(
        x,
        Array1::from_vec(vec![1]),
        DatasetMetadata {
            label_name: "balance".to_string(),
            feature_names: vec!["other".to_string()],
            positive_class: "B".to_string(),
        },
    )
    .unwrap();
    assert!(a.concat(&b).is_err());
}
