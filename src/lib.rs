//! seesaw-classifiers: class-imbalance handling for binary classifiers.
//!
//! This crate provides lightweight model wrappers (logistic regression, SVM,
//! GBDT), dataset handling and seeded resampling utilities, ranking metrics
//! (accuracy, confusion matrix, AUROC), and reporting/plotting helpers used
//! by the balance-scale study binary.
//!
//! The design favors small, testable modules; each remediation strategy is a
//! thin wrapper over an established model crate so results stay comparable.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod models;
pub mod report;
pub mod sampling;
pub mod stats;
pub mod study;
