use anyhow::Result;
use ndarray::{Array1, Array2};

/// A small trait abstraction for the classifier models compared by the
/// imbalance study. Centralizing the contract here lets the study drive every
/// remediation strategy through the same fit/predict surface.
pub trait BinaryClassifier {
    /// Fit the model. `y` uses the crate convention (1 positive, 0 negative).
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<i32>) -> Result<()>;

    /// Predict hard 0/1 labels.
    fn predict(&self, x: &Array2<f32>) -> Result<Array1<i32>>;

    /// Predict positive-class probabilities in [0, 1]. Implementations that
    /// only produce margins should convert appropriately.
    fn predict_proba(&self, x: &Array2<f32>) -> Result<Array1<f32>>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
