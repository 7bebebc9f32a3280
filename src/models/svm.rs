use anyhow::{anyhow, bail, Result};
use linfa::dataset::Pr;
use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_svm::Svm;
use ndarray::{Array1, Array2};

use crate::config::{ModelConfig, ModelType};
use crate::models::classifier_trait::BinaryClassifier;

/// Support-vector classifier with per-class penalty weights.
///
/// Positive labels (1) map to `true` targets so the calibrated probabilities
/// score the positive class. Cost-sensitive training is expressed through the
/// `c` weight pair; see [`balanced_class_weights`].
pub struct SvmClassifier {
    model: Option<Svm<f64, Pr>>,
    params: ModelConfig,
}

/// Per-class penalty multipliers inversely proportional to class frequency:
/// `n_samples / (2 * n_class)` for each class, the "balanced" weighting.
///
/// Returns `(positive_weight, negative_weight)`.
pub fn balanced_class_weights(y: &Array1<i32>) -> Result<(f64, f64)> {
    let n_pos = y.iter().filter(|&&l| l == 1).count();
    let n_neg = y.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        bail!("Balanced class weights require both classes to be present");
    }
    let n = y.len() as f64;
    Ok((n / (2.0 * n_pos as f64), n / (2.0 * n_neg as f64)))
}

impl SvmClassifier {
    pub fn new(params: ModelConfig) -> Self {
        SvmClassifier {
            model: None,
            params,
        }
    }

    fn fitted(&self) -> Result<&Svm<f64, Pr>> {
        self.model
            .as_ref()
            .ok_or_else(|| anyhow!("SVM model has not been fitted"))
    }
}

impl BinaryClassifier for SvmClassifier {
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<i32>) -> Result<()> {
        let ModelType::Svm {
            eps,
            c,
            kernel,
            gaussian_kernel_eps,
            polynomial_kernel_constant,
            polynomial_kernel_degree,
        } = &self.params.model_type
        else {
            bail!(
                "Expected ModelType::Svm params, got {:?}",
                self.params.model_type
            );
        };

        let targets = y.mapv(|l| l == 1);
        let x_f64 = x.mapv(|v| v as f64);
        let dataset = Dataset::new(x_f64, targets);

        let (c_pos, c_neg) = *c;
        let mut params = Svm::<f64, Pr>::params()
            .eps(*eps)
            .pos_neg_weights(c_pos, c_neg);

        params = match kernel.as_str() {
            "linear" => params.linear_kernel(),
            "gauss" => params.gaussian_kernel(*gaussian_kernel_eps),
            "poly" => params.polynomial_kernel(
                *polynomial_kernel_constant,
                *polynomial_kernel_degree,
            ),
            _ => bail!(
                "Unsupported kernel type: {}. Valid options are: linear, gauss, poly",
                kernel
            ),
        };

        self.model = Some(params.fit(&dataset)?);
        Ok(())
    }

    fn predict(&self, x: &Array2<f32>) -> Result<Array1<i32>> {
        let probs = self.predict_proba(x)?;
        Ok(probs.mapv(|p| i32::from(p > 0.5)))
    }

    fn predict_proba(&self, x: &Array2<f32>) -> Result<Array1<f32>> {
        let x_f64 = x.mapv(|v| v as f64);
        let probs: Array1<Pr> = self.fitted()?.predict(&x_f64);
        Ok(probs.mapv(|p| *p))
    }

    fn name(&self) -> &str {
        "svm"
    }
}
