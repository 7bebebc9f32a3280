use anyhow::{anyhow, bail, Result};
use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_logistic::{FittedLogisticRegression, LogisticRegression};
use ndarray::{Array1, Array2};

use crate::config::{ModelConfig, ModelType};
use crate::models::classifier_trait::BinaryClassifier;

/// Logistic regression classifier.
///
/// Labels are passed to linfa as 0/1, so `predict_probabilities` yields the
/// probability of class 1 (the larger label).
pub struct LogisticClassifier {
    model: Option<FittedLogisticRegression<f64, usize>>,
    params: ModelConfig,
}

impl LogisticClassifier {
    pub fn new(params: ModelConfig) -> Self {
        LogisticClassifier {
            model: None,
            params,
        }
    }

    fn fitted(&self) -> Result<&FittedLogisticRegression<f64, usize>> {
        self.model
            .as_ref()
            .ok_or_else(|| anyhow!("Logistic model has not been fitted"))
    }
}

impl BinaryClassifier for LogisticClassifier {
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<i32>) -> Result<()> {
        let ModelType::Logistic {
            max_iterations,
            gradient_tolerance,
            alpha,
        } = &self.params.model_type
        else {
            bail!(
                "Expected ModelType::Logistic params, got {:?}",
                self.params.model_type
            );
        };

        let x_f64 = x.mapv(|v| v as f64);
        let targets = y.mapv(|l| l as usize);
        let dataset = Dataset::new(x_f64, targets);

        let fitted = LogisticRegression::default()
            .max_iterations(*max_iterations)
            .gradient_tolerance(*gradient_tolerance)
            .alpha(*alpha)
            .fit(&dataset)?;
        self.model = Some(fitted);
        Ok(())
    }

    fn predict(&self, x: &Array2<f32>) -> Result<Array1<i32>> {
        let x_f64 = x.mapv(|v| v as f64);
        let labels = self.fitted()?.predict(&x_f64);
        Ok(labels.mapv(|l| l as i32))
    }

    fn predict_proba(&self, x: &Array2<f32>) -> Result<Array1<f32>> {
        let x_f64 = x.mapv(|v| v as f64);
        let probs = self.fitted()?.predict_probabilities(&x_f64);
        Ok(probs.mapv(|p| p as f32))
    }

    fn name(&self) -> &str {
        "logistic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logistic_classifier() {
        // Two well separated clusters along the first feature
        let x = Array2::from_shape_vec(
            (10, 2),
            vec![
                0.1, 0.2, 0.3, 0.1, 0.2, 0.4, 0.4, 0.3, 0.1, 0.1, 5.1, 5.2, 5.3, 5.1, 5.2, 5.4,
                5.4, 5.3, 5.1, 5.1,
            ],
        )
        .unwrap();
        let y = Array1::from_vec(vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1]);

        let mut classifier = LogisticClassifier::new(ModelConfig::logistic());
        classifier.fit(&x, &y).unwrap();

        let preds = classifier.predict(&x).unwrap();
        assert_eq!(preds.len(), x.nrows());
        assert!(preds.iter().all(|&p| p == 0 || p == 1));

        let probs = classifier.predict_proba(&x).unwrap();
        assert_eq!(probs.len(), x.nrows());
        assert!(probs.iter().all(|&p| (0.0..=1.0).contains(&p)));
        // Separable clusters: the positive cluster must score higher
        assert!(probs[9] > probs[0]);
    }

    #[test]
    fn test_predict_before_fit_errors() {
        let classifier = LogisticClassifier::new(ModelConfig::logistic());
        let x = Array2::from_shape_vec((2, 2), vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        assert!(classifier.predict(&x).is_err());
    }
}
