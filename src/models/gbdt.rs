use anyhow::{anyhow, bail, Result};
use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use ndarray::{Array1, Array2};

use crate::config::{ModelConfig, ModelType};
use crate::models::classifier_trait::BinaryClassifier;

/// Gradient Boosting Decision Tree (GBDT) classifier
///
/// The LogLikelyhood loss expects -1/1 training labels, so the crate's 0/1
/// labels are remapped on fit. Predictions come back as positive-class
/// probabilities.
pub struct GbdtClassifier {
    model: Option<GBDT>,
    params: ModelConfig,
}

impl GbdtClassifier {
    pub fn new(params: ModelConfig) -> Self {
        GbdtClassifier {
            model: None,
            params,
        }
    }

    fn fitted(&self) -> Result<&GBDT> {
        self.model
            .as_ref()
            .ok_or_else(|| anyhow!("GBDT model has not been fitted"))
    }
}

impl BinaryClassifier for GbdtClassifier {
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<i32>) -> Result<()> {
        let ModelType::Gbdt {
            max_depth,
            num_boost_round,
            debug,
            training_optimization_level,
            loss_type,
        } = &self.params.model_type
        else {
            bail!(
                "Expected ModelType::Gbdt params, got {:?}",
                self.params.model_type
            );
        };

        let mut config = Config::new();
        config.set_feature_size(x.ncols());
        config.set_shrinkage(self.params.learning_rate);
        config.set_max_depth(*max_depth);
        config.set_iterations(*num_boost_round as usize);
        config.set_debug(*debug);
        config.set_training_optimization_level(*training_optimization_level);
        config.set_loss(loss_type);

        let mut gbdt = GBDT::new(&config);

        let mut train_x = DataVec::with_capacity(x.nrows());
        for (i, row) in x.rows().into_iter().enumerate() {
            let label = if y[i] == 1 { 1.0 } else { -1.0 };
            train_x.push(Data::new_training_data(row.to_vec(), 1.0, label, None));
        }

        gbdt.fit(&mut train_x);
        self.model = Some(gbdt);
        Ok(())
    }

    fn predict(&self, x: &Array2<f32>) -> Result<Array1<i32>> {
        let probs = self.predict_proba(x)?;
        Ok(probs.mapv(|p| i32::from(p > 0.5)))
    }

    fn predict_proba(&self, x: &Array2<f32>) -> Result<Array1<f32>> {
        let mut test_x = DataVec::with_capacity(x.nrows());
        for row in x.rows() {
            test_x.push(Data::new_test_data(row.to_vec(), None));
        }
        let predictions = self.fitted()?.predict(&test_x);
        Ok(Array1::from_vec(predictions))
    }

    fn name(&self) -> &str {
        "gbdt"
    }
}
