use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for models in the crate.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ModelConfig {
    pub learning_rate: f32,

    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported model types and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ModelType {
    Logistic {
        max_iterations: u64,
        gradient_tolerance: f64,
        alpha: f64,
    },
    Svm {
        eps: f64,
        c: (f64, f64),
        kernel: String,
        gaussian_kernel_eps: f64,
        polynomial_kernel_constant: f64,
        polynomial_kernel_degree: f64,
    },
    Gbdt {
        max_depth: u32,
        num_boost_round: u32,
        debug: bool,
        training_optimization_level: u8,
        loss_type: String,
    },
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::Logistic {
            max_iterations: 100,
            gradient_tolerance: 1e-4,
            alpha: 1.0,
        }
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logistic" => Ok(ModelType::Logistic {
                max_iterations: 100,
                gradient_tolerance: 1e-4,
                alpha: 1.0,
            }),
            "svm" => Ok(ModelType::Svm {
                eps: 0.1,
                c: (1.0, 1.0),
                kernel: "linear".to_string(),
                gaussian_kernel_eps: 0.1,
                polynomial_kernel_constant: 1.0,
                polynomial_kernel_degree: 3.0,
            }),
            "gbdt" => Ok(ModelType::Gbdt {
                max_depth: 6,
                num_boost_round: 50,
                debug: false,
                training_optimization_level: 2,
                loss_type: "LogLikelyhood".to_string(),
            }),
            _ => Err(format!(
                "Unknown model type: {}. Valid options are: logistic, svm, gbdt",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(learning_rate: f32, model_type: ModelType) -> Self {
        Self {
            learning_rate,
            model_type,
        }
    }

    pub fn logistic() -> Self {
        Self::new(0.1, ModelType::default())
    }

    pub fn svm() -> Self {
        Self::new(
            0.1,
            ModelType::Svm {
                eps: 0.1,
                c: (1.0, 1.0),
                kernel: "linear".to_string(),
                gaussian_kernel_eps: 0.1,
                polynomial_kernel_constant: 1.0,
                polynomial_kernel_degree: 3.0,
            },
        )
    }

    pub fn gbdt() -> Self {
        Self::new(
            0.1,
            ModelType::Gbdt {
                max_depth: 6,
                num_boost_round: 50,
                debug: false,
                training_optimization_level: 2,
                loss_type: "LogLikelyhood".to_string(),
            },
        )
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            model_type: ModelType::default(),
        }
    }
}

/// Configuration for the full imbalance study.
///
/// The defaults reproduce the canonical balance-scale run: seed 123, resample
/// targets derived from the observed class counts, linear SVM with balanced
/// class weights, and a 50-round GBDT ensemble.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct StudyConfig {
    /// Seed for the resampling RNG; fixed so row counts and draws reproduce.
    pub seed: u64,
    /// Explicit upsample target; `None` matches the majority count.
    pub upsample_target: Option<usize>,
    /// Explicit downsample target; `None` matches the minority count.
    pub downsample_target: Option<usize>,
    pub linear_model: ModelConfig,
    pub cost_sensitive_model: ModelConfig,
    pub ensemble_model: ModelConfig,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            seed: 123,
            upsample_target: None,
            downsample_target: None,
            linear_model: ModelConfig::logistic(),
            cost_sensitive_model: ModelConfig::svm(),
            ensemble_model: ModelConfig::gbdt(),
        }
    }
}
