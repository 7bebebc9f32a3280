use crate::config::{ModelConfig, ModelType};
use crate::models::classifier_trait::BinaryClassifier;

/// Build a boxed classifier model from a `ModelConfig`.
/// Currently this is a thin factory implemented as a single function.
pub fn build_model(params: ModelConfig) -> Box<dyn BinaryClassifier> {
    match params.model_type {
        ModelType::Logistic { .. } => {
            Box::new(crate::models::logistic::LogisticClassifier::new(params))
        }

        ModelType::Svm { .. } => Box::new(crate::models::svm::SvmClassifier::new(params)),

        ModelType::Gbdt { .. } => Box::new(crate::models::gbdt::GbdtClassifier::new(params)),
    }
}
