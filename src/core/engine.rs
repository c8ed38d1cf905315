use crate::core::prediction::{PredictionResult, PredictionService};
use crate::core::validator::InputValidator;
use crate::domain::model::{Assessment, RawInput};
use crate::domain::ports::Classifier;
use crate::utils::error::Result;
use std::time::Instant;

/// Outcome of one submit action.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub assessment: Assessment,
    pub result: PredictionResult,
}

pub struct ScreeningEngine<C: Classifier> {
    validator: InputValidator,
    service: PredictionService<C>,
}

impl<C: Classifier> ScreeningEngine<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            validator: InputValidator::new(),
            service: PredictionService::new(classifier),
        }
    }

    pub fn service(&self) -> &PredictionService<C> {
        &self.service
    }

    /// Form is being filled in; nothing is submitted.
    pub fn assess(&self, raw: &RawInput) -> Result<Assessment> {
        self.validator.assess(raw)
    }

    /// Validates then predicts. Only malformed input is returned as `Err`;
    /// prediction errors are part of the submission.
    pub fn submit(&self, raw: &RawInput) -> Result<Submission> {
        let start = Instant::now();

        let assessment = self.validator.assess(raw)?;
        for warning in &assessment.warnings {
            tracing::warn!("⚠️ {}", warning);
        }

        let result = self.service.predict(&assessment.features);
        match &result {
            Ok(verdict) => tracing::info!(
                "🔮 Prediction: {} (label {}) in {:?}",
                verdict,
                verdict.label(),
                start.elapsed()
            ),
            Err(e) => tracing::info!("❌ Prediction not available: {}", e),
        }

        Ok(Submission { assessment, result })
    }
}
