use crate::domain::model::{FeatureVector, Verdict};
use crate::domain::ports::Classifier;
use crate::utils::error::PredictionError;

pub type PredictionResult = std::result::Result<Verdict, PredictionError>;

/// Wraps a loaded classifier. The classifier is shared read-only; the service keeps
/// no state between requests.
pub struct PredictionService<C: Classifier> {
    classifier: C,
}

impl<C: Classifier> PredictionService<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Single submission. All-zero input is rejected before the classifier runs;
    /// classifier failures come back as `InferenceFailure`.
    pub fn predict(&self, features: &FeatureVector) -> PredictionResult {
        if features.is_blank() {
            tracing::debug!("Rejecting blank submission without inference");
            return Err(PredictionError::EmptyInput);
        }

        let labels = self.run(&[features.to_row()])?;
        Self::to_verdict(labels[0])
    }

    /// Many submissions with one classifier call for every non-blank row.
    pub fn predict_batch(&self, vectors: &[FeatureVector]) -> Vec<PredictionResult> {
        let mut results: Vec<Option<PredictionResult>> = vectors
            .iter()
            .map(|v| v.is_blank().then_some(Err(PredictionError::EmptyInput)))
            .collect();

        let pending: Vec<usize> = results
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_none())
            .map(|(idx, _)| idx)
            .collect();

        if !pending.is_empty() {
            let matrix: Vec<Vec<f64>> = pending.iter().map(|&idx| vectors[idx].to_row()).collect();
            match self.run(&matrix) {
                Ok(labels) => {
                    for (&idx, label) in pending.iter().zip(labels) {
                        results[idx] = Some(Self::to_verdict(label));
                    }
                }
                Err(e) => {
                    for &idx in &pending {
                        results[idx] = Some(Err(e.clone()));
                    }
                }
            }
        }

        results
            .into_iter()
            .map(|r| r.unwrap_or(Err(PredictionError::EmptyInput)))
            .collect()
    }

    fn run(&self, matrix: &[Vec<f64>]) -> std::result::Result<Vec<i64>, PredictionError> {
        tracing::debug!(
            "Running {} on {} row(s)",
            self.classifier.name(),
            matrix.len()
        );

        let labels = self.classifier.predict(matrix).map_err(|e| {
            tracing::warn!("Inference failed: {:#}", e);
            PredictionError::inference(format!("{:#}", e))
        })?;

        if labels.len() != matrix.len() {
            return Err(PredictionError::inference(format!(
                "classifier returned {} label(s) for {} row(s)",
                labels.len(),
                matrix.len()
            )));
        }

        Ok(labels)
    }

    fn to_verdict(label: i64) -> PredictionResult {
        Verdict::from_label(label).ok_or_else(|| {
            PredictionError::inference(format!("unexpected label {} from classifier", label))
        })
    }
}
