use std::path::Path;
use std::sync::Arc;

/// A pre-trained binary classifier. Each input row yields one label, 0 or 1.
///
/// Failures are opaque to the caller; the prediction service turns them into a
/// user-facing message.
pub trait Classifier: Send + Sync {
    fn predict(&self, matrix: &[Vec<f64>]) -> anyhow::Result<Vec<i64>>;

    fn name(&self) -> &str {
        "classifier"
    }
}

impl<T: Classifier + ?Sized> Classifier for Arc<T> {
    fn predict(&self, matrix: &[Vec<f64>]) -> anyhow::Result<Vec<i64>> {
        (**self).predict(matrix)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn model_path(&self) -> &Path;
    fn illustration(&self, verdict: crate::domain::model::Verdict) -> Option<&str>;
}
