use crate::domain::model::{Feature, FEATURE_COUNT};
use crate::domain::ports::Classifier;
use crate::utils::error::{DiabetesError, Result};
use anyhow::{bail, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Linear decision function exported from a trained model, optionally preceded by
/// standard scaling. Label 1 when the decision value exceeds `threshold`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub name: String,
    pub feature_names: Vec<String>,
    pub scaler: Option<StandardScaler>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub threshold: f64,
}

impl LinearModel {
    /// Loads and checks a JSON artifact. Any problem is fatal for the caller.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let content = std::fs::read_to_string(path)
            .map_err(|e| DiabetesError::model_load(&shown, e.to_string()))?;
        let model = Self::from_json_str(&content)
            .map_err(|e| DiabetesError::model_load(&shown, e.to_string()))?;

        tracing::info!("Loaded model '{}' from {}", model.name, shown);
        Ok(model)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let model: LinearModel = serde_json::from_str(content)?;
        model.check().map_err(|e| DiabetesError::config(e.to_string()))?;
        Ok(model)
    }

    fn check(&self) -> anyhow::Result<()> {
        let expected: Vec<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
        ensure!(
            self.feature_names == expected,
            "feature_names {:?} do not match the expected order {:?}",
            self.feature_names,
            expected
        );
        ensure!(
            self.coefficients.len() == FEATURE_COUNT,
            "expected {} coefficients, found {}",
            FEATURE_COUNT,
            self.coefficients.len()
        );
        ensure!(
            self.coefficients.iter().all(|c| c.is_finite())
                && self.intercept.is_finite()
                && self.threshold.is_finite(),
            "model parameters must be finite"
        );

        if let Some(scaler) = &self.scaler {
            ensure!(
                scaler.mean.len() == FEATURE_COUNT && scaler.scale.len() == FEATURE_COUNT,
                "scaler must have {} means and {} scales",
                FEATURE_COUNT,
                FEATURE_COUNT
            );
            ensure!(
                scaler.mean.iter().all(|m| m.is_finite()),
                "scaler means must be finite"
            );
            ensure!(
                scaler.scale.iter().all(|s| s.is_finite() && *s != 0.0),
                "scaler scales must be finite and non-zero"
            );
        }

        Ok(())
    }

    pub fn decision_function(&self, row: &[f64]) -> anyhow::Result<f64> {
        if row.len() != self.coefficients.len() {
            bail!(
                "X has {} features, but {} is expecting {} features as input",
                row.len(),
                self.name,
                self.coefficients.len()
            );
        }
        if let Some(pos) = row.iter().position(|v| !v.is_finite()) {
            bail!("input contains a non-finite value in column {}", pos);
        }

        let sum: f64 = match &self.scaler {
            Some(scaler) => row
                .iter()
                .zip(&scaler.mean)
                .zip(&scaler.scale)
                .zip(&self.coefficients)
                .map(|(((x, m), s), w)| w * (x - m) / s)
                .sum(),
            None => row
                .iter()
                .zip(&self.coefficients)
                .map(|(x, w)| w * x)
                .sum(),
        };

        let value = sum + self.intercept;
        ensure!(value.is_finite(), "decision value is not finite");
        Ok(value)
    }
}

impl Classifier for LinearModel {
    fn predict(&self, matrix: &[Vec<f64>]) -> anyhow::Result<Vec<i64>> {
        matrix
            .iter()
            .map(|row| {
                self.decision_function(row)
                    .map(|d| if d > self.threshold { 1 } else { 0 })
            })
            .collect()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
