use crate::domain::model::{Assessment, Feature, FeatureVector, RawInput};
use crate::utils::error::Result;
use crate::utils::validation::validate_measurement;

/// Turns raw form values into a [`FeatureVector`] plus advisory warnings.
///
/// Warnings never block a prediction. They are only produced once at least one
/// field is non-zero so an untouched form stays quiet.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputValidator;

impl InputValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, raw: &RawInput) -> Result<Assessment> {
        for feature in Feature::ALL {
            validate_measurement(feature, raw.get(feature))?;
        }

        let features = FeatureVector {
            pregnancies: raw.pregnancies as u32,
            glucose: raw.glucose,
            blood_pressure: raw.blood_pressure,
            skin_thickness: raw.skin_thickness,
            insulin: raw.insulin,
            bmi: raw.bmi,
            diabetes_pedigree_function: raw.diabetes_pedigree_function,
            age: raw.age as u32,
        };

        let warnings = if features.is_blank() {
            Vec::new()
        } else {
            Self::zero_warnings(&features)
        };

        if !warnings.is_empty() {
            tracing::debug!("{} advisory warning(s) for current input", warnings.len());
        }

        Ok(Assessment { features, warnings })
    }

    fn zero_warnings(features: &FeatureVector) -> Vec<String> {
        Feature::ALL
            .into_iter()
            .filter(|feature| features.get(*feature) == 0.0)
            .filter_map(Feature::zero_warning)
            .map(str::to_string)
            .collect()
    }
}
