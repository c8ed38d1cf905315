use serde::{Deserialize, Deserializer, Serialize};

pub const FEATURE_COUNT: usize = 8;

/// One of the eight clinical measurements, in the order the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    #[serde(rename = "BMI")]
    Bmi,
    DiabetesPedigreeFunction,
    Age,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Pregnancies,
        Feature::Glucose,
        Feature::BloodPressure,
        Feature::SkinThickness,
        Feature::Insulin,
        Feature::Bmi,
        Feature::DiabetesPedigreeFunction,
        Feature::Age,
    ];

    /// Column name used by the training data and the model artifact.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Pregnancies => "Pregnancies",
            Feature::Glucose => "Glucose",
            Feature::BloodPressure => "BloodPressure",
            Feature::SkinThickness => "SkinThickness",
            Feature::Insulin => "Insulin",
            Feature::Bmi => "BMI",
            Feature::DiabetesPedigreeFunction => "DiabetesPedigreeFunction",
            Feature::Age => "Age",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Feature::Pregnancies => "Number of times pregnant",
            Feature::Glucose => "Blood glucose level (mg/dL)",
            Feature::BloodPressure => "Blood pressure (mm Hg)",
            Feature::SkinThickness => "Skin thickness (mm)",
            Feature::Insulin => "Insulin level (mu U/ml)",
            Feature::Bmi => "Body Mass Index (kg/m²)",
            Feature::DiabetesPedigreeFunction => {
                "Diabetes pedigree function (family history factor)"
            }
            Feature::Age => "Age (years)",
        }
    }

    /// Integer-stepped fields; the rest accept decimals.
    pub fn is_integer(self) -> bool {
        matches!(self, Feature::Pregnancies | Feature::Age)
    }

    /// Advisory shown when the field is exactly zero. `None` means zero is a valid
    /// measurement for the field.
    pub fn zero_warning(self) -> Option<&'static str> {
        match self {
            Feature::Glucose => Some("Glucose level cannot be 0"),
            Feature::BloodPressure => Some("Blood Pressure should be greater than 0"),
            Feature::SkinThickness => Some("Skin Thickness cannot be 0"),
            Feature::Insulin => Some("Insulin level should be greater than 0"),
            Feature::Bmi => Some("BMI cannot be 0"),
            Feature::Pregnancies | Feature::DiabetesPedigreeFunction | Feature::Age => None,
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unvalidated form state. Every field defaults to 0 when left unfilled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInput {
    #[serde(rename = "Pregnancies", deserialize_with = "blank_as_zero")]
    pub pregnancies: f64,
    #[serde(rename = "Glucose", deserialize_with = "blank_as_zero")]
    pub glucose: f64,
    #[serde(rename = "BloodPressure", deserialize_with = "blank_as_zero")]
    pub blood_pressure: f64,
    #[serde(rename = "SkinThickness", deserialize_with = "blank_as_zero")]
    pub skin_thickness: f64,
    #[serde(rename = "Insulin", deserialize_with = "blank_as_zero")]
    pub insulin: f64,
    #[serde(rename = "BMI", deserialize_with = "blank_as_zero")]
    pub bmi: f64,
    #[serde(rename = "DiabetesPedigreeFunction", deserialize_with = "blank_as_zero")]
    pub diabetes_pedigree_function: f64,
    #[serde(rename = "Age", deserialize_with = "blank_as_zero")]
    pub age: f64,
}

/// An empty cell is an unfilled field, which counts as 0.
fn blank_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl RawInput {
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Pregnancies => self.pregnancies,
            Feature::Glucose => self.glucose,
            Feature::BloodPressure => self.blood_pressure,
            Feature::SkinThickness => self.skin_thickness,
            Feature::Insulin => self.insulin,
            Feature::Bmi => self.bmi,
            Feature::DiabetesPedigreeFunction => self.diabetes_pedigree_function,
            Feature::Age => self.age,
        }
    }
}

impl From<[f64; FEATURE_COUNT]> for RawInput {
    fn from(v: [f64; FEATURE_COUNT]) -> Self {
        Self {
            pregnancies: v[0],
            glucose: v[1],
            blood_pressure: v[2],
            skin_thickness: v[3],
            insulin: v[4],
            bmi: v[5],
            diabetes_pedigree_function: v[6],
            age: v[7],
        }
    }
}

/// Validated measurements for one patient. Built fresh per submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    #[serde(rename = "Pregnancies")]
    pub pregnancies: u32,
    #[serde(rename = "Glucose")]
    pub glucose: f64,
    #[serde(rename = "BloodPressure")]
    pub blood_pressure: f64,
    #[serde(rename = "SkinThickness")]
    pub skin_thickness: f64,
    #[serde(rename = "Insulin")]
    pub insulin: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "DiabetesPedigreeFunction")]
    pub diabetes_pedigree_function: f64,
    #[serde(rename = "Age")]
    pub age: u32,
}

impl FeatureVector {
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Pregnancies => f64::from(self.pregnancies),
            Feature::Glucose => self.glucose,
            Feature::BloodPressure => self.blood_pressure,
            Feature::SkinThickness => self.skin_thickness,
            Feature::Insulin => self.insulin,
            Feature::Bmi => self.bmi,
            Feature::DiabetesPedigreeFunction => self.diabetes_pedigree_function,
            Feature::Age => f64::from(self.age),
        }
    }

    /// Values in training order.
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        Feature::ALL.map(|feature| self.get(feature))
    }

    /// One row of the classifier's input matrix.
    pub fn to_row(&self) -> Vec<f64> {
        self.values().to_vec()
    }

    /// True when nothing has been entered yet.
    pub fn is_blank(&self) -> bool {
        self.values().iter().all(|v| *v == 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Negative,
    Positive,
}

impl Verdict {
    /// Maps a classifier label; anything other than 0 or 1 is not a verdict.
    pub fn from_label(label: i64) -> Option<Self> {
        match label {
            0 => Some(Verdict::Negative),
            1 => Some(Verdict::Positive),
            _ => None,
        }
    }

    pub fn label(self) -> u8 {
        match self {
            Verdict::Negative => 0,
            Verdict::Positive => 1,
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Verdict::Negative => "The model predicts that the person is healthy.",
            Verdict::Positive => "The model predicts that the person has diabetes.",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Negative => f.write_str("negative"),
            Verdict::Positive => f.write_str("positive"),
        }
    }
}

/// Validator output: the vector is always present, warnings are advisory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub features: FeatureVector,
    pub warnings: Vec<String>,
}
