use crate::domain::model::RawInput;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The eight form fields. Anything left out counts as 0.
#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    #[arg(long, default_value_t = 0, help = "Number of times pregnant")]
    pub pregnancies: u32,

    #[arg(long, default_value_t = 0.0, help = "Blood glucose level (mg/dL)")]
    pub glucose: f64,

    #[arg(long, default_value_t = 0.0, help = "Blood pressure (mm Hg)")]
    pub blood_pressure: f64,

    #[arg(long, default_value_t = 0.0, help = "Skin thickness (mm)")]
    pub skin_thickness: f64,

    #[arg(long, default_value_t = 0.0, help = "Insulin level (mu U/ml)")]
    pub insulin: f64,

    #[arg(long, default_value_t = 0.0, help = "Body Mass Index (kg/m²)")]
    pub bmi: f64,

    #[arg(long, default_value_t = 0.0, help = "Diabetes pedigree function (family history factor)")]
    pub diabetes_pedigree_function: f64,

    #[arg(long, default_value_t = 0, help = "Age (years)")]
    pub age: u32,
}

impl From<&FormArgs> for RawInput {
    fn from(form: &FormArgs) -> Self {
        RawInput {
            pregnancies: f64::from(form.pregnancies),
            glucose: form.glucose,
            blood_pressure: form.blood_pressure,
            skin_thickness: form.skin_thickness,
            insulin: form.insulin,
            bmi: form.bmi,
            diabetes_pedigree_function: form.diabetes_pedigree_function,
            age: f64::from(form.age),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Only show advisory warnings, do not submit
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// CSV file with one patient per row and the standard column headers
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the results; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
