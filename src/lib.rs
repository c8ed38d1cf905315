pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LinearModel;
pub use app::{screen_csv, Report};
pub use config::AppConfig;
pub use crate::core::{engine::ScreeningEngine, prediction::PredictionService, validator::InputValidator};
pub use domain::model::{Assessment, Feature, FeatureVector, RawInput, Verdict};
pub use domain::ports::{Classifier, ConfigProvider};
pub use utils::error::{DiabetesError, PredictionError, Result};
