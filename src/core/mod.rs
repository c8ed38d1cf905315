pub mod engine;
pub mod prediction;
pub mod validator;

pub use crate::domain::model::{Assessment, Feature, FeatureVector, RawInput, Verdict};
pub use crate::domain::ports::{Classifier, ConfigProvider};
pub use crate::utils::error::Result;
