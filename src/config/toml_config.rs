use crate::domain::model::Verdict;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DiabetesError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL_PATH: &str = "models/diabetes_prediction.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub presentation: PresentationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresentationConfig {
    pub positive_image: Option<String>,
    pub negative_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DiabetesError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // Substitute environment variables first
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DiabetesError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // Match the ${VAR_NAME} form
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| DiabetesError::config(format!("invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Check the configuration for consistency
    pub fn validate_config(&self) -> Result<()> {
        // Model artifact path
        validation::validate_path("model.path", &self.model.path)?;
        validation::validate_file_extension("model.path", &self.model.path, &["json"])?;

        // Illustration paths, when set
        for (field, image) in [
            ("presentation.positive_image", &self.presentation.positive_image),
            ("presentation.negative_image", &self.presentation.negative_image),
        ] {
            if let Some(image) = image {
                validation::validate_non_empty_string(field, image)?;
            }
        }

        // Logging options
        validation::validate_one_of(
            "logging.level",
            &self.logging.level,
            &["trace", "debug", "info", "warn", "error"],
        )?;
        validation::validate_one_of("logging.format", &self.logging.format, &["compact", "json"])?;

        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn model_path(&self) -> &Path {
        &self.model.path
    }

    fn illustration(&self, verdict: Verdict) -> Option<&str> {
        match verdict {
            Verdict::Positive => self.presentation.positive_image.as_deref(),
            Verdict::Negative => self.presentation.negative_image.as_deref(),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[model]
path = "models/custom.json"

[presentation]
positive_image = "assets/diabetes-person.png"
negative_image = "assets/health-day.png"

[logging]
level = "debug"
format = "json"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.model_path(), Path::new("models/custom.json"));
        assert_eq!(
            config.illustration(Verdict::Positive),
            Some("assets/diabetes-person.png")
        );
        assert_eq!(config.logging.format, "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.model_path(), Path::new(DEFAULT_MODEL_PATH));
        assert_eq!(config.illustration(Verdict::Negative), None);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DIABETES_CHECK_TEST_MODEL", "/opt/models/m.json");

        let toml_content = r#"
[model]
path = "${DIABETES_CHECK_TEST_MODEL}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.model_path(), Path::new("/opt/models/m.json"));

        std::env::remove_var("DIABETES_CHECK_TEST_MODEL");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[model]
path = "model.sav"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let bad_format = AppConfig::from_toml_str("[logging]\nlevel = \"info\"\nformat = \"xml\"\n")
            .unwrap();
        assert!(bad_format.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[model]\npath = \"from-file.json\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.model_path(), Path::new("from-file.json"));
    }
}
