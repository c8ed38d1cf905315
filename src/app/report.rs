use crate::core::engine::Submission;
use crate::domain::model::{Assessment, FeatureVector, Verdict};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::PredictionError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Form filled in but not submitted.
    Pending,
    Error {
        kind: ErrorKind,
        message: String,
    },
    Verdict {
        verdict: Verdict,
        label: u8,
        message: String,
        illustration: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    InferenceFailure,
}

/// What the user sees after an interaction with the form.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub evaluated_at: DateTime<Utc>,
    pub features: FeatureVector,
    pub warnings: Vec<String>,
    pub outcome: Outcome,
}

impl Report {
    pub fn pending(assessment: Assessment) -> Self {
        Self {
            evaluated_at: Utc::now(),
            features: assessment.features,
            warnings: assessment.warnings,
            outcome: Outcome::Pending,
        }
    }

    pub fn from_submission<P: ConfigProvider + ?Sized>(submission: Submission, config: &P) -> Self {
        let outcome = match submission.result {
            Ok(verdict) => Outcome::Verdict {
                verdict,
                label: verdict.label(),
                message: verdict.headline().to_string(),
                illustration: config.illustration(verdict).map(str::to_string),
            },
            Err(e) => Outcome::Error {
                kind: match e {
                    PredictionError::EmptyInput => ErrorKind::EmptyInput,
                    PredictionError::InferenceFailure { .. } => ErrorKind::InferenceFailure,
                },
                message: e.to_string(),
            },
        };

        Self {
            evaluated_at: Utc::now(),
            features: submission.assessment.features,
            warnings: submission.assessment.warnings,
            outcome,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for warning in &self.warnings {
            let _ = writeln!(out, "⚠️ {}", warning);
        }

        match &self.outcome {
            Outcome::Pending => {}
            Outcome::Error { message, .. } => {
                let _ = writeln!(out, "❌ {}", message);
            }
            Outcome::Verdict {
                verdict,
                message,
                illustration,
                ..
            } => {
                let marker = match verdict {
                    Verdict::Positive => "⚠️",
                    Verdict::Negative => "✅",
                };
                let _ = writeln!(out, "{} {}", marker, message);
                if let Some(image) = illustration {
                    let _ = writeln!(out, "🖼️ {}", image);
                }
            }
        }

        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct Images;

    impl ConfigProvider for Images {
        fn model_path(&self) -> &Path {
            Path::new("model.json")
        }

        fn illustration(&self, verdict: Verdict) -> Option<&str> {
            match verdict {
                Verdict::Positive => Some("diabetes-person.png"),
                Verdict::Negative => Some("health-day.png"),
            }
        }
    }

    fn submission(result: Result<Verdict, PredictionError>, warnings: Vec<String>) -> Submission {
        Submission {
            assessment: Assessment {
                features: FeatureVector::default(),
                warnings,
            },
            result,
        }
    }

    #[test]
    fn positive_verdict_text() {
        let report = Report::from_submission(submission(Ok(Verdict::Positive), vec![]), &Images);
        assert_eq!(
            report.render_text(),
            "⚠️ The model predicts that the person has diabetes.\n🖼️ diabetes-person.png\n"
        );
    }

    #[test]
    fn negative_verdict_text() {
        let report = Report::from_submission(submission(Ok(Verdict::Negative), vec![]), &Images);
        assert!(report
            .render_text()
            .starts_with("✅ The model predicts that the person is healthy."));
        assert!(matches!(report.outcome, Outcome::Verdict { .. }));
    }

    #[test]
    fn empty_input_text() {
        let report = Report::from_submission(
            submission(Err(PredictionError::EmptyInput), vec![]),
            &Images,
        );
        assert_eq!(
            report.render_text(),
            "❌ Please enter valid values before making a prediction.\n"
        );
        assert!(matches!(
            report.outcome,
            Outcome::Error {
                kind: ErrorKind::EmptyInput,
                ..
            }
        ));
    }

    #[test]
    fn inference_failure_keeps_message() {
        let report = Report::from_submission(
            submission(Err(PredictionError::inference("boom")), vec![]),
            &Images,
        );
        assert_eq!(report.render_text(), "❌ An error occurred: boom\n");
    }

    #[test]
    fn warnings_precede_outcome() {
        let report = Report::from_submission(
            submission(Ok(Verdict::Negative), vec!["BMI cannot be 0".to_string()]),
            &Images,
        );
        assert!(report.render_text().starts_with("⚠️ BMI cannot be 0\n✅"));
    }

    #[test]
    fn json_report_shape() {
        let report = Report::from_submission(submission(Ok(Verdict::Positive), vec![]), &Images);
        let value: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();

        assert_eq!(value["outcome"]["status"], "verdict");
        assert_eq!(value["outcome"]["verdict"], "positive");
        assert_eq!(value["outcome"]["label"], 1);
        assert_eq!(value["features"]["BMI"], 0.0);
        assert!(value["evaluated_at"].is_string());
    }

    #[test]
    fn pending_report_only_shows_warnings() {
        let report = Report::pending(Assessment {
            features: FeatureVector::default(),
            warnings: vec!["Insulin level should be greater than 0".to_string()],
        });
        assert_eq!(
            report.render_text(),
            "⚠️ Insulin level should be greater than 0\n"
        );
    }
}
