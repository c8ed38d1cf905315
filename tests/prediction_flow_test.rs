use diabetes_check::app::{ErrorKind, Outcome};
use diabetes_check::{
    AppConfig, Classifier, DiabetesError, FeatureVector, LinearModel, PredictionError,
    PredictionService, RawInput, Report, ScreeningEngine, Verdict,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// Records every matrix it is given and answers with a fixed label.
struct RecordingClassifier {
    label: i64,
    calls: AtomicUsize,
    seen: Mutex<Vec<Vec<f64>>>,
}

impl RecordingClassifier {
    fn new(label: i64) -> Arc<Self> {
        Arc::new(Self {
            label,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl Classifier for RecordingClassifier {
    fn predict(&self, matrix: &[Vec<f64>]) -> anyhow::Result<Vec<i64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().extend(matrix.iter().cloned());
        Ok(vec![self.label; matrix.len()])
    }
}

struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _matrix: &[Vec<f64>]) -> anyhow::Result<Vec<i64>> {
        Err(anyhow::anyhow!("model internals exploded"))
    }
}

fn bundled_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("models/diabetes_prediction.json")
}

fn example_input() -> RawInput {
    RawInput::from([2.0, 120.0, 70.0, 30.0, 80.0, 25.0, 0.5, 33.0])
}

#[test]
fn test_example_input_calls_classifier_once_in_field_order() {
    let classifier = RecordingClassifier::new(1);
    let engine = ScreeningEngine::new(classifier.clone());

    let submission = engine.submit(&example_input()).unwrap();

    assert!(submission.assessment.warnings.is_empty());
    assert_eq!(submission.result, Ok(Verdict::Positive));
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        *classifier.seen.lock().unwrap(),
        vec![vec![2.0, 120.0, 70.0, 30.0, 80.0, 25.0, 0.5, 33.0]]
    );
}

#[test]
fn test_all_zero_input_never_reaches_classifier() {
    let classifier = RecordingClassifier::new(0);
    let engine = ScreeningEngine::new(classifier.clone());

    let submission = engine.submit(&RawInput::default()).unwrap();

    assert_eq!(submission.result, Err(PredictionError::EmptyInput));
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_zero_glucose_warns_and_still_predicts() {
    let classifier = RecordingClassifier::new(0);
    let engine = ScreeningEngine::new(classifier.clone());
    let mut raw = example_input();
    raw.glucose = 0.0;

    let submission = engine.submit(&raw).unwrap();

    assert_eq!(submission.assessment.warnings, vec!["Glucose level cannot be 0"]);
    assert_eq!(submission.result, Ok(Verdict::Negative));
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_classifier_failure_is_reported_not_raised() {
    let engine = ScreeningEngine::new(FailingClassifier);
    let submission = engine.submit(&example_input()).unwrap();

    let report = Report::from_submission(submission, &AppConfig::default());
    assert_eq!(
        report.outcome,
        Outcome::Error {
            kind: ErrorKind::InferenceFailure,
            message: "An error occurred: model internals exploded".to_string(),
        }
    );
}

#[test]
fn test_bundled_model_gives_stable_verdicts() {
    let model = LinearModel::from_file(bundled_model_path()).unwrap();
    let service = PredictionService::new(Arc::new(model));

    let healthy = FeatureVector {
        pregnancies: 2,
        glucose: 120.0,
        blood_pressure: 70.0,
        skin_thickness: 30.0,
        insulin: 80.0,
        bmi: 25.0,
        diabetes_pedigree_function: 0.5,
        age: 33,
    };
    let at_risk = FeatureVector {
        pregnancies: 8,
        glucose: 183.0,
        blood_pressure: 64.0,
        skin_thickness: 0.0,
        insulin: 0.0,
        bmi: 23.3,
        diabetes_pedigree_function: 0.672,
        age: 32,
    };

    assert_eq!(service.predict(&healthy), Ok(Verdict::Negative));
    assert_eq!(service.predict(&at_risk), Ok(Verdict::Positive));
    // deterministic for a fixed model
    assert_eq!(service.predict(&healthy), service.predict(&healthy));
}

#[test]
fn test_model_with_wrong_feature_order_fails_at_load() {
    let content = std::fs::read_to_string(bundled_model_path())
        .unwrap()
        .replacen("\"Glucose\"", "\"Tmp\"", 1)
        .replacen("\"Pregnancies\"", "\"Glucose\"", 1)
        .replacen("\"Tmp\"", "\"Pregnancies\"", 1);

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let err = LinearModel::from_file(file.path()).unwrap_err();
    assert!(matches!(err, DiabetesError::ModelLoadError { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_report_uses_configured_illustration() {
    let config = AppConfig::from_toml_str(
        r#"
[presentation]
positive_image = "assets/diabetes-person.png"
negative_image = "assets/health-day.png"
"#,
    )
    .unwrap();
    let engine = ScreeningEngine::new(RecordingClassifier::new(0));

    let report = Report::from_submission(engine.submit(&example_input()).unwrap(), &config);

    assert_eq!(
        report.render_text(),
        "✅ The model predicts that the person is healthy.\n🖼️ assets/health-day.png\n"
    );
}

#[test]
fn test_shared_model_serves_concurrent_sessions() {
    let model = Arc::new(LinearModel::from_file(bundled_model_path()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let model = Arc::clone(&model);
            std::thread::spawn(move || {
                let engine = ScreeningEngine::new(model);
                engine.submit(&example_input()).unwrap().result
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(Verdict::Negative));
    }
}
