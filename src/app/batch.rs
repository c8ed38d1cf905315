use crate::core::engine::ScreeningEngine;
use crate::domain::model::{FeatureVector, RawInput};
use crate::domain::ports::Classifier;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::{Read, Write};

/// One line of the batch output file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub row: usize,
    pub verdict: Option<String>,
    pub label: Option<u8>,
    pub warnings: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub positive: usize,
    pub negative: usize,
    pub failed: usize,
}

enum Parsed {
    Ready { features: FeatureVector, warnings: Vec<String> },
    Rejected(String),
}

/// Screens every CSV row through the same validator and service as a single
/// submission. Bad rows are reported in place; the batch keeps going.
pub fn screen_csv<C, R, W>(engine: &ScreeningEngine<C>, input: R, output: W) -> Result<BatchSummary>
where
    C: Classifier,
    R: Read,
    W: Write,
{
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);

    let parsed: Vec<Parsed> = reader
        .deserialize::<RawInput>()
        .map(|record| match record {
            Ok(raw) => match engine.assess(&raw) {
                Ok(assessment) => Parsed::Ready {
                    features: assessment.features,
                    warnings: assessment.warnings,
                },
                Err(e) => Parsed::Rejected(e.to_string()),
            },
            Err(e) => Parsed::Rejected(e.to_string()),
        })
        .collect();

    let vectors: Vec<FeatureVector> = parsed
        .iter()
        .filter_map(|p| match p {
            Parsed::Ready { features, .. } => Some(*features),
            Parsed::Rejected(_) => None,
        })
        .collect();
    let mut predictions = engine.service().predict_batch(&vectors).into_iter();

    let mut writer = csv::Writer::from_writer(output);
    let mut summary = BatchSummary::default();

    for (idx, item) in parsed.into_iter().enumerate() {
        let row = match item {
            Parsed::Ready { warnings, .. } => {
                let warnings = warnings.join("; ");
                match predictions.next() {
                    Some(Ok(verdict)) => {
                        match verdict.label() {
                            1 => summary.positive += 1,
                            _ => summary.negative += 1,
                        }
                        BatchRow {
                            row: idx + 1,
                            verdict: Some(verdict.to_string()),
                            label: Some(verdict.label()),
                            warnings,
                            error: None,
                        }
                    }
                    Some(Err(e)) => {
                        summary.failed += 1;
                        BatchRow {
                            row: idx + 1,
                            verdict: None,
                            label: None,
                            warnings,
                            error: Some(e.to_string()),
                        }
                    }
                    None => {
                        summary.failed += 1;
                        BatchRow {
                            row: idx + 1,
                            verdict: None,
                            label: None,
                            warnings,
                            error: Some("no prediction produced".to_string()),
                        }
                    }
                }
            }
            Parsed::Rejected(message) => {
                tracing::warn!("Row {} rejected: {}", idx + 1, message);
                summary.failed += 1;
                BatchRow {
                    row: idx + 1,
                    verdict: None,
                    label: None,
                    warnings: String::new(),
                    error: Some(message),
                }
            }
        };

        summary.rows += 1;
        writer.serialize(&row)?;
    }

    writer.flush()?;

    tracing::info!(
        "📊 Batch finished: {} rows, {} positive, {} negative, {} failed",
        summary.rows,
        summary.positive,
        summary.negative,
        summary.failed
    );

    Ok(summary)
}
