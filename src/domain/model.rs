use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::resources::{self, CsvRecord};

/// One line of NDJSON input, parsed but not yet validated.
#[derive(Debug, Clone)]
pub struct RawRecord {
    /// 1-based line number in the source file, kept for error reporting.
    pub line: u64,
    pub data: Map<String, Value>,
}

/// Projected rows for one resource kind, ready for CSV serialization.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub rows: Vec<Vec<String>>,
    pub skipped: usize,
}

/// What to do with a record that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InvalidPolicy {
    /// Abort the whole run on the first invalid record
    Abort,
    /// Log the offending record and continue without it
    Skip,
}

/// The resource kinds this tool exports.
///
/// Adding a kind means adding a variant here plus its typed resource and
/// `CsvRecord` impl; the run loop and file naming follow from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Patient,
    MedicationRequest,
    QuestionnaireResponse,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Patient,
        ResourceKind::MedicationRequest,
        ResourceKind::QuestionnaireResponse,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Patient => "Patient",
            ResourceKind::MedicationRequest => "MedicationRequest",
            ResourceKind::QuestionnaireResponse => "QuestionnaireResponse",
        }
    }

    pub fn input_file(&self) -> String {
        format!("{}.ndjson", self.name())
    }

    pub fn output_file(&self) -> String {
        format!("{}.csv", self.name())
    }

    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Patient => resources::Patient::HEADERS,
            ResourceKind::MedicationRequest => resources::MedicationRequest::HEADERS,
            ResourceKind::QuestionnaireResponse => resources::QuestionnaireResponse::HEADERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_follow_resource_names() {
        assert_eq!(ResourceKind::Patient.input_file(), "Patient.ndjson");
        assert_eq!(ResourceKind::MedicationRequest.output_file(), "MedicationRequest.csv");
    }

    #[test]
    fn test_all_covers_each_kind_once() {
        assert_eq!(ResourceKind::ALL.len(), 3);
        assert!(ResourceKind::ALL.contains(&ResourceKind::Patient));
        assert!(ResourceKind::ALL.contains(&ResourceKind::MedicationRequest));
        assert!(ResourceKind::ALL.contains(&ResourceKind::QuestionnaireResponse));
    }
}
