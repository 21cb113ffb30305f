//! Typed views of the exported resource kinds.
//!
//! Deserialization is the schema gate: any field the CSV projection
//! dereferences unconditionally is declared required here, so a record that
//! would break projection is rejected with field-level detail instead.
//! Fields beyond the projected subset are ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::model::ResourceKind;

/// Ordered header tuple plus the matching row projection for one resource.
pub trait CsvRecord {
    const HEADERS: &'static [&'static str];

    /// Field values in `HEADERS` order.
    fn csv_row(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    pub reference: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HumanName {
    #[serde(default)]
    pub given: Vec<String>,
    #[serde(default)]
    pub family: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coding {
    pub system: String,
    pub code: String,
    pub display: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeableConcept {
    #[serde(deserialize_with = "non_empty_codings")]
    pub coding: Vec<Coding>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub codeable_concept: CodeableConcept,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Vec<HumanName>,
    #[serde(default)]
    pub birth_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub status: String,
    pub intent: String,
    pub subject: Reference,
    pub medication: Medication,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub subject: Reference,
    #[serde(default)]
    pub authored: Option<String>,
    pub questionnaire: String,
    pub status: String,
}

fn non_empty_codings<'de, D>(deserializer: D) -> Result<Vec<Coding>, D::Error>
where
    D: Deserializer<'de>,
{
    let codings = Vec::<Coding>::deserialize(deserializer)?;
    if codings.is_empty() {
        return Err(serde::de::Error::custom("coding must contain at least one entry"));
    }
    Ok(codings)
}

impl CsvRecord for Patient {
    const HEADERS: &'static [&'static str] = &["id", "given", "family", "birthDate"];

    fn csv_row(&self) -> Vec<String> {
        let first_name = self.name.first();
        vec![
            self.id.clone().unwrap_or_default(),
            first_name
                .and_then(|n| n.given.first())
                .cloned()
                .unwrap_or_default(),
            first_name.and_then(|n| n.family.clone()).unwrap_or_default(),
            self.birth_date.clone().unwrap_or_default(),
        ]
    }
}

impl CsvRecord for MedicationRequest {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "subject",
        "medication.system",
        "medication.code",
        "medication.display",
    ];

    fn csv_row(&self) -> Vec<String> {
        // coding is non-empty, enforced at deserialization
        let coding = &self.medication.codeable_concept.coding[0];
        vec![
            self.id.clone().unwrap_or_default(),
            self.subject.reference.clone(),
            coding.system.clone(),
            coding.code.clone(),
            coding.display.clone(),
        ]
    }
}

impl CsvRecord for QuestionnaireResponse {
    const HEADERS: &'static [&'static str] = &["id", "subject", "authored", "questionnaire", "status"];

    fn csv_row(&self) -> Vec<String> {
        // canonical references look like "Questionnaire/123"; keep the id part
        let questionnaire = self
            .questionnaire
            .rsplit('/')
            .next()
            .unwrap_or(&self.questionnaire);
        vec![
            self.id.clone().unwrap_or_default(),
            self.subject.reference.clone(),
            self.authored.clone().unwrap_or_default(),
            questionnaire.to_string(),
            self.status.clone(),
        ]
    }
}

impl ResourceKind {
    /// Validate a normalized record into its typed form and project the row.
    pub fn project(&self, record: Value) -> Result<Vec<String>, serde_json::Error> {
        match self {
            ResourceKind::Patient => Ok(serde_json::from_value::<Patient>(record)?.csv_row()),
            ResourceKind::MedicationRequest => {
                Ok(serde_json::from_value::<MedicationRequest>(record)?.csv_row())
            }
            ResourceKind::QuestionnaireResponse => {
                Ok(serde_json::from_value::<QuestionnaireResponse>(record)?.csv_row())
            }
        }
    }
}
