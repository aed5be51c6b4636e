//! StructuredRecord — the canonical three-section schema extracted from a JD.
//!
//! The JSON key names and nesting here are normative for programmatic
//! consumers; changing any of them is a breaking change. Every field is
//! required at the serde level: a record missing any key fails
//! deserialization outright, which is exactly the fail-closed behavior the
//! Contract Validator relies on. Missing *values* are represented as empty
//! strings/arrays, never as absent keys.

use serde::{Deserialize, Serialize};

/// Boolean search string plus mandatory/preferred skill lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub boolean_string: String,
    pub mandatory: Vec<String>,
    pub preferred: Vec<String>,
}

/// A single screening question with its expected answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// The four fixed screening categories. Empty categories are valid;
/// absent categories are not a StructuredRecord.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningQuestions {
    pub domain_expertise: Vec<QaPair>,
    pub product_or_tech: Vec<QaPair>,
    pub cross_functional: Vec<QaPair>,
    pub fitment: Vec<QaPair>,
}

/// LinkedIn sourcing filters — must be an object with all four sub-fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedinFilters {
    pub title: String,
    pub skills: Vec<String>,
    pub location: String,
    pub experience: String,
}

/// Candidate sourcing targets: companies, role titles, LinkedIn filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMapping {
    pub companies: Vec<String>,
    pub roles: Vec<String>,
    pub linkedin_filters: LinkedinFilters,
}

/// The full extraction record: search criteria, screening Q&A, source mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredRecord {
    pub search_criteria: SearchCriteria,
    pub screening_questions: ScreeningQuestions,
    pub source_mapping: SourceMapping,
}

impl StructuredRecord {
    /// Serializes an all-empty record as the schema template embedded in the
    /// extraction prompt. The prompt builder and the validator therefore
    /// share these types as their single source of truth: any schema change
    /// updates both sides at once.
    pub fn schema_template() -> String {
        // One example pair so the array-of-object shape is unambiguous to the model.
        let template = Self {
            screening_questions: ScreeningQuestions {
                domain_expertise: vec![QaPair::default()],
                ..Default::default()
            },
            ..Default::default()
        };
        serde_json::to_string_pretty(&template).unwrap_or_else(|_| "{}".to_string())
    }
}
