//! Contract Validator — strict parse of model output against the
//! StructuredRecord schema.
//!
//! The validator is pure and side-effect-free. It performs exactly one
//! documented normalization before the strict parse: stripping a single
//! outer markdown code fence, since models wrap JSON in fences often enough
//! that treating it as a hard failure would burn retry attempts on a
//! mechanical decoration. Everything else — surrounding prose, missing keys,
//! non-string array entries, non-JSON output — is Malformed. No repair, no
//! coercion: almost-valid output is drift the retry policy exists to surface.

use crate::models::record::StructuredRecord;

/// Model output that failed contract validation. Carries the raw text so it
/// is never silently discarded.
#[derive(Debug, Clone)]
pub struct Malformed {
    pub raw: String,
    pub reason: String,
}

/// Parses generated text into a `StructuredRecord`, or classifies it as
/// Malformed. Rejects output where any of the three top-level sections, any
/// of the four screening categories, or any linkedinFilters sub-field is
/// absent — empty values are fine, missing keys are not.
pub fn validate(text: &str) -> Result<StructuredRecord, Malformed> {
    let stripped = strip_json_fences(text);

    serde_json::from_str::<StructuredRecord>(stripped).map_err(|e| Malformed {
        raw: text.to_string(),
        reason: e.to_string(),
    })
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_RECORD: &str = r#"{
        "searchCriteria": {"booleanString": "", "mandatory": [], "preferred": []},
        "screeningQuestions": {
            "domainExpertise": [], "productOrTech": [],
            "crossFunctional": [], "fitment": []
        },
        "sourceMapping": {
            "companies": [], "roles": [],
            "linkedinFilters": {"title": "", "skills": [], "location": "", "experience": ""}
        }
    }"#;

    #[test]
    fn test_accepts_minimal_record_all_keys_present() {
        let record = validate(MINIMAL_RECORD).unwrap();
        assert!(record.search_criteria.mandatory.is_empty());
    }

    #[test]
    fn test_rejects_empty_string() {
        let err = validate("").unwrap_err();
        assert_eq!(err.raw, "");
    }

    #[test]
    fn test_rejects_non_json_prose() {
        let prose = "Here is a great job description for you!";
        let err = validate(prose).unwrap_err();
        assert_eq!(err.raw, prose);
        assert!(!err.reason.is_empty());
    }

    #[test]
    fn test_rejects_missing_source_mapping() {
        let json = r#"{
            "searchCriteria": {"booleanString": "", "mandatory": [], "preferred": []},
            "screeningQuestions": {
                "domainExpertise": [], "productOrTech": [],
                "crossFunctional": [], "fitment": []
            }
        }"#;
        let err = validate(json).unwrap_err();
        assert!(err.reason.contains("sourceMapping"), "reason: {}", err.reason);
    }

    #[test]
    fn test_rejects_absent_fitment_category() {
        let json = r#"{
            "searchCriteria": {"booleanString": "", "mandatory": [], "preferred": []},
            "screeningQuestions": {
                "domainExpertise": [], "productOrTech": [], "crossFunctional": []
            },
            "sourceMapping": {
                "companies": [], "roles": [],
                "linkedinFilters": {"title": "", "skills": [], "location": "", "experience": ""}
            }
        }"#;
        assert!(validate(json).is_err());
    }

    #[test]
    fn test_rejects_linkedin_filters_not_an_object() {
        let json = r#"{
            "searchCriteria": {"booleanString": "", "mandatory": [], "preferred": []},
            "screeningQuestions": {
                "domainExpertise": [], "productOrTech": [],
                "crossFunctional": [], "fitment": []
            },
            "sourceMapping": {
                "companies": [], "roles": [],
                "linkedinFilters": "title, skills, location"
            }
        }"#;
        assert!(validate(json).is_err());
    }

    #[test]
    fn test_accepts_single_outer_fence() {
        let fenced = format!("```json\n{MINIMAL_RECORD}\n```");
        assert!(validate(&fenced).is_ok());
    }

    #[test]
    fn test_accepts_untagged_fence() {
        let fenced = format!("```\n{MINIMAL_RECORD}\n```");
        assert!(validate(&fenced).is_ok());
    }

    #[test]
    fn test_rejects_fence_wrapped_in_prose() {
        // Only a single OUTER fence is normalized — prose around it is drift.
        let wrapped = format!("Sure, here you go:\n```json\n{MINIMAL_RECORD}\n```");
        assert!(validate(&wrapped).is_err());
    }

    #[test]
    fn test_ignores_unknown_extra_keys() {
        let json = MINIMAL_RECORD.replacen(
            "\"searchCriteria\"",
            "\"confidence\": 0.9, \"searchCriteria\"",
            1,
        );
        assert!(validate(&json).is_ok());
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }
}
