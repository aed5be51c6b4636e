//! Input-boundary types: the JD creation request and the declared document kind.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Work arrangement — an enum of exactly three literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkArrangement {
    Remote,
    Hybrid,
    Onsite,
}

impl WorkArrangement {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkArrangement::Remote => "Remote",
            WorkArrangement::Hybrid => "Hybrid",
            WorkArrangement::Onsite => "Onsite",
        }
    }
}

/// The fixed field set required to create a JD from scratch.
///
/// All fields are mandatory; absence of any is rejected before a single
/// generation call is made. `company_name` and `about_company` identify the
/// organization and are never interpolated into prompts verbatim — see
/// `extraction::prompts::build_creation_prompt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationRequest {
    pub job_title: String,
    pub department: String,
    pub industry: String,
    pub location: String,
    pub work_arrangement: WorkArrangement,
    pub must_have_skills: String,
    pub total_experience: String,
    pub education: String,
    pub company_name: String,
    pub about_company: String,
}

impl CreationRequest {
    /// Rejects the request if any text field is empty, naming every missing
    /// field in a single error so the caller can fix the whole form at once.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing: Vec<&str> = Vec::new();
        let fields = [
            ("job_title", &self.job_title),
            ("department", &self.department),
            ("industry", &self.industry),
            ("location", &self.location),
            ("must_have_skills", &self.must_have_skills),
            ("total_experience", &self.total_experience),
            ("education", &self.education),
            ("company_name", &self.company_name),
            ("about_company", &self.about_company),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Declared content kind of an uploaded source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PlainText,
    Pdf,
    WordProcessor,
}

impl DocumentKind {
    /// Maps a declared MIME type to a document kind. Unknown MIME types are
    /// rejected as unsupported before any extraction is attempted.
    pub fn from_mime(mime: &str) -> Result<Self, AppError> {
        if mime.starts_with("text/") {
            Ok(DocumentKind::PlainText)
        } else if mime == "application/pdf" {
            Ok(DocumentKind::Pdf)
        } else if mime == "application/msword"
            || mime == "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        {
            Ok(DocumentKind::WordProcessor)
        } else {
            Err(AppError::UnsupportedDocument(format!(
                "Unrecognized document type: {mime}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> CreationRequest {
        CreationRequest {
            job_title: "Backend Engineer".to_string(),
            department: "Engineering".to_string(),
            industry: "Fintech".to_string(),
            location: "Chennai".to_string(),
            work_arrangement: WorkArrangement::Remote,
            must_have_skills: "Rust, PostgreSQL, Kubernetes".to_string(),
            total_experience: "5+ years".to_string(),
            education: "B.E./B.Tech in Computer Science".to_string(),
            company_name: "Acme Payments Pvt Ltd".to_string(),
            about_company: "Acme Payments builds UPI infrastructure for SMEs.".to_string(),
        }
    }

    #[test]
    fn test_complete_request_validates() {
        assert!(complete_request().validate().is_ok());
    }

    #[test]
    fn test_validation_names_every_missing_field() {
        let request = CreationRequest {
            job_title: "".to_string(),
            education: "  ".to_string(),
            ..complete_request()
        };
        let err = request.validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("job_title"), "got: {message}");
        assert!(message.contains("education"), "got: {message}");
        assert!(!message.contains("industry"), "got: {message}");
    }

    #[test]
    fn test_work_arrangement_literals() {
        for (json, expected) in [
            (r#""Remote""#, WorkArrangement::Remote),
            (r#""Hybrid""#, WorkArrangement::Hybrid),
            (r#""Onsite""#, WorkArrangement::Onsite),
        ] {
            let parsed: WorkArrangement = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, expected);
        }
        assert!(serde_json::from_str::<WorkArrangement>(r#""Office""#).is_err());
    }

    #[test]
    fn test_document_kind_from_mime() {
        assert_eq!(
            DocumentKind::from_mime("text/plain").unwrap(),
            DocumentKind::PlainText
        );
        assert_eq!(
            DocumentKind::from_mime("application/pdf").unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::from_mime(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            )
            .unwrap(),
            DocumentKind::WordProcessor
        );
        assert!(matches!(
            DocumentKind::from_mime("image/png"),
            Err(AppError::UnsupportedDocument(_))
        ));
    }
}
