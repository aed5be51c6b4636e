//! Prompt builders for the extraction pipeline.
//!
//! All builders are pure, total functions: they never fail and perform no
//! I/O. The extraction prompt embeds the serialized `StructuredRecord`
//! schema, so the prompt and the Contract Validator share the Rust types as
//! a single source of truth.

use crate::models::record::StructuredRecord;
use crate::models::request::CreationRequest;

/// Instruction block that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Builds the JD creation prompt from the request fields.
///
/// The organization's identity is never interpolated: `company_name` and
/// `about_company` are replaced by a generic, industry-scoped descriptor
/// sentence before the prompt is assembled.
pub fn build_creation_prompt(request: &CreationRequest) -> String {
    let organization = generic_organization_sentence(&request.industry);

    format!(
        "Create a detailed Job Description based on the following details:\n\
         Job Title: {title}\n\
         Department/Function: {department}\n\
         Industry: {industry}\n\
         Location: {location}\n\
         Work Setup: {work_setup}\n\
         Must-Have Skills: {skills}\n\
         Total Experience Required: {experience}\n\
         Educational Qualification: {education}\n\
         About the Organization: {organization}\n\
         Provide a professional, well-structured JD.",
        title = request.job_title,
        department = request.department,
        industry = request.industry,
        location = request.location,
        work_setup = request.work_arrangement.as_str(),
        skills = request.must_have_skills,
        experience = request.total_experience,
        education = request.education,
        organization = organization,
    )
}

/// The industry-scoped sentence that stands in for the organization's identity.
fn generic_organization_sentence(industry: &str) -> String {
    format!("A well-established organization operating in the {industry} industry.")
}

/// Builds the JD refinement prompt around an existing JD text.
pub fn build_refinement_prompt(jd_text: &str) -> String {
    format!(
        "Refine and structure the following Job Description.\n\
         Add missing key responsibilities, deliverables, KPIs, and any relevant details.\n\n\
         Job Description to refine:\n{jd_text}"
    )
}

/// Builds the structured-extraction prompt: schema template, output rules,
/// and the JD text. The schema in the prompt is generated from the same
/// types the validator parses into.
pub fn build_extraction_prompt(jd_text: &str) -> String {
    format!(
        "You are an expert technical recruiter assistant.\n\
         Given the following job description (JD), extract structured sourcing data.\n\n\
         Return a JSON object with this EXACT schema (all keys required, no extra prose):\n\
         {schema}\n\n\
         Rules for each section:\n\n\
         searchCriteria:\n\
         - booleanString: a boolean keyword search string for the role\n\
         - mandatory: must-have skills/experience\n\
         - preferred: nice-to-have skills/experience\n\n\
         screeningQuestions: 10 questions total with expected answers, divided into\n\
         domainExpertise, productOrTech, crossFunctional, and fitment categories.\n\
         Leave a category as an empty array if the JD gives nothing for it.\n\n\
         sourceMapping:\n\
         - companies: top companies to source candidates from\n\
         - roles: equivalent job titles to search for\n\
         - linkedinFilters: title, skills, location, experience filter values\n\n\
         Use an empty string or empty array for anything the JD does not specify —\n\
         never omit a key.\n\n\
         {json_only}\n\n\
         JD:\n{jd_text}",
        schema = StructuredRecord::schema_template(),
        json_only = JSON_ONLY_INSTRUCTION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::WorkArrangement;

    fn make_request() -> CreationRequest {
        CreationRequest {
            job_title: "Backend Engineer".to_string(),
            department: "Engineering".to_string(),
            industry: "Fintech".to_string(),
            location: "Chennai".to_string(),
            work_arrangement: WorkArrangement::Remote,
            must_have_skills: "Rust, PostgreSQL".to_string(),
            total_experience: "5+ years".to_string(),
            education: "B.E. Computer Science".to_string(),
            company_name: "Acme Payments Pvt Ltd".to_string(),
            about_company: "Acme Payments builds UPI infrastructure.".to_string(),
        }
    }

    #[test]
    fn test_creation_prompt_never_leaks_organization_identity() {
        let request = make_request();
        let prompt = build_creation_prompt(&request);
        assert!(!prompt.contains(&request.company_name));
        assert!(!prompt.contains(&request.about_company));
        assert!(prompt.contains("A well-established organization operating in the Fintech industry."));
    }

    #[test]
    fn test_creation_prompt_interpolates_all_other_fields() {
        let request = make_request();
        let prompt = build_creation_prompt(&request);
        assert!(prompt.contains("Backend Engineer"));
        assert!(prompt.contains("Engineering"));
        assert!(prompt.contains("Chennai"));
        assert!(prompt.contains("Remote"));
        assert!(prompt.contains("Rust, PostgreSQL"));
        assert!(prompt.contains("5+ years"));
        assert!(prompt.contains("B.E. Computer Science"));
    }

    #[test]
    fn test_refinement_prompt_carries_jd_text() {
        let prompt = build_refinement_prompt("We need a Rust engineer.");
        assert!(prompt.contains("We need a Rust engineer."));
        assert!(prompt.contains("responsibilities"));
    }

    #[test]
    fn test_extraction_prompt_embeds_full_schema() {
        let prompt = build_extraction_prompt("Some JD text");
        for key in [
            "searchCriteria",
            "booleanString",
            "mandatory",
            "preferred",
            "screeningQuestions",
            "domainExpertise",
            "productOrTech",
            "crossFunctional",
            "fitment",
            "sourceMapping",
            "companies",
            "roles",
            "linkedinFilters",
        ] {
            assert!(prompt.contains(key), "extraction prompt missing key {key}");
        }
        assert!(prompt.contains("Some JD text"));
        assert!(prompt.contains(JSON_ONLY_INSTRUCTION));
    }
}
