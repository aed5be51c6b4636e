//! Record flattening — the single ordered text form both layout algorithms
//! consume.
//!
//! Section order is fixed: Search Criteria → Screening Questions (in the four
//! fixed category order) → Source Mapping. Labels are derived from the schema
//! key names, so the flattened form cannot drift from the serialized schema.

use crate::models::record::{QaPair, StructuredRecord};

/// Derives a human-readable label from a camelCase key name: a space is
/// inserted at each word boundary and every word is title-cased.
/// `"domainExpertise"` → `"Domain Expertise"`.
pub fn category_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}

/// Collapses interior whitespace runs to single spaces and drops leading and
/// trailing whitespace.
fn collapse_whitespace(segment: &str) -> String {
    segment.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Record values are unconstrained generated text: embedded newlines become
/// separate flattened lines and whitespace runs are collapsed, so every
/// flattened line is a newline-free, single-spaced unit that both layout
/// algorithms carry through with identical content.
fn push_normalized(lines: &mut Vec<String>, raw: String) {
    let mut segments = raw.lines().map(collapse_whitespace);
    lines.push(segments.next().unwrap_or_default());
    lines.extend(segments);
}

/// Flattens a validated record into its ordered, human-readable line form.
pub fn flatten_record(record: &StructuredRecord) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(category_label("searchCriteria"));
    push_normalized(
        &mut lines,
        format!("Boolean String: {}", record.search_criteria.boolean_string),
    );
    push_normalized(
        &mut lines,
        format!("Mandatory: {}", record.search_criteria.mandatory.join(", ")),
    );
    push_normalized(
        &mut lines,
        format!("Preferred: {}", record.search_criteria.preferred.join(", ")),
    );

    lines.push(category_label("screeningQuestions"));
    let categories: [(&str, &[QaPair]); 4] = [
        ("domainExpertise", &record.screening_questions.domain_expertise),
        ("productOrTech", &record.screening_questions.product_or_tech),
        ("crossFunctional", &record.screening_questions.cross_functional),
        ("fitment", &record.screening_questions.fitment),
    ];
    for (key, pairs) in categories {
        lines.push(category_label(key));
        for (i, pair) in pairs.iter().enumerate() {
            push_normalized(&mut lines, format!("Q{}. {}", i + 1, pair.question));
            push_normalized(&mut lines, format!("A{}. {}", i + 1, pair.answer));
        }
    }

    lines.push(category_label("sourceMapping"));
    push_normalized(
        &mut lines,
        format!("Companies: {}", record.source_mapping.companies.join(", ")),
    );
    push_normalized(
        &mut lines,
        format!("Roles: {}", record.source_mapping.roles.join(", ")),
    );
    lines.push(category_label("linkedinFilters"));
    let filters = &record.source_mapping.linkedin_filters;
    push_normalized(&mut lines, format!("Title: {}", filters.title));
    push_normalized(&mut lines, format!("Skills: {}", filters.skills.join(", ")));
    push_normalized(&mut lines, format!("Location: {}", filters.location));
    push_normalized(&mut lines, format!("Experience: {}", filters.experience));

    lines
}

/// Free text (already-refined narrative output) keeps its own line structure:
/// one entry per input line, no merging, no reordering, with the same
/// whitespace normalization record values get.
pub fn flatten_text(text: &str) -> Vec<String> {
    text.lines().map(collapse_whitespace).collect()
}
