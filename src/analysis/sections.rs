//! Section detection over raw resume text

use crate::analysis::report::SectionPresence;

// Trigger lists are matched as lower-cased substrings, not whole words.
// "skills" inside "unskilled" counts; kept for compatibility with stored
// scores.
const CONTACT_TRIGGERS: &[&str] = &["email", "phone", "@", "linkedin", "contact"];
const SUMMARY_TRIGGERS: &[&str] = &["summary", "objective", "profile", "about"];
const EXPERIENCE_TRIGGERS: &[&str] = &["experience", "work history", "employment"];
const EDUCATION_TRIGGERS: &[&str] = &["education", "university", "college", "degree"];
const SKILLS_TRIGGERS: &[&str] = &["skills", "technologies", "competencies", "proficiencies"];

/// Scan text for the five canonical resume sections. Matching is
/// case-insensitive; empty input yields all-false.
pub fn detect_sections(text: &str) -> SectionPresence {
    let haystack = text.to_lowercase();
    let contains_any = |triggers: &[&str]| triggers.iter().any(|t| haystack.contains(t));

    SectionPresence {
        contact_info: contains_any(CONTACT_TRIGGERS),
        summary: contains_any(SUMMARY_TRIGGERS),
        experience: contains_any(EXPERIENCE_TRIGGERS),
        education: contains_any(EDUCATION_TRIGGERS),
        skills: contains_any(SKILLS_TRIGGERS),
    }
}
