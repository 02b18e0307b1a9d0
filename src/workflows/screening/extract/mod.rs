//! Pure extraction rules: document text, candidate fields, job fields, and
//! skill vocabulary matching. Every function here is deterministic over its
//! inputs and fails soft to `"N/A"`/empty defaults.

pub(crate) mod fields;
pub(crate) mod job;
pub(crate) mod skills;
pub(crate) mod text;

use super::domain::CandidateProfile;
use skills::SkillVocabulary;

/// Assemble a candidate profile from normalized resume text and the source
/// file name.
pub(crate) fn candidate_profile(
    file_name: &str,
    text: &str,
    vocabulary: &SkillVocabulary,
) -> CandidateProfile {
    let contact = fields::contact_info(text);

    CandidateProfile {
        name: fields::candidate_name(file_name),
        email: contact.email,
        phone: contact.phone,
        education: fields::education(text),
        experience: fields::experience(text),
        projects: fields::projects(text),
        skills: vocabulary.matches(text),
        years_of_experience: fields::years_of_experience(text),
    }
}
