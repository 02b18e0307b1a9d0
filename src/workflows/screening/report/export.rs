use std::io::Write;

use crate::workflows::screening::domain::ScreeningRecord;
use crate::workflows::screening::matching::round2;

const REPORT_HEADERS: [&str; 20] = [
    "slno",
    "name",
    "email",
    "phone",
    "education",
    "education_met",
    "experience",
    "candidate_experience_years",
    "projects",
    "skills",
    "suitable",
    "match_score",
    "skills_lacking",
    "experience_met",
    "sentiment",
    "sentiment_score",
    "plagiarism",
    "institution_check",
    "experience_gap",
    "fraud_status",
];

const SENTIMENT_HEADERS: [&str; 3] = ["name", "sentiment", "sentiment_score"];

/// Write the full screening report: one row per record, sequence fields
/// flattened with `"; "`.
pub fn write_report<W: Write>(records: &[ScreeningRecord], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(REPORT_HEADERS)?;

    for record in records {
        let education = join(record.candidate.education.iter().map(|entry| entry.line.as_str()));
        let experience = join(record.candidate.experience.iter().map(|entry| entry.line.as_str()));
        let projects = join(record.candidate.projects.iter().map(String::as_str));
        let skills = join(record.candidate.skills.iter().map(String::as_str));
        let skills_lacking = join(record.evaluation.skills_lacking.iter().map(String::as_str));

        csv_writer.write_record([
            record.serial_number.to_string(),
            record.candidate.name.clone(),
            record.candidate.email.clone(),
            record.candidate.phone.clone(),
            education,
            record.evaluation.education_met.label().to_string(),
            experience,
            record.candidate.years_of_experience.to_string(),
            projects,
            skills,
            yes_no(record.evaluation.suitable),
            record.evaluation.match_score.to_string(),
            skills_lacking,
            yes_no(record.evaluation.experience_met),
            record.sentiment.label.label().to_string(),
            record.sentiment.score.to_string(),
            record.fraud.plagiarism.to_string(),
            record.fraud.institution_check.to_string(),
            record.fraud.experience_gap.to_string(),
            record.fraud.fraud_status.label().to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the per-record sentiment summary; scores are reported as
/// percentages rounded to 2 decimals.
pub fn write_sentiment_summary<W: Write>(
    records: &[ScreeningRecord],
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(SENTIMENT_HEADERS)?;

    for record in records {
        csv_writer.write_record([
            record.candidate.name.clone(),
            record.sentiment.label.label().to_string(),
            round2(record.sentiment.score * 100.0).to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn join<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join("; ")
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}
