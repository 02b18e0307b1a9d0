use super::common::*;
use crate::workflows::screening::report::{self, DashboardStatistics};

#[test]
fn statistics_on_empty_collection_are_all_zero() {
    let statistics = DashboardStatistics::from_records(&[]);

    assert_eq!(statistics.total_resumes, 0);
    assert_eq!(statistics.suitable_percentage, 0.0);
    assert_eq!(statistics.unsuitable_percentage, 0.0);
    assert_eq!(statistics.average_match_score, 0.0);
    assert!(statistics.top_skills_lacking.is_empty());
}

#[test]
fn statistics_compute_counts_percentages_and_average() {
    let records = vec![
        record(1, 80.0, &[]),
        record(2, 60.0, &["go"]),
        record(3, 20.0, &["go", "rust"]),
    ];

    let statistics = DashboardStatistics::from_records(&records);

    assert_eq!(statistics.total_resumes, 3);
    assert_eq!(statistics.suitable_resumes, 2);
    assert_eq!(statistics.unsuitable_resumes, 1);
    assert_eq!(statistics.suitable_percentage, 66.67);
    assert_eq!(statistics.unsuitable_percentage, 33.33);
    assert_eq!(statistics.average_match_score, 53.33);
}

#[test]
fn top_skills_lacking_ranked_by_frequency_with_stable_ties() {
    let records = vec![
        record(1, 10.0, &["go", "python"]),
        record(2, 10.0, &["python", "sql"]),
        record(3, 10.0, &["python", "sql"]),
        record(4, 10.0, &["sql"]),
    ];

    let statistics = DashboardStatistics::from_records(&records);
    let ranked: Vec<(&str, usize)> = statistics
        .top_skills_lacking
        .iter()
        .map(|entry| (entry.skill.as_str(), entry.count))
        .collect();

    // python and sql tie at 3; python was seen first across the collection.
    assert_eq!(ranked, vec![("python", 3), ("sql", 3), ("go", 1)]);
}

#[test]
fn top_skills_lacking_keeps_at_most_five() {
    let records = vec![record(1, 0.0, &["a", "b", "c", "d", "e", "f", "g"])];
    let statistics = DashboardStatistics::from_records(&records);
    assert_eq!(statistics.top_skills_lacking.len(), 5);
}

#[test]
fn screening_record_serializes_for_api_consumers() {
    let record = record(1, 70.71, &["go"]);
    let json = serde_json::to_value(&record).expect("record serializes");

    assert_eq!(json["serial_number"], 1);
    assert_eq!(json["evaluation"]["suitable"], true);
    assert_eq!(json["fraud"]["fraud_status"], "NotFraud");
    assert_eq!(json["candidate"]["name"], "Jane Doe");
}

#[test]
fn report_csv_flattens_sequence_fields() {
    let records = vec![record(1, 70.71, &["docker", "go"])];

    let mut buffer = Vec::new();
    report::write_report(&records, &mut buffer).expect("report writes");
    let csv = String::from_utf8(buffer).expect("utf-8 report");

    let mut lines = csv.lines();
    let header = lines.next().expect("header row");
    assert!(header.starts_with("slno,name,email,phone,education"));
    assert!(header.ends_with("plagiarism,institution_check,experience_gap,fraud_status"));

    let row = lines.next().expect("record row");
    assert!(row.starts_with("1,Jane Doe,jane.doe@example.com"));
    assert!(row.contains("docker; go"));
    assert!(row.contains("python; sql"));
    assert!(row.contains("70.71"));
    assert!(row.contains("Not Fraud"));
    assert!(lines.next().is_none());
}

#[test]
fn sentiment_summary_reports_percentages() {
    let records = vec![record(1, 70.71, &[])];

    let mut buffer = Vec::new();
    report::write_sentiment_summary(&records, &mut buffer).expect("summary writes");
    let csv = String::from_utf8(buffer).expect("utf-8 summary");

    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("name,sentiment,sentiment_score"));
    assert_eq!(lines.next(), Some("Jane Doe,Neutral,50"));
}
