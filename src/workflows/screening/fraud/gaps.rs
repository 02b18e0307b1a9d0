use chrono::NaiveDate;

use crate::workflows::screening::domain::ExperienceEntry;

/// Walk experience entries in order and flag the first gap between a
/// position's start and the previous position's end that exceeds the
/// threshold. Entries without a parsed date range are skipped; empty
/// histories never flag.
pub(crate) fn check_experience_gaps(experience: &[ExperienceEntry], gap_threshold_days: i64) -> bool {
    let mut previous_end: Option<NaiveDate> = None;

    for entry in experience {
        let (start, end) = match (entry.start_date, entry.end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => continue,
        };

        if let Some(previous) = previous_end {
            if (start - previous).num_days() > gap_threshold_days {
                return true;
            }
        }

        previous_end = Some(end);
    }

    false
}
