/// Flag when any non-empty claimed institution is absent from the valid
/// list. Comparison is case-insensitive; an empty claim list never flags.
pub(crate) fn check_institutions(claimed: &[String], valid: &[String]) -> bool {
    claimed
        .iter()
        .filter(|name| !name.trim().is_empty())
        .any(|name| !valid.iter().any(|entry| entry.eq_ignore_ascii_case(name)))
}
