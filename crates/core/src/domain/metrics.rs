//! Derived metrics shown next to each teacher/subject association.
//!
//! The store supplies the raw aggregates (mean of marks, present/total
//! attendance counts); these functions apply the reporting rules.

/// Average marks and attendance for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubjectMetrics {
    pub average_marks: f64,
    pub average_attendance: f64,
}

/// Halves round to the even neighbour.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Mean marks rounded to two decimals, or 0 when the subject has no marks.
pub fn average_marks(mean: Option<f64>) -> f64 {
    mean.map(round_to_hundredths).unwrap_or(0.0)
}

/// Present entries as a percentage of all entries, rounded to two decimals.
/// A subject without attendance entries reports 0.
pub fn attendance_percentage(present: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    round_to_hundredths(present as f64 / total as f64 * 100.0)
}
