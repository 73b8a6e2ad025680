//! Average marks and attendance per teacher/subject association.
//!
//! Both figures cover every student of the association's subject, not only
//! the ones the teacher taught, and are recomputed on each call.

use std::sync::Arc;

use academics_core::domain::{SubjectId, SubjectMetrics, metrics};

use crate::repository::{AssociationRecord, AttendanceRepository, MarksRepository, StoreResult};

#[derive(Clone)]
pub struct MetricCalculator {
    marks: Arc<dyn MarksRepository>,
    attendance: Arc<dyn AttendanceRepository>,
}

impl MetricCalculator {
    pub fn new(marks: Arc<dyn MarksRepository>, attendance: Arc<dyn AttendanceRepository>) -> Self {
        Self { marks, attendance }
    }

    pub async fn average_marks(&self, subject_id: SubjectId) -> StoreResult<f64> {
        let mean = self.marks.mean_for_subject(subject_id).await?;
        Ok(metrics::average_marks(mean))
    }

    pub async fn average_attendance(&self, subject_id: SubjectId) -> StoreResult<f64> {
        let counts = self.attendance.counts_for_subject(subject_id).await?;
        Ok(metrics::attendance_percentage(counts.present, counts.total))
    }

    #[tracing::instrument(skip(self, association), fields(association_id = %association.id))]
    pub async fn for_association(&self, association: &AssociationRecord) -> StoreResult<SubjectMetrics> {
        let subject_id = association.subject.id;
        Ok(SubjectMetrics {
            average_marks: self.average_marks(subject_id).await?,
            average_attendance: self.average_attendance(subject_id).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{
        AttendanceCounts, AttendanceRecord, MarksRecord, NewAttendance, NewMarks, StoreError,
    };
    use async_trait::async_trait;

    struct FixedMarks(Option<f64>);

    #[async_trait]
    impl MarksRepository for FixedMarks {
        async fn create(&self, _new_marks: NewMarks) -> StoreResult<MarksRecord> {
            Err(StoreError::invalid_row("marks", "read-only fixture"))
        }

        async fn mean_for_subject(&self, _subject_id: SubjectId) -> StoreResult<Option<f64>> {
            Ok(self.0)
        }
    }

    struct FixedAttendance(AttendanceCounts);

    #[async_trait]
    impl AttendanceRepository for FixedAttendance {
        async fn create(&self, _new_attendance: NewAttendance) -> StoreResult<AttendanceRecord> {
            Err(StoreError::invalid_row("attendance", "read-only fixture"))
        }

        async fn counts_for_subject(&self, _subject_id: SubjectId) -> StoreResult<AttendanceCounts> {
            Ok(self.0)
        }
    }

    fn calculator(mean: Option<f64>, present: u64, total: u64) -> MetricCalculator {
        MetricCalculator::new(
            Arc::new(FixedMarks(mean)),
            Arc::new(FixedAttendance(AttendanceCounts { present, total })),
        )
    }

    #[tokio::test]
    async fn empty_subject_reports_zero_for_both_metrics() {
        let calculator = calculator(None, 0, 0);
        let subject = SubjectId::new(1);

        assert_eq!(calculator.average_marks(subject).await.expect("marks"), 0.0);
        assert_eq!(
            calculator.average_attendance(subject).await.expect("attendance"),
            0.0
        );
    }

    #[tokio::test]
    async fn metrics_are_rounded_to_two_decimals() {
        let calculator = calculator(Some(78.3333333), 2, 3);
        let subject = SubjectId::new(1);

        assert_eq!(calculator.average_marks(subject).await.expect("marks"), 78.33);
        assert_eq!(
            calculator.average_attendance(subject).await.expect("attendance"),
            66.67
        );
    }
}
