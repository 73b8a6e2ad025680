use super::{DepartmentId, Semester};

/// Department and semester chosen in step 1 of a registration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cohort {
    pub department_id: DepartmentId,
    pub semester: Semester,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStage {
    AwaitingStep1,
    AwaitingStep2,
    Complete,
}

/// Per-caller wizard state handed explicitly to each step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationContext {
    cohort: Option<Cohort>,
    completed: bool,
}

impl RegistrationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cohort(cohort: Cohort) -> Self {
        Self {
            cohort: Some(cohort),
            completed: false,
        }
    }

    pub fn cohort(&self) -> Option<Cohort> {
        self.cohort
    }

    /// Starts (or restarts) step 2 for `cohort`.
    pub fn select_cohort(&mut self, cohort: Cohort) {
        self.cohort = Some(cohort);
        self.completed = false;
    }

    /// Records a successful step 2. The cohort is kept so another
    /// registration for it can follow directly.
    pub fn complete(&mut self) {
        self.completed = self.cohort.is_some();
    }

    pub fn clear(&mut self) {
        self.cohort = None;
        self.completed = false;
    }

    pub fn stage(&self) -> RegistrationStage {
        match (self.cohort, self.completed) {
            (None, _) => RegistrationStage::AwaitingStep1,
            (Some(_), false) => RegistrationStage::AwaitingStep2,
            (Some(_), true) => RegistrationStage::Complete,
        }
    }
}
