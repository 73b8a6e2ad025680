use super::DomainError;

/// Marks awarded to one student in one subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marks {
    obtained: f64,
    max: f64,
}

impl Marks {
    pub const DEFAULT_MAX: f64 = 100.0;

    pub fn new(obtained: f64, max: f64) -> Result<Self, DomainError> {
        if !(max > 0.0 && max.is_finite()) {
            return Err(DomainError::InvalidMaxMarks(max));
        }
        if !(0.0..=max).contains(&obtained) {
            return Err(DomainError::MarksOutOfRange { obtained, max });
        }

        Ok(Self { obtained, max })
    }

    pub fn out_of_default(obtained: f64) -> Result<Self, DomainError> {
        Self::new(obtained, Self::DEFAULT_MAX)
    }

    pub fn obtained(self) -> f64 {
        self.obtained
    }

    pub fn max(self) -> f64 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::Marks;

    #[test]
    fn default_max_is_one_hundred() {
        let marks = Marks::out_of_default(72.5).expect("72.5/100 should be valid");

        assert_eq!(marks.obtained(), 72.5);
        assert_eq!(marks.max(), 100.0);
    }

    #[test]
    fn marks_above_max_are_rejected() {
        let err = Marks::new(55.0, 50.0).expect_err("55/50 should be rejected");

        assert_eq!(err.to_string(), "marks obtained 55 must be in [0, 50]");
    }

    #[test]
    fn non_positive_or_nan_max_is_rejected() {
        assert!(Marks::new(0.0, 0.0).is_err());
        assert!(Marks::new(10.0, f64::NAN).is_err());
        assert!(Marks::new(f64::NAN, 100.0).is_err());
        assert!(Marks::new(-1.0, 100.0).is_err());
    }
}
