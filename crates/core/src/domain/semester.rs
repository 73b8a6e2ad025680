use std::fmt;
use std::str::FromStr;

use super::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Semester(u8);

impl Semester {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidSemester(i64::from(value)))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every semester in ascending order, as offered by the step 1 forms.
    pub fn all() -> impl Iterator<Item = Semester> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Semester {}", self.0)
    }
}

impl TryFrom<i32> for Semester {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| DomainError::InvalidSemester(i64::from(value)))
            .and_then(Self::new)
    }
}

impl From<Semester> for i32 {
    fn from(value: Semester) -> Self {
        i32::from(value.value())
    }
}

impl FromStr for Semester {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::UnparsableSemester(s.trim().to_string()))?;
        i32::try_from(value)
            .map_err(|_| DomainError::InvalidSemester(value))
            .and_then(Self::try_from)
    }
}

#[cfg(test)]
mod tests {
    use super::Semester;

    #[test]
    fn all_lists_eight_semesters() {
        let values: Vec<u8> = Semester::all().map(Semester::value).collect();

        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn out_of_range_semester_is_rejected() {
        let err = Semester::try_from(9).expect_err("9 should be rejected");

        assert_eq!(err.to_string(), "invalid semester: 9. semester must be in [1, 8]");
        assert!(Semester::try_from(0).is_err());
        assert!(Semester::try_from(-3).is_err());
    }

    #[test]
    fn semester_parses_from_form_text() {
        let semester: Semester = "3".parse().expect("3 should parse");

        assert_eq!(semester.value(), 3);
        assert_eq!(semester.to_string(), "Semester 3");
    }

    #[test]
    fn non_numeric_semester_reports_the_input() {
        let err = "three".parse::<Semester>().expect_err("three is not a number");

        assert_eq!(
            err.to_string(),
            "invalid semester: \"three\". semester must be a number in [1, 8]"
        );
    }
}
