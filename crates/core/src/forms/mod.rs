//! Typed parsing of submitted forms.
//!
//! Handlers receive raw `name=value` pairs and turn them into one of the
//! typed forms below before any domain logic runs. A failed parse reports
//! every offending field at once.

mod records;
mod registration;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use records::{AttendanceForm, DepartmentForm, MarksForm, SubjectForm};
pub use registration::{CohortSelection, StudentProfileForm, TeacherProfileForm};

/// Raw submitted pairs in submission order. Repeated names are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First non-blank value submitted under `name`, trimmed.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values(name).next()
    }

    /// Every non-blank value submitted under `name`, trimmed.
    pub fn values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let name = name.to_owned();
        self.pairs
            .iter()
            .filter(move |(key, _)| *key == name)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    TooLong { max: usize },
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            FieldProblem::Missing => write!(f, "{} is required", self.field),
            FieldProblem::TooLong { max } => {
                write!(f, "{} must be at most {max} characters", self.field)
            }
            FieldProblem::Invalid(reason) => write!(f, "{} {reason}", self.field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_errors(.fields))]
pub struct FormError {
    pub fields: Vec<FieldError>,
}

impl FormError {
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|error| error.field == field)
    }
}

fn join_errors(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Reads fields one by one, collecting problems instead of stopping at the
/// first one.
struct FieldReader<'a> {
    fields: &'a FormFields,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    fn new(fields: &'a FormFields) -> Self {
        Self {
            fields,
            errors: Vec::new(),
        }
    }

    fn reject(&mut self, field: &'static str, problem: FieldProblem) {
        self.errors.push(FieldError { field, problem });
    }

    fn text(&mut self, field: &'static str, max_len: Option<usize>) -> Option<String> {
        let value = self.fields.value(field)?;
        if let Some(max) = max_len
            && value.chars().count() > max
        {
            self.reject(field, FieldProblem::TooLong { max });
            return None;
        }
        Some(value.to_string())
    }

    fn required_text(&mut self, field: &'static str, max_len: Option<usize>) -> Option<String> {
        if self.fields.value(field).is_none() {
            self.reject(field, FieldProblem::Missing);
            return None;
        }
        self.text(field, max_len)
    }

    fn optional_text(&mut self, field: &'static str, max_len: Option<usize>) -> Option<String> {
        self.text(field, max_len)
    }

    fn parse_value<T>(&mut self, field: &'static str, raw: &str) -> Option<T>
    where
        T: FromStr,
    {
        match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.reject(
                    field,
                    FieldProblem::Invalid(format!("has an invalid value '{raw}'")),
                );
                None
            }
        }
    }

    fn required<T: FromStr>(&mut self, field: &'static str) -> Option<T> {
        let Some(raw) = self.fields.value(field) else {
            self.reject(field, FieldProblem::Missing);
            return None;
        };
        self.parse_value(field, raw)
    }

    fn optional<T: FromStr>(&mut self, field: &'static str) -> Option<T> {
        let raw = self.fields.value(field)?;
        self.parse_value(field, raw)
    }

    fn required_email(&mut self, field: &'static str) -> Option<String> {
        let email = self.required_text(field, Some(254))?;
        if is_plausible_email(&email) {
            Some(email)
        } else {
            self.reject(
                field,
                FieldProblem::Invalid("is not a valid email address".to_string()),
            );
            None
        }
    }

    fn into_error(self) -> FormError {
        FormError {
            fields: self.errors,
        }
    }

    fn finish(self) -> Result<(), FormError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}

fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_absent() {
        let fields: FormFields = [("phone", "   "), ("phone", "555")].into_iter().collect();

        assert_eq!(fields.value("phone"), Some("555"));
        assert_eq!(fields.value("address"), None);
    }

    #[test]
    fn repeated_names_keep_submission_order() {
        let fields: FormFields = [("subjects", "3"), ("other", "x"), ("subjects", "1")]
            .into_iter()
            .collect();

        assert_eq!(fields.values("subjects").collect::<Vec<_>>(), vec!["3", "1"]);
    }

    #[test]
    fn looked_up_values_outlive_the_key() {
        let fields: FormFields = [("semester", " 4 ")].into_iter().collect();

        let value = {
            let key = format!("seme{}", "ster");
            fields.value(&key)
        };
        let all: Vec<&str> = {
            let key = String::from("semester");
            fields.values(&key).collect()
        };

        assert_eq!(value, Some("4"));
        assert_eq!(all, vec!["4"]);
    }

    #[test]
    fn email_plausibility() {
        assert!(is_plausible_email("a.student@college.edu"));
        assert!(!is_plausible_email("no-at-sign.edu"));
        assert!(!is_plausible_email("two@@college.edu"));
        assert!(!is_plausible_email("user@localhost"));
        assert!(!is_plausible_email("spaced user@college.edu"));
    }

    #[test]
    fn form_error_lists_every_field() {
        let error = FormError {
            fields: vec![
                FieldError {
                    field: "email",
                    problem: FieldProblem::Missing,
                },
                FieldError {
                    field: "phone",
                    problem: FieldProblem::TooLong { max: 15 },
                },
            ],
        };

        assert_eq!(
            error.to_string(),
            "email is required; phone must be at most 15 characters"
        );
        assert!(error.has_field("phone"));
        assert!(!error.has_field("address"));
    }
}
