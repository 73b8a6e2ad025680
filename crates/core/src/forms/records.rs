use chrono::NaiveDate;

use super::{FieldProblem, FieldReader, FormError, FormFields};
use crate::domain::{DepartmentId, Marks, Semester, StudentId, SubjectId};

const DEPARTMENT_CODE_MAX: usize = 10;
const DEPARTMENT_NAME_MAX: usize = 100;
const SUBJECT_NAME_MAX: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentForm {
    pub code: String,
    pub name: String,
}

impl DepartmentForm {
    pub fn parse(fields: &FormFields) -> Result<Self, FormError> {
        let mut reader = FieldReader::new(fields);
        let code = reader.required_text("code", Some(DEPARTMENT_CODE_MAX));
        let name = reader.required_text("name", Some(DEPARTMENT_NAME_MAX));

        let (Some(code), Some(name)) = (code, name) else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        Ok(Self { code, name })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectForm {
    pub name: String,
    pub semester: Semester,
    pub department_id: DepartmentId,
}

impl SubjectForm {
    pub fn parse(fields: &FormFields) -> Result<Self, FormError> {
        let mut reader = FieldReader::new(fields);
        let name = reader.required_text("name", Some(SUBJECT_NAME_MAX));
        let semester = reader.required::<Semester>("semester");
        let department_id = reader.required::<DepartmentId>("department");

        let (Some(name), Some(semester), Some(department_id)) = (name, semester, department_id)
        else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        Ok(Self {
            name,
            semester,
            department_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarksForm {
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    pub marks: Marks,
}

impl MarksForm {
    pub fn parse(fields: &FormFields) -> Result<Self, FormError> {
        let mut reader = FieldReader::new(fields);
        let student_id = reader.required::<StudentId>("student");
        let subject_id = reader.required::<SubjectId>("subject");
        let obtained = reader.required::<f64>("marks_obtained");
        let max = reader
            .optional::<f64>("max_marks")
            .unwrap_or(Marks::DEFAULT_MAX);

        let marks = match obtained.map(|obtained| Marks::new(obtained, max)) {
            Some(Ok(marks)) => Some(marks),
            Some(Err(err)) => {
                reader.reject("marks_obtained", FieldProblem::Invalid(err.to_string()));
                None
            }
            None => None,
        };

        let (Some(student_id), Some(subject_id), Some(marks)) = (student_id, subject_id, marks)
        else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        Ok(Self {
            student_id,
            subject_id,
            marks,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceForm {
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    pub date: NaiveDate,
    pub present: bool,
}

impl AttendanceForm {
    pub fn parse(fields: &FormFields) -> Result<Self, FormError> {
        let mut reader = FieldReader::new(fields);
        let student_id = reader.required::<StudentId>("student");
        let subject_id = reader.required::<SubjectId>("subject");
        let date = match fields.value("date") {
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    reader.reject(
                        "date",
                        FieldProblem::Invalid("must be a date in YYYY-MM-DD form".to_string()),
                    );
                    None
                }
            },
            None => {
                reader.reject("date", FieldProblem::Missing);
                None
            }
        };
        // Entries default to present, like the checkbox on the attendance sheet.
        let present = match fields.value("status") {
            None => Some(true),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "present" | "true" | "on" | "1" => Some(true),
                "absent" | "false" | "off" | "0" => Some(false),
                _ => {
                    reader.reject(
                        "status",
                        FieldProblem::Invalid(format!("has an invalid value '{raw}'")),
                    );
                    None
                }
            },
        };

        let (Some(student_id), Some(subject_id), Some(date), Some(present)) =
            (student_id, subject_id, date, present)
        else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        Ok(Self {
            student_id,
            subject_id,
            date,
            present,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_code_length_is_enforced() {
        let fields: FormFields = [("code", "COMPUTER-ENG"), ("name", "Computer Engineering")]
            .into_iter()
            .collect();
        let err = DepartmentForm::parse(&fields).expect_err("code is too long");

        assert_eq!(err.to_string(), "code must be at most 10 characters");
    }

    #[test]
    fn marks_default_to_one_hundred_max() {
        let fields: FormFields = [("student", "1"), ("subject", "2"), ("marks_obtained", "88")]
            .into_iter()
            .collect();
        let form = MarksForm::parse(&fields).expect("marks should parse");

        assert_eq!(form.marks.max(), 100.0);
        assert_eq!(form.marks.obtained(), 88.0);
    }

    #[test]
    fn marks_above_max_are_a_field_error() {
        let fields: FormFields = [
            ("student", "1"),
            ("subject", "2"),
            ("marks_obtained", "60"),
            ("max_marks", "50"),
        ]
        .into_iter()
        .collect();
        let err = MarksForm::parse(&fields).expect_err("60/50 is invalid");

        assert!(err.has_field("marks_obtained"));
    }

    #[test]
    fn attendance_status_defaults_to_present() {
        let fields: FormFields = [("student", "1"), ("subject", "2"), ("date", "2025-01-06")]
            .into_iter()
            .collect();
        let form = AttendanceForm::parse(&fields).expect("attendance should parse");

        assert!(form.present);

        let fields: FormFields = [
            ("student", "1"),
            ("subject", "2"),
            ("date", "2025-01-06"),
            ("status", "absent"),
        ]
        .into_iter()
        .collect();
        assert!(!AttendanceForm::parse(&fields).expect("absent entry").present);
    }

    #[test]
    fn attendance_requires_a_date() {
        let fields: FormFields = [("student", "1"), ("subject", "2")].into_iter().collect();
        let err = AttendanceForm::parse(&fields).expect_err("date is missing");

        assert_eq!(err.to_string(), "date is required");
    }
}
