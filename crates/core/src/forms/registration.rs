use chrono::NaiveDate;

use super::{FieldProblem, FieldReader, FormError, FormFields};
use crate::domain::{Cohort, DepartmentId, Designation, Semester, SubjectId};

const ENROLLMENT_NO_MAX: usize = 20;
const EMPLOYEE_ID_MAX: usize = 20;
const NAME_MAX: usize = 50;
const PHONE_MAX: usize = 15;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Step 1 of both wizards: `department` and `semester`.
pub struct CohortSelection;

impl CohortSelection {
    pub fn parse(fields: &FormFields) -> Result<Cohort, FormError> {
        let mut reader = FieldReader::new(fields);
        let department_id = reader.required::<DepartmentId>("department");
        let semester = reader.required::<Semester>("semester");

        let (Some(department_id), Some(semester)) = (department_id, semester) else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        Ok(Cohort {
            department_id,
            semester,
        })
    }

    /// Lenient reading of the teacher step 2 query (`dept`, `sem`). Anything
    /// absent or malformed yields no cohort.
    pub fn from_query(dept: Option<&str>, sem: Option<&str>) -> Option<Cohort> {
        let department_id = dept?.parse::<DepartmentId>().ok()?;
        let semester = sem?.parse::<Semester>().ok()?;
        Some(Cohort {
            department_id,
            semester,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfileForm {
    pub enrollment_no: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture: Option<String>,
}

impl StudentProfileForm {
    pub fn parse(fields: &FormFields) -> Result<Self, FormError> {
        let mut reader = FieldReader::new(fields);
        let enrollment_no = reader.required_text("enrollment_no", Some(ENROLLMENT_NO_MAX));
        let first_name = reader.required_text("first_name", Some(NAME_MAX));
        let last_name = reader.required_text("last_name", Some(NAME_MAX));
        let email = reader.required_email("email");
        let password = reader.required_text("password", None);
        let phone = reader.optional_text("phone", Some(PHONE_MAX));
        let address = reader.optional_text("address", None);
        let profile_picture = reader.optional_text("profile_picture", None);
        let date_of_birth = match fields.value("date_of_birth") {
            Some(raw) => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    reader.reject(
                        "date_of_birth",
                        FieldProblem::Invalid("must be a date in YYYY-MM-DD form".to_string()),
                    );
                    None
                }
            },
            None => None,
        };

        let (Some(enrollment_no), Some(first_name), Some(last_name), Some(email), Some(password)) =
            (enrollment_no, first_name, last_name, email, password)
        else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        Ok(Self {
            enrollment_no,
            first_name,
            last_name,
            email,
            password,
            phone,
            address,
            date_of_birth,
            profile_picture,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeacherProfileForm {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub designation: Designation,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub salary: Option<f64>,
    pub profile_picture: Option<String>,
    /// Selected subjects, repeated selections collapsed, first-seen order.
    pub subjects: Vec<SubjectId>,
}

impl TeacherProfileForm {
    pub fn parse(fields: &FormFields) -> Result<Self, FormError> {
        let mut reader = FieldReader::new(fields);
        let employee_id = reader.required_text("employee_id", Some(EMPLOYEE_ID_MAX));
        let first_name = reader.required_text("first_name", Some(NAME_MAX));
        let last_name = reader.required_text("last_name", Some(NAME_MAX));
        let email = reader.required_email("email");
        let designation = reader.required::<Designation>("designation");
        let phone = reader.optional_text("phone", Some(PHONE_MAX));
        let address = reader.optional_text("address", None);
        let profile_picture = reader.optional_text("profile_picture", None);
        let salary = reader.optional::<f64>("salary");
        if let Some(salary) = salary
            && !(salary.is_finite() && salary >= 0.0)
        {
            reader.reject(
                "salary",
                FieldProblem::Invalid("must be a non-negative amount".to_string()),
            );
        }

        let mut subjects = Vec::new();
        for raw in fields.values("subjects") {
            match raw.parse::<SubjectId>() {
                Ok(id) if !subjects.contains(&id) => subjects.push(id),
                Ok(_) => {}
                Err(_) => reader.reject(
                    "subjects",
                    FieldProblem::Invalid(format!("has an invalid value '{raw}'")),
                ),
            }
        }

        let (Some(employee_id), Some(first_name), Some(last_name), Some(email), Some(designation)) =
            (employee_id, first_name, last_name, email, designation)
        else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        Ok(Self {
            employee_id,
            first_name,
            last_name,
            email,
            designation,
            phone,
            address,
            salary,
            profile_picture,
            subjects,
        })
    }
}
