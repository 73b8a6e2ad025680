//! Record to page-context conversions.

use academics_api_types::{
    AssociationView, AttendanceView, DepartmentView, DesignationView, MarksView,
    StudentProfileView, SubjectView, TeacherProfileView, TeacherSummary,
};
use academics_core::domain::{Designation, SubjectMetrics};

use crate::repository::{
    AssociationRecord, AttendanceRecord, DepartmentRecord, MarksRecord, StudentRecord,
    SubjectRecord, TeacherRecord,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn department(record: &DepartmentRecord) -> DepartmentView {
    DepartmentView {
        id: record.id.value(),
        code: record.code.clone(),
        name: record.name.clone(),
    }
}

pub fn subject(record: &SubjectRecord) -> SubjectView {
    SubjectView {
        id: record.id.value(),
        name: record.name.clone(),
        semester: record.semester.value(),
        department_id: record.department_id.value(),
    }
}

pub fn designation(designation: Designation) -> DesignationView {
    DesignationView {
        code: designation.code().to_string(),
        label: designation.label().to_string(),
    }
}

pub fn designations() -> Vec<DesignationView> {
    Designation::ALL.into_iter().map(designation).collect()
}

pub fn student_profile(
    student: &StudentRecord,
    department_record: &DepartmentRecord,
    subjects: &[SubjectRecord],
) -> StudentProfileView {
    StudentProfileView {
        id: student.id.value(),
        enrollment_no: student.enrollment_no.clone(),
        first_name: student.first_name.clone(),
        last_name: student.last_name.clone(),
        email: student.email.clone(),
        phone: student.phone.clone(),
        address: student.address.clone(),
        profile_picture: student.profile_picture.clone(),
        date_of_birth: student
            .date_of_birth
            .map(|date| date.format(DATE_FORMAT).to_string()),
        date_joined: student.date_joined.format(DATE_FORMAT).to_string(),
        department: department(department_record),
        semester: student.semester.value(),
        subjects: subjects.iter().map(subject).collect(),
    }
}

pub fn teacher_summary(teacher: &TeacherRecord) -> TeacherSummary {
    TeacherSummary {
        id: teacher.id.value(),
        employee_id: teacher.employee_id.clone(),
        first_name: teacher.first_name.clone(),
        last_name: teacher.last_name.clone(),
        email: teacher.email.clone(),
        designation: designation(teacher.designation),
    }
}

pub fn association(record: &AssociationRecord, metrics: SubjectMetrics) -> AssociationView {
    AssociationView {
        id: record.id.value(),
        subject: subject(&record.subject),
        average_marks: metrics.average_marks,
        average_attendance: metrics.average_attendance,
    }
}

pub fn teacher_profile(teacher: &TeacherRecord, subjects: Vec<AssociationView>) -> TeacherProfileView {
    TeacherProfileView {
        id: teacher.id.value(),
        employee_id: teacher.employee_id.clone(),
        first_name: teacher.first_name.clone(),
        last_name: teacher.last_name.clone(),
        email: teacher.email.clone(),
        phone: teacher.phone.clone(),
        address: teacher.address.clone(),
        profile_picture: teacher.profile_picture.clone(),
        salary: teacher.salary,
        designation: designation(teacher.designation),
        date_joined: teacher.date_joined.format(DATE_FORMAT).to_string(),
        subjects,
    }
}

pub fn marks(record: &MarksRecord) -> MarksView {
    MarksView {
        id: record.id.value(),
        student_id: record.student_id.value(),
        subject_id: record.subject_id.value(),
        marks_obtained: record.marks.obtained(),
        max_marks: record.marks.max(),
    }
}

pub fn attendance(record: &AttendanceRecord) -> AttendanceView {
    AttendanceView {
        id: record.id.value(),
        student_id: record.student_id.value(),
        subject_id: record.subject_id.value(),
        date: record.date.format(DATE_FORMAT).to_string(),
        present: record.present,
    }
}
