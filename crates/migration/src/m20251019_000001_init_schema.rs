use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .if_not_exists()
                    .col(pk_auto(Department::Id))
                    .col(string_len(Department::Code, 10).unique_key())
                    .col(string_len(Department::Name, 100).unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(pk_auto(Subject::Id))
                    .col(string_len(Subject::Name, 100))
                    .col(
                        small_integer(Subject::Semester)
                            .check(Expr::col(Subject::Semester).gte(1))
                            .check(Expr::col(Subject::Semester).lte(8)),
                    )
                    .col(integer(Subject::DepartmentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-subject-department_id")
                            .from(Subject::Table, Subject::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subject_department_semester")
                    .table(Subject::Table)
                    .col(Subject::DepartmentId)
                    .col(Subject::Semester)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string_len(Account::Username, 254).unique_key())
                    .col(string_len(Account::Email, 254))
                    .col(string_len(Account::FirstName, 50))
                    .col(string_len(Account::LastName, 50))
                    // "<salt>$<hex sha-256 digest>"
                    .col(string_len(Account::PasswordHash, 128))
                    .col(timestamp(Account::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_len(Student::EnrollmentNo, 20).unique_key())
                    .col(string_len(Student::FirstName, 50))
                    .col(string_len(Student::LastName, 50))
                    .col(string_len(Student::Email, 254).unique_key())
                    .col(string_len_null(Student::Phone, 15))
                    .col(text_null(Student::Address))
                    .col(string_len_null(Student::ProfilePicture, 255))
                    .col(integer(Student::DepartmentId))
                    .col(
                        small_integer(Student::Semester)
                            .check(Expr::col(Student::Semester).gte(1))
                            .check(Expr::col(Student::Semester).lte(8)),
                    )
                    .col(integer_null(Student::AccountId))
                    .col(date_null(Student::DateOfBirth))
                    .col(date(Student::DateJoined))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student-department_id")
                            .from(Student::Table, Student::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student-account_id")
                            .from(Student::Table, Student::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StudentSubject::Table)
                    .if_not_exists()
                    .col(integer(StudentSubject::StudentId))
                    .col(integer(StudentSubject::SubjectId))
                    .primary_key(
                        Index::create()
                            .col(StudentSubject::StudentId)
                            .col(StudentSubject::SubjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student_subject-student_id")
                            .from(StudentSubject::Table, StudentSubject::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student_subject-subject_id")
                            .from(StudentSubject::Table, StudentSubject::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(pk_auto(Teacher::Id))
                    .col(string_len(Teacher::EmployeeId, 20).unique_key())
                    .col(string_len(Teacher::FirstName, 50))
                    .col(string_len(Teacher::LastName, 50))
                    .col(string_len(Teacher::Email, 254).unique_key())
                    .col(string_len_null(Teacher::Phone, 15))
                    .col(text_null(Teacher::Address))
                    .col(string_len_null(Teacher::ProfilePicture, 255))
                    .col(double_null(Teacher::Salary))
                    // Designation enum is represented in app code. DB stores its short code.
                    .col(
                        string_len(Teacher::Designation, 20).check(
                            Expr::col(Teacher::Designation)
                                .is_in(["HOD", "PROF", "ASS_PROF", "LECT"]),
                        ),
                    )
                    .col(date(Teacher::DateJoined))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeacherSubject::Table)
                    .if_not_exists()
                    .col(pk_auto(TeacherSubject::Id))
                    .col(integer(TeacherSubject::TeacherId))
                    .col(integer(TeacherSubject::SubjectId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teacher_subject-teacher_id")
                            .from(TeacherSubject::Table, TeacherSubject::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teacher_subject-subject_id")
                            .from(TeacherSubject::Table, TeacherSubject::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_subject_unique_pair")
                    .table(TeacherSubject::Table)
                    .col(TeacherSubject::TeacherId)
                    .col(TeacherSubject::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Marks::Table)
                    .if_not_exists()
                    .col(pk_auto(Marks::Id))
                    .col(integer(Marks::StudentId))
                    .col(integer(Marks::SubjectId))
                    .col(double(Marks::MarksObtained))
                    .col(double(Marks::MaxMarks).default(100.0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-marks-student_id")
                            .from(Marks::Table, Marks::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-marks-subject_id")
                            .from(Marks::Table, Marks::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_marks_unique_student_subject")
                    .table(Marks::Table)
                    .col(Marks::StudentId)
                    .col(Marks::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_marks_subject_id")
                    .table(Marks::Table)
                    .col(Marks::SubjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(integer(Attendance::StudentId))
                    .col(integer(Attendance::SubjectId))
                    .col(date(Attendance::Date))
                    .col(boolean(Attendance::Status).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attendance-student_id")
                            .from(Attendance::Table, Attendance::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attendance-subject_id")
                            .from(Attendance::Table, Attendance::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_unique_student_subject_date")
                    .table(Attendance::Table)
                    .col(Attendance::StudentId)
                    .col(Attendance::SubjectId)
                    .col(Attendance::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_subject_id")
                    .table(Attendance::Table)
                    .col(Attendance::SubjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Marks::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeacherSubject::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teacher::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StudentSubject::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
    Code,
    Name,
}

#[derive(DeriveIden)]
enum Subject {
    Table,
    Id,
    Name,
    Semester,
    DepartmentId,
}

#[derive(DeriveIden)]
enum Account {
    Table,
    Id,
    Username,
    Email,
    FirstName,
    LastName,
    PasswordHash,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Student {
    Table,
    Id,
    EnrollmentNo,
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    ProfilePicture,
    DepartmentId,
    Semester,
    AccountId,
    DateOfBirth,
    DateJoined,
}

#[derive(DeriveIden)]
enum StudentSubject {
    Table,
    StudentId,
    SubjectId,
}

#[derive(DeriveIden)]
enum Teacher {
    Table,
    Id,
    EmployeeId,
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    ProfilePicture,
    Salary,
    Designation,
    DateJoined,
}

#[derive(DeriveIden)]
enum TeacherSubject {
    Table,
    Id,
    TeacherId,
    SubjectId,
}

#[derive(DeriveIden)]
enum Marks {
    Table,
    Id,
    StudentId,
    SubjectId,
    MarksObtained,
    MaxMarks,
}

#[derive(DeriveIden)]
enum Attendance {
    Table,
    Id,
    StudentId,
    SubjectId,
    Date,
    Status,
}
