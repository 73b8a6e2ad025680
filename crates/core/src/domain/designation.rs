use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Teaching role. The short code is what forms submit and the store keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Designation {
    HeadOfDepartment,
    Professor,
    AssistantProfessor,
    Lecturer,
}

impl Designation {
    pub const ALL: [Designation; 4] = [
        Designation::HeadOfDepartment,
        Designation::Professor,
        Designation::AssistantProfessor,
        Designation::Lecturer,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Designation::HeadOfDepartment => "HOD",
            Designation::Professor => "PROF",
            Designation::AssistantProfessor => "ASS_PROF",
            Designation::Lecturer => "LECT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Designation::HeadOfDepartment => "Head of Department",
            Designation::Professor => "Professor",
            Designation::AssistantProfessor => "Assistant Professor",
            Designation::Lecturer => "Lecturer",
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Designation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|designation| designation.code() == code)
            .ok_or_else(|| DomainError::UnknownDesignation(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Designation;

    #[test]
    fn codes_round_trip() {
        for designation in Designation::ALL {
            let parsed: Designation = designation.code().parse().expect("code should parse");
            assert_eq!(parsed, designation);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "DEAN".parse::<Designation>().expect_err("DEAN is not a designation");

        assert_eq!(err.to_string(), "unknown designation code: DEAN");
    }
}
