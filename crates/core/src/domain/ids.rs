use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i32);

        impl $name {
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            pub const fn value(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.value()
            }
        }
    };
}

define_id_type!(DepartmentId);
define_id_type!(SubjectId);
define_id_type!(StudentId);
define_id_type!(TeacherId);
define_id_type!(AccountId);
define_id_type!(AssociationId);
define_id_type!(MarksId);
define_id_type!(AttendanceId);

#[cfg(test)]
mod tests {
    use super::{DepartmentId, SubjectId};

    #[test]
    fn id_parses_from_padded_form_value() {
        let id: DepartmentId = " 42 ".parse().expect("numeric id should parse");

        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!("abc".parse::<SubjectId>().is_err());
    }
}
