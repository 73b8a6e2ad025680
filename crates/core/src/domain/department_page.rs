/// Static information pages, one per engineering department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartmentPage {
    Computer,
    InformationTechnology,
    Electrical,
    AiDataScience,
    Civil,
    Mechanical,
    ElectronicsTelecommunication,
}

impl DepartmentPage {
    pub const ALL: [DepartmentPage; 7] = [
        DepartmentPage::Computer,
        DepartmentPage::InformationTechnology,
        DepartmentPage::Electrical,
        DepartmentPage::AiDataScience,
        DepartmentPage::Civil,
        DepartmentPage::Mechanical,
        DepartmentPage::ElectronicsTelecommunication,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            DepartmentPage::Computer => "computer",
            DepartmentPage::InformationTechnology => "it",
            DepartmentPage::Electrical => "electrical",
            DepartmentPage::AiDataScience => "ai-ds",
            DepartmentPage::Civil => "civil",
            DepartmentPage::Mechanical => "mechanical",
            DepartmentPage::ElectronicsTelecommunication => "electronics-telecommunication",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DepartmentPage::Computer => "Computer Engineering",
            DepartmentPage::InformationTechnology => "Information Technology Engineering",
            DepartmentPage::Electrical => "Electrical Engineering",
            DepartmentPage::AiDataScience => "AI & Data Science Engineering",
            DepartmentPage::Civil => "Civil Engineering",
            DepartmentPage::Mechanical => "Mechanical Engineering",
            DepartmentPage::ElectronicsTelecommunication => {
                "Electronics & Telecommunication Engineering"
            }
        }
    }

    pub fn path(self) -> String {
        format!("/{}-engineering/", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::DepartmentPage;
    use std::collections::HashSet;

    #[test]
    fn every_page_has_a_distinct_path() {
        let paths: HashSet<String> = DepartmentPage::ALL.iter().map(|p| p.path()).collect();

        assert_eq!(paths.len(), DepartmentPage::ALL.len());
        assert!(paths.contains("/electronics-telecommunication-engineering/"));
        assert!(paths.contains("/ai-ds-engineering/"));
    }
}
