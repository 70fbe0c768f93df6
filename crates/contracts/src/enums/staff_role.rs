use serde::{Deserialize, Serialize};

/// Role assigned to a staff account. Admins manage staff and settings;
/// managers run the catalog; sales only reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    Manager,
    Sales,
}

impl StaffRole {
    pub fn code(&self) -> &'static str {
        match self {
            StaffRole::Admin => "admin",
            StaffRole::Manager => "manager",
            StaffRole::Sales => "sales",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StaffRole::Admin => "Administrator",
            StaffRole::Manager => "Manager",
            StaffRole::Sales => "Sales",
        }
    }

    pub fn all() -> Vec<StaffRole> {
        vec![StaffRole::Admin, StaffRole::Manager, StaffRole::Sales]
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, StaffRole::Admin)
    }
}
