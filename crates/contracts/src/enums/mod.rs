//! Closed vocabularies shared across entities.

pub mod approval_status;
pub mod staff_role;

pub use approval_status::ApprovalStatus;
pub use staff_role::StaffRole;
