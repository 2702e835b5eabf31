//! Project status vocabulary and validation.
//!
//! These must match the default in the `projects` migration.

use crate::error::CoreError;

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_ARCHIVED: &str = "archived";

/// Status assigned to ingested candidate projects pending human review.
/// Never accepted on manual writes.
pub const STATUS_SCRAPED: &str = "scraped";

/// Statuses a user may set directly or through an approved suggestion.
pub const MANUAL_STATUSES: &[&str] = &[
    STATUS_ACTIVE,
    STATUS_INACTIVE,
    STATUS_COMPLETED,
    STATUS_ARCHIVED,
];

/// Validate a status value supplied by a user write.
pub fn validate_manual_status(status: &str) -> Result<(), CoreError> {
    if MANUAL_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            MANUAL_STATUSES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_statuses_accepted() {
        for s in MANUAL_STATUSES {
            assert!(validate_manual_status(s).is_ok());
        }
    }

    #[test]
    fn scraped_rejected_on_manual_write() {
        assert!(validate_manual_status(STATUS_SCRAPED).is_err());
    }

    #[test]
    fn unknown_status_rejected() {
        let err = validate_manual_status("demolished").unwrap_err();
        assert!(err.to_string().contains("Invalid status"));
    }
}
