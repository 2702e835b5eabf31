//! Edit-suggestion state machine and change-set validation.
//!
//! Suggestions move `pending -> approved` or `pending -> rejected`; both end
//! states are terminal. Re-submission requires a new suggestion.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::status::validate_manual_status;

/// Lifecycle state of an edit suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SuggestionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionStatus::Pending => "pending",
            SuggestionStatus::Approved => "approved",
            SuggestionStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(SuggestionStatus::Pending),
            "approved" => Some(SuggestionStatus::Approved),
            "rejected" => Some(SuggestionStatus::Rejected),
            _ => None,
        }
    }

    /// Whether a transition out of this state into `to` is legal.
    pub fn can_transition(self, to: SuggestionStatus) -> bool {
        matches!(
            (self, to),
            (SuggestionStatus::Pending, SuggestionStatus::Approved)
                | (SuggestionStatus::Pending, SuggestionStatus::Rejected)
        )
    }
}

/// Tri-state review outcome on an edit-history row.
///
/// An explicit third state, not a nullable boolean: `Pending` marks a change
/// awaiting review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    Pending,
    Approved,
    Rejected,
}

impl ReviewState {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewState::Pending => "pending",
            ReviewState::Approved => "approved",
            ReviewState::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ReviewState::Pending),
            "approved" => Some(ReviewState::Approved),
            "rejected" => Some(ReviewState::Rejected),
            _ => None,
        }
    }
}

/// Project fields a suggestion may change.
pub const EDITABLE_FIELDS: &[&str] = &["name", "description", "status", "districts"];

/// Validate a suggestion change-set before it is stored.
///
/// Checks performed:
/// - the map is non-empty
/// - every key is an editable field
/// - `name` is a non-empty string, `description` a string or null
/// - `status` is in the manual vocabulary
/// - `districts` is a non-empty array of non-empty strings
pub fn validate_changes(changes: &Map<String, Value>) -> Result<(), CoreError> {
    if changes.is_empty() {
        return Err(CoreError::Validation(
            "Suggestion changes must contain at least one field".into(),
        ));
    }

    for (field, value) in changes {
        match field.as_str() {
            "name" => match value.as_str() {
                Some(name) if !name.trim().is_empty() => {}
                _ => {
                    return Err(CoreError::Validation(
                        "Field 'name' must be a non-empty string".into(),
                    ))
                }
            },
            "description" => {
                if !value.is_string() && !value.is_null() {
                    return Err(CoreError::Validation(
                        "Field 'description' must be a string or null".into(),
                    ));
                }
            }
            "status" => {
                let status = value.as_str().ok_or_else(|| {
                    CoreError::Validation("Field 'status' must be a string".into())
                })?;
                validate_manual_status(status)?;
            }
            "districts" => validate_district_change(value)?,
            other => {
                return Err(CoreError::Validation(format!(
                    "Field '{other}' is not editable. Editable fields: {}",
                    EDITABLE_FIELDS.join(", ")
                )))
            }
        }
    }

    Ok(())
}

fn validate_district_change(value: &Value) -> Result<(), CoreError> {
    let entries = value.as_array().ok_or_else(|| {
        CoreError::Validation("Field 'districts' must be an array of district names".into())
    })?;
    if entries.is_empty() {
        return Err(CoreError::Validation(
            "Field 'districts' must contain at least one district".into(),
        ));
    }
    for entry in entries {
        match entry.as_str() {
            Some(name) if !name.trim().is_empty() => {}
            _ => {
                return Err(CoreError::Validation(
                    "District names must be non-empty strings".into(),
                ))
            }
        }
    }
    Ok(())
}

/// Extract the district names from a validated `districts` change value.
pub fn district_names_from_change(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn pending_can_reach_both_terminal_states() {
        assert!(SuggestionStatus::Pending.can_transition(SuggestionStatus::Approved));
        assert!(SuggestionStatus::Pending.can_transition(SuggestionStatus::Rejected));
    }

    #[test]
    fn terminal_states_are_final() {
        assert!(!SuggestionStatus::Approved.can_transition(SuggestionStatus::Rejected));
        assert!(!SuggestionStatus::Approved.can_transition(SuggestionStatus::Pending));
        assert!(!SuggestionStatus::Rejected.can_transition(SuggestionStatus::Approved));
    }

    #[test]
    fn status_round_trips_through_strings() {
        for s in [
            SuggestionStatus::Pending,
            SuggestionStatus::Approved,
            SuggestionStatus::Rejected,
        ] {
            assert_eq!(SuggestionStatus::parse(s.as_str()), Some(s));
        }
        assert_eq!(SuggestionStatus::parse("flagged"), None);
    }

    #[test]
    fn review_state_has_three_variants() {
        assert_eq!(ReviewState::parse("pending"), Some(ReviewState::Pending));
        assert_eq!(ReviewState::parse("approved"), Some(ReviewState::Approved));
        assert_eq!(ReviewState::parse("rejected"), Some(ReviewState::Rejected));
        assert_eq!(ReviewState::parse("true"), None);
    }

    #[test]
    fn valid_changes_accepted() {
        let changes = map(json!({
            "name": "Vía Expresa Sur",
            "description": "Obras complementarias",
            "status": "completed",
            "districts": ["Barranco", "Surco"],
        }));
        assert!(validate_changes(&changes).is_ok());
    }

    #[test]
    fn empty_changes_rejected() {
        assert!(validate_changes(&Map::new()).is_err());
    }

    #[test]
    fn unknown_field_rejected() {
        let changes = map(json!({"verified": true}));
        let err = validate_changes(&changes).unwrap_err();
        assert!(err.to_string().contains("not editable"));
    }

    #[test]
    fn scraped_status_rejected_in_changes() {
        let changes = map(json!({"status": "scraped"}));
        assert!(validate_changes(&changes).is_err());
    }

    #[test]
    fn empty_district_list_rejected() {
        let changes = map(json!({"districts": []}));
        assert!(validate_changes(&changes).is_err());
    }

    #[test]
    fn district_change_must_be_strings() {
        let changes = map(json!({"districts": [1, 2]}));
        assert!(validate_changes(&changes).is_err());
    }

    #[test]
    fn district_names_extracted_from_change() {
        let value = json!(["Barranco", "Surco"]);
        assert_eq!(
            district_names_from_change(&value),
            vec!["Barranco".to_string(), "Surco".to_string()]
        );
    }
}
