//! Role/action authorization policy.
//!
//! A single table-driven decision function, testable without any transport
//! layer. The API's RBAC extractors are thin wrappers around
//! [`is_allowed`].

use serde::{Deserialize, Serialize};

/// Roles resolved by the external identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Viewer,
    Editor,
    Verified,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Editor => "editor",
            Role::Verified => "verified",
            Role::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "viewer" => Some(Role::Viewer),
            "editor" => Some(Role::Editor),
            "verified" => Some(Role::Verified),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every gated action on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewProjects,
    CreateProject,
    UpdateProject,
    DeleteProject,
    CreateDrawing,
    DeleteDrawing,
    CreateAnnotation,
    DeleteAnnotation,
    SuggestEdit,
    ModerateSuggestion,
    RunIngestion,
}

/// Decide whether `role` may perform `action`.
///
/// Role matrix:
/// - viewer: read-only
/// - editor: create/update projects, drawings, annotations, suggestions
/// - verified: everything an editor can, plus approve/reject suggestions
/// - admin: everything, plus hard delete and ingestion runs
pub fn is_allowed(role: Role, action: Action) -> bool {
    match action {
        Action::ViewProjects => true,
        Action::CreateProject
        | Action::UpdateProject
        | Action::CreateDrawing
        | Action::DeleteDrawing
        | Action::CreateAnnotation
        | Action::DeleteAnnotation
        | Action::SuggestEdit => {
            matches!(role, Role::Editor | Role::Verified | Role::Admin)
        }
        Action::ModerateSuggestion => matches!(role, Role::Verified | Role::Admin),
        Action::DeleteProject | Action::RunIngestion => matches!(role, Role::Admin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everyone_can_view() {
        for role in [Role::Viewer, Role::Editor, Role::Verified, Role::Admin] {
            assert!(is_allowed(role, Action::ViewProjects));
        }
    }

    #[test]
    fn viewer_is_read_only() {
        for action in [
            Action::CreateProject,
            Action::UpdateProject,
            Action::DeleteProject,
            Action::CreateDrawing,
            Action::CreateAnnotation,
            Action::SuggestEdit,
            Action::ModerateSuggestion,
            Action::RunIngestion,
        ] {
            assert!(!is_allowed(Role::Viewer, action));
        }
    }

    #[test]
    fn editor_creates_but_does_not_moderate() {
        assert!(is_allowed(Role::Editor, Action::CreateProject));
        assert!(is_allowed(Role::Editor, Action::SuggestEdit));
        assert!(!is_allowed(Role::Editor, Action::ModerateSuggestion));
        assert!(!is_allowed(Role::Editor, Action::DeleteProject));
    }

    #[test]
    fn verified_moderates_but_does_not_delete() {
        assert!(is_allowed(Role::Verified, Action::ModerateSuggestion));
        assert!(!is_allowed(Role::Verified, Action::DeleteProject));
        assert!(!is_allowed(Role::Verified, Action::RunIngestion));
    }

    #[test]
    fn admin_can_do_everything() {
        for action in [
            Action::ViewProjects,
            Action::CreateProject,
            Action::UpdateProject,
            Action::DeleteProject,
            Action::CreateDrawing,
            Action::DeleteDrawing,
            Action::CreateAnnotation,
            Action::DeleteAnnotation,
            Action::SuggestEdit,
            Action::ModerateSuggestion,
            Action::RunIngestion,
        ] {
            assert!(is_allowed(Role::Admin, action));
        }
    }

    #[test]
    fn role_parse_round_trips() {
        for role in [Role::Viewer, Role::Editor, Role::Verified, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
    }
}
