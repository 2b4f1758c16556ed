// ============================================================================
// ROUTES - Page table + route guard
// ============================================================================
// Runs once per page load, before anything is rendered.
// ============================================================================

use crate::models::{Role, Session};

/// Protected pages and the role each one requires
pub const PROTECTED_PAGES: [(&str, Role); 4] = [
    ("/Admin/admin.html", Role::Admin),
    ("/Teaching_Staff/professor-dashboard.html", Role::Professor),
    ("/Student/index.html", Role::Student),
    ("/Student/dashboard.html", Role::Student),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// What the current page is, so the app knows which views to bind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login(Role),
    Dashboard(Role),
    Other,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if let Some(role) = required_role(path) {
            return Page::Dashboard(role);
        }
        Role::ALL
            .iter()
            .find(|role| role.login_path() == path)
            .map(|role| Page::Login(*role))
            .unwrap_or(Page::Other)
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Page::Login(role) | Page::Dashboard(role) => Some(*role),
            Page::Other => None,
        }
    }
}

pub fn required_role(path: &str) -> Option<Role> {
    PROTECTED_PAGES
        .iter()
        .find(|(page, _)| *page == path)
        .map(|(_, role)| *role)
}

/// Unmapped paths are always allowed
pub fn guard(path: &str, session: Option<&Session>) -> GuardDecision {
    let Some(required) = required_role(path) else {
        return GuardDecision::Allow;
    };

    match session {
        Some(session) if session.role == required => GuardDecision::Allow,
        Some(session) => {
            log::warn!(
                "🚫 [GUARD] {} session on {} page, redirecting",
                session.role.label(),
                required.label()
            );
            GuardDecision::Redirect(required.login_path())
        }
        None => {
            log::info!("🔒 [GUARD] No session for {}, redirecting", path);
            GuardDecision::Redirect(required.login_path())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_role_is_allowed() {
        let session = Session::new("2021-0042", Role::Student);
        assert_eq!(guard("/Student/dashboard.html", Some(&session)), GuardDecision::Allow);
        assert_eq!(guard("/Student/index.html", Some(&session)), GuardDecision::Allow);
    }

    #[test]
    fn wrong_role_goes_to_required_login() {
        for (path, required) in PROTECTED_PAGES {
            for role in Role::ALL.into_iter().filter(|r| *r != required) {
                let session = Session::new("someone", role);
                assert_eq!(
                    guard(path, Some(&session)),
                    GuardDecision::Redirect(required.login_path())
                );
            }
        }
    }

    #[test]
    fn missing_session_is_redirected() {
        assert_eq!(
            guard("/Admin/admin.html", None),
            GuardDecision::Redirect("/Admin/admin-login.html")
        );
        assert_eq!(
            guard("/Teaching_Staff/professor-dashboard.html", None),
            GuardDecision::Redirect("/Teaching_Staff/professor-login.html")
        );
    }

    #[test]
    fn unmapped_pages_are_open() {
        assert_eq!(guard("/Student/Roadmap.html", None), GuardDecision::Allow);
        assert_eq!(guard("/Student/student-login.html", None), GuardDecision::Allow);
    }

    #[test]
    fn pages_are_classified() {
        assert_eq!(Page::from_path("/Admin/admin-login.html"), Page::Login(Role::Admin));
        assert_eq!(Page::from_path("/Student/index.html"), Page::Dashboard(Role::Student));
        assert_eq!(Page::from_path("/landing.html"), Page::Other);
    }
}
