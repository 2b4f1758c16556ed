// ============================================================================
// AUTH VIEWMODEL - Login + logout for all three portals
// ============================================================================
// One controller parametrized by Role. Returns values; the view navigates.
// ============================================================================

use serde::Deserialize;
use crate::error::PortalError;
use crate::models::session::string_or_number;
use crate::models::{LoginReply, LoginRequest, LoginResponse, Role, Session};
use crate::services::{ActivityService, ApiClient};
use crate::state::{AppState, SessionState};

/// Profile nested under `user` by the newer login endpoints
#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
struct UserPayload {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    course_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    year_level: Option<String>,
    #[serde(default)]
    specialization: Option<String>,
    #[serde(default)]
    profile_picture: Option<String>,
}

/// Turns the raw login reply into a session, enforcing the portal role.
pub fn interpret_login(expected: Role, identifier: &str, reply: &LoginReply) -> Result<Session, PortalError> {
    let response: LoginResponse = match serde_json::from_str(&reply.body) {
        Ok(response) => response,
        Err(e) if reply.ok => {
            log::error!("❌ [AUTH] Unreadable login response ({}): {}", reply.status, e);
            return Err(PortalError::Server("Invalid response format".to_string()));
        }
        Err(_) => return Err(PortalError::Auth("Login failed".to_string())),
    };

    if !reply.ok || !response.success {
        let message = response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Login failed".to_string());
        return Err(PortalError::Auth(message));
    }

    let user: UserPayload = response
        .user
        .as_ref()
        .and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or_default();

    check_role(expected, response.role.as_deref().or(user.role.as_deref()))?;

    let username = response
        .username
        .or(user.username)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| identifier.trim().to_string());

    let mut session = Session::new(username, expected);
    session.id = user.id.or(response.id);
    session.full_name = user.full_name.or(response.full_name);
    session.email = user.email.or(response.email);
    session.phone = user.phone;
    session.course_id = user.course_id.or(response.course_id);
    session.year_level = user.year_level;
    session.specialization = user.specialization;
    session.profile_picture = user.profile_picture;
    session.token = response.token;
    Ok(session)
}

/// Blank fields never reach the server
pub fn validate_credentials(identifier: &str, password: &str) -> Result<(), PortalError> {
    if identifier.trim().is_empty() || password.is_empty() {
        return Err(PortalError::Validation("Please fill in all fields".to_string()));
    }
    Ok(())
}

fn check_role(expected: Role, returned: Option<&str>) -> Result<(), PortalError> {
    let denied = || {
        PortalError::Auth(format!(
            "Access Denied: You are not registered as a {}.",
            expected.as_str()
        ))
    };

    match returned {
        None if expected.requires_role_echo() => Err(denied()),
        None => Ok(()),
        Some(raw) => match raw.parse::<Role>() {
            Ok(role) if role == expected => Ok(()),
            _ => {
                log::warn!("🚫 [AUTH] {} portal got role '{}'", expected.label(), raw);
                Err(denied())
            }
        },
    }
}

pub struct AuthViewModel {
    api: ApiClient,
    session: SessionState,
    activity: ActivityService,
}

impl AuthViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            api: ApiClient::new(),
            session: state.session.clone(),
            activity: state.activity.clone(),
        }
    }

    /// Returns the dashboard path to navigate to
    pub async fn login(&self, role: Role, identifier: &str, password: &str) -> Result<&'static str, PortalError> {
        validate_credentials(identifier, password)?;

        log::info!("🔐 [AUTH] Signing in to the {} portal...", role.label());
        let request = LoginRequest::for_role(role, identifier, password);
        let reply = self.api.login(role, &request).await?;
        let session = interpret_login(role, identifier, &reply)?;

        self.session.set_session(session)?;
        self.activity.log_activity(role, "Logged in");
        log::info!("✅ [AUTH] Signed in as {}", identifier.trim());
        Ok(role.dashboard_path())
    }

    /// Returns the login page to navigate to
    pub fn logout(&self, role: Role) -> &'static str {
        self.session.clear();
        log::info!("👋 [AUTH] Signed out of the {} portal", role.label());
        role.login_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SessionService;
    use crate::utils::MemoryStorage;

    fn reply(ok: bool, body: &str) -> LoginReply {
        LoginReply {
            ok,
            status: if ok { 200 } else { 401 },
            body: body.to_string(),
        }
    }

    #[test]
    fn student_flat_response_becomes_session() {
        let body = r#"{"success":true,"role":"student","username":"2021-0042","courseId":3,"token":"abc"}"#;
        let session = interpret_login(Role::Student, "2021-0042", &reply(true, body)).unwrap();
        assert_eq!(session.role, Role::Student);
        assert_eq!(session.course_id.as_deref(), Some("3"));
        assert_eq!(session.token.as_deref(), Some("abc"));
    }

    #[test]
    fn professor_nested_user_is_used() {
        let body = r#"{"success":true,"token":"t","user":{"id":9,"username":"jdoe","role":"professor","fullName":"Jane Doe","specialization":"Networks"}}"#;
        let session = interpret_login(Role::Professor, "jdoe@school.edu", &reply(true, body)).unwrap();
        assert_eq!(session.id, Some(9));
        assert_eq!(session.username, "jdoe");
        assert_eq!(session.display_name(), "Jane Doe");
        assert_eq!(session.specialization.as_deref(), Some("Networks"));
    }

    #[test]
    fn role_mismatch_is_denied() {
        let body = r#"{"success":true,"role":"student","username":"x"}"#;
        let err = interpret_login(Role::Professor, "x", &reply(true, body)).unwrap_err();
        assert_eq!(
            err,
            PortalError::Auth("Access Denied: You are not registered as a professor.".to_string())
        );
    }

    #[test]
    fn missing_role_only_passes_for_admin() {
        let body = r#"{"success":true,"username":"root"}"#;
        assert!(interpret_login(Role::Admin, "root", &reply(true, body)).is_ok());
        assert!(interpret_login(Role::Student, "root", &reply(true, body)).is_err());

        let body = r#"{"success":true,"role":"student","username":"root"}"#;
        assert!(interpret_login(Role::Admin, "root", &reply(true, body)).is_err());
    }

    #[test]
    fn failure_uses_server_message_or_fallback() {
        let err = interpret_login(Role::Student, "x", &reply(false, r#"{"success":false,"message":"Invalid credentials"}"#))
            .unwrap_err();
        assert_eq!(err.user_message(), "Invalid credentials");

        let err = interpret_login(Role::Student, "x", &reply(true, r#"{"success":false}"#)).unwrap_err();
        assert_eq!(err.user_message(), "Login failed");

        let err = interpret_login(Role::Student, "x", &reply(false, "<html>502</html>")).unwrap_err();
        assert_eq!(err, PortalError::Auth("Login failed".to_string()));
    }

    #[test]
    fn unparsable_success_body_is_a_server_error() {
        let err = interpret_login(Role::Professor, "x", &reply(true, "OK")).unwrap_err();
        assert_eq!(err.to_string(), "Server error: Invalid response format");
    }

    #[test]
    fn blank_credentials_are_rejected_locally() {
        assert!(validate_credentials("   ", "pw").unwrap_err().is_validation());
        assert!(validate_credentials("root", "").unwrap_err().is_validation());
        assert!(validate_credentials("root", "pw").is_ok());
    }

    #[test]
    fn logout_clears_session_and_points_to_login() {
        let store = MemoryStorage::shared();
        let state = AppState::new(Role::Student, store.clone(), "it");
        state.session.set_session(Session::new("2021-0042", Role::Student)).unwrap();

        let vm = AuthViewModel::new(&state);
        assert_eq!(vm.logout(Role::Student), "/Student/student-login.html");
        assert!(SessionService::new(store).load().is_none());
    }
}
