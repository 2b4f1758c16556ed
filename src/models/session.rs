use serde::{Deserialize, Deserializer, Serialize};
use crate::models::Role;

// ============================================================================
// SESSION - Signed-in user as persisted under the `user` key
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub username: String,

    pub role: Role,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The backend sends numbers or strings here depending on the endpoint
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "string_or_number")]
    pub course_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "string_or_number")]
    pub year_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,

    /// Filename under `{server}/uploads/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Session {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            id: None,
            username: username.into(),
            role,
            full_name: None,
            email: None,
            phone: None,
            course_id: None,
            year_level: None,
            specialization: None,
            profile_picture: None,
            token: None,
        }
    }

    /// Full name when set, otherwise the login name
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }

    /// Id used for notification and upload requests
    pub fn user_id(&self, fallback: u64) -> u64 {
        self.id.unwrap_or(fallback)
    }

    pub fn avatar_url(&self, server_base: &str) -> Option<String> {
        self.profile_picture
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| format!("{}/uploads/{}", server_base.trim_end_matches('/'), name))
    }
}

/// Accepts `"3"`, `3` or `null` and keeps it as text
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_numeric_course_and_year() {
        let json = r#"{"username":"s-001","role":"student","courseId":3,"yearLevel":"2"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.course_id.as_deref(), Some("3"));
        assert_eq!(session.year_level.as_deref(), Some("2"));
        assert_eq!(session.id, None);
    }

    #[test]
    fn display_name_prefers_full_name() {
        let mut session = Session::new("jdoe", Role::Professor);
        assert_eq!(session.display_name(), "jdoe");
        session.full_name = Some("Jane Doe".to_string());
        assert_eq!(session.display_name(), "Jane Doe");
    }

    #[test]
    fn avatar_url_is_derived_from_server_base() {
        let mut session = Session::new("jdoe", Role::Student);
        assert_eq!(session.avatar_url("http://localhost:8080"), None);
        session.profile_picture = Some("42_me.png".to_string());
        assert_eq!(
            session.avatar_url("http://localhost:8080/").as_deref(),
            Some("http://localhost:8080/uploads/42_me.png")
        );
    }

    #[test]
    fn user_id_falls_back_when_missing() {
        let mut session = Session::new("jdoe", Role::Student);
        assert_eq!(session.user_id(1), 1);
        session.id = Some(17);
        assert_eq!(session.user_id(1), 17);
    }
}
