use serde::{Deserialize, Serialize};
use crate::models::Role;
use crate::models::session::string_or_number;

/// Body of `POST /auth/{segment}/login`.
/// The admin form posts `username`; student and professor forms post `identifier`.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub password: String,
}

impl LoginRequest {
    pub fn for_role(role: Role, identifier: &str, password: &str) -> Self {
        let identifier = identifier.trim().to_string();
        match role {
            Role::Admin => Self {
                username: Some(identifier),
                identifier: None,
                password: password.to_string(),
            },
            Role::Student | Role::Professor => Self {
                username: None,
                identifier: Some(identifier),
                password: password.to_string(),
            },
        }
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub course_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Newer portal endpoints nest the profile here
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

/// Raw outcome of the login POST, interpreted by the auth view model
#[derive(Clone, Debug, PartialEq)]
pub struct LoginReply {
    pub ok: bool,
    pub status: u16,
    pub body: String,
}
