use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Portal a user belongs to. Gates pages and picks the login endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
    Professor,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Student, Role::Professor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::Professor => "professor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Student => "Student",
            Role::Professor => "Professor",
        }
    }

    /// Path segment of `/auth/{segment}/login`
    pub fn login_segment(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::Professor => "prof",
        }
    }

    pub fn login_path(&self) -> &'static str {
        match self {
            Role::Admin => "/Admin/admin-login.html",
            Role::Student => "/Student/student-login.html",
            Role::Professor => "/Teaching_Staff/professor-login.html",
        }
    }

    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/Admin/admin.html",
            Role::Student => "/Student/dashboard.html",
            Role::Professor => "/Teaching_Staff/professor-dashboard.html",
        }
    }

    /// Local storage key of this portal's activity log
    pub fn activity_key(&self) -> &'static str {
        match self {
            Role::Admin => "adminActivities",
            Role::Student => "studentActivities",
            Role::Professor => "professorActivities",
        }
    }

    /// Student and professor logins must echo the portal role back
    pub fn requires_role_echo(&self) -> bool {
        !matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "student" => Ok(Role::Student),
            "professor" | "prof" => Ok(Role::Professor),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn professor_uses_short_endpoint_segment() {
        assert_eq!(Role::Professor.login_segment(), "prof");
        assert_eq!(Role::Student.login_segment(), "student");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("STUDENT".parse::<Role>(), Ok(Role::Student));
        assert_eq!(" Professor ".parse::<Role>(), Ok(Role::Professor));
        assert!("janitor".parse::<Role>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}
