// ============================================================================
// PROFILE VIEWMODEL - Profile form, picture upload, password change
// ============================================================================
// Profile edits and password changes stay in the browser; only the picture
// goes to the server.
// ============================================================================

use web_sys::File;
use crate::config::CONFIG;
use crate::error::PortalError;
use crate::models::{Role, Session};
use crate::services::ApiClient;
use crate::state::{AppState, UpdateType};
use crate::utils::{
    ALLOWED_PICTURE_TYPES, MIN_PASSWORD_LEN, PASSWORD_SPECIAL_CHARS, STRONG_PASSWORD_LEN,
    UPLOAD_REPLY_PREFIX,
};

/// Values shown in (and read back from) the profile modal
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    /// Read-only id field (the login name)
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub year_level: String,
    pub specialization: String,
}

impl ProfileForm {
    pub fn load(session: &Session) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let (course, year_level) = match session.role {
            Role::Student => (
                session.course_id.clone().unwrap_or_else(|| "BSIT".to_string()),
                session.year_level.clone().unwrap_or_else(|| "1".to_string()),
            ),
            Role::Professor | Role::Admin => (text(&session.course_id), String::new()),
        };

        Self {
            user_id: session.username.clone(),
            full_name: text(&session.full_name),
            email: text(&session.email),
            phone: text(&session.phone),
            course,
            year_level,
            specialization: text(&session.specialization),
        }
    }

    /// Copies the editable fields into `session`
    pub fn apply_to(&self, session: &mut Session) {
        let opt = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        session.full_name = opt(&self.full_name);
        session.email = opt(&self.email);
        session.phone = opt(&self.phone);
        if session.role == Role::Professor {
            session.specialization = opt(&self.specialization);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// CSS class on the strength bar
    pub fn css_class(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub level: StrengthLevel,
}

pub fn password_strength(password: &str) -> PasswordStrength {
    let checks = [
        password.chars().count() >= STRONG_PASSWORD_LEN,
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)),
        password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase()),
    ];
    let score = checks.iter().filter(|passed| **passed).count() as u8;
    let level = match score {
        0 => StrengthLevel::Weak,
        1 | 2 => StrengthLevel::Medium,
        _ => StrengthLevel::Strong,
    };
    PasswordStrength { score, level }
}

pub fn validate_password_change(new_password: &str, confirm: &str) -> Result<(), PortalError> {
    if new_password != confirm {
        return Err(PortalError::Validation("New passwords don't match!".to_string()));
    }
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PortalError::Validation(format!(
            "Password must be at least {} characters long!",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Whole MB when the cap is at least 1 MiB, else KB; rounded up so the label
/// never reads 0
fn size_limit_label(max_bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if max_bytes >= MB {
        format!("{}MB", max_bytes.div_ceil(MB))
    } else {
        format!("{}KB", max_bytes.div_ceil(KB).max(1))
    }
}

/// Checked before any upload request is built
pub fn validate_picture(size: u64, mime: &str, max_bytes: u64) -> Result<(), PortalError> {
    if size > max_bytes {
        return Err(PortalError::Validation(format!(
            "File size must be less than {}",
            size_limit_label(max_bytes)
        )));
    }
    if !ALLOWED_PICTURE_TYPES.contains(&mime) {
        return Err(PortalError::Validation(
            "Only JPG, PNG, and GIF files are allowed".to_string(),
        ));
    }
    Ok(())
}

/// `"Profile picture uploaded: abc.png"` -> `"abc.png"`
pub fn parse_upload_reply(reply: &str) -> String {
    let reply = reply.trim();
    reply.strip_prefix(UPLOAD_REPLY_PREFIX).unwrap_or(reply).to_string()
}

pub struct ProfileViewModel {
    api: ApiClient,
    state: AppState,
}

impl ProfileViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            api: ApiClient::new(),
            state: state.clone(),
        }
    }

    pub fn load_form(&self) -> Option<ProfileForm> {
        self.state.session.get_session().map(|s| ProfileForm::load(&s))
    }

    pub fn submit(&self, form: &ProfileForm) -> Result<Session, PortalError> {
        let session = self.state.session.update(|s| form.apply_to(s))?;
        self.state.log_activity("Updated profile information");
        self.state.notify_subscribers(UpdateType::Profile);
        log::info!("👤 [PROFILE] Saved profile for {}", session.username);
        Ok(session)
    }

    /// Returns the stored filename
    pub async fn upload_picture(&self, file: &File) -> Result<String, PortalError> {
        validate_picture(file.size() as u64, &file.type_(), CONFIG.max_upload_bytes)?;

        let user_id = self.state.acting_user_id();
        let reply = self.api.upload_profile_picture(file, user_id).await?;
        let filename = parse_upload_reply(&reply);

        self.state
            .session
            .update(|s| s.profile_picture = Some(filename.clone()))?;
        self.state.log_activity("Updated profile picture");
        self.state.notify_subscribers(UpdateType::Profile);
        log::info!("🖼️ [PROFILE] Picture stored as {}", filename);
        Ok(filename)
    }

    /// No request is sent; the current password is not checked client-side
    pub fn change_password(&self, new_password: &str, confirm: &str) -> Result<(), PortalError> {
        validate_password_change(new_password, confirm)?;
        self.state.log_activity("Changed password");
        Ok(())
    }
}
