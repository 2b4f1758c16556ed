// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: builds URLs, sends requests, maps transport errors.
// ============================================================================

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};
use crate::config::CONFIG;
use crate::error::{js_error, PortalError};
use crate::models::{Course, LoginReply, LoginRequest, Notification, Role, Subject};

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn login_url(&self, role: Role) -> String {
        format!("{}/auth/{}/login", self.base_url, role.login_segment())
    }

    pub fn course_url(&self, course_id: &str) -> String {
        format!("{}/courses/{}", self.base_url, urlencoding::encode(course_id))
    }

    pub fn subjects_url(&self, course_id: &str) -> String {
        format!("{}/subjects", self.course_url(course_id))
    }

    pub fn notifications_url(&self, user_id: u64) -> String {
        format!("{}/admin/notifications?userId={}", self.base_url, user_id)
    }

    pub fn mark_read_url(&self, notification_id: u64, user_id: u64) -> String {
        format!(
            "{}/admin/notifications/mark-read/{}?userId={}",
            self.base_url, notification_id, user_id
        )
    }

    pub fn mark_all_read_url(&self, user_id: u64) -> String {
        format!("{}/admin/notifications/mark-all-read?userId={}", self.base_url, user_id)
    }

    pub fn upload_url(&self) -> String {
        format!("{}/admin/upload-profile-picture", self.base_url)
    }

    /// Returns status and raw body; success/role checks happen in the view model
    pub async fn login(&self, role: Role, request: &LoginRequest) -> Result<LoginReply, PortalError> {
        let url = self.login_url(role);
        log::info!("🔐 [API] POST {}", url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| PortalError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await?;

        let ok = response.ok();
        let status = response.status();
        let body = response.text().await?;
        Ok(LoginReply { ok, status, body })
    }

    pub async fn get_course(&self, course_id: &str) -> Result<Course, PortalError> {
        let response = Request::get(&self.course_url(course_id)).send().await?;
        let response = ensure_ok(response).await?;
        Ok(response.json::<Course>().await?)
    }

    pub async fn get_subjects(&self, course_id: &str) -> Result<Vec<Subject>, PortalError> {
        let response = Request::get(&self.subjects_url(course_id)).send().await?;
        let response = ensure_ok(response).await?;
        let subjects = response.json::<Vec<Subject>>().await?;
        log::info!("📚 [API] {} subjects for course {}", subjects.len(), course_id);
        Ok(subjects)
    }

    pub async fn get_notifications(&self, user_id: u64) -> Result<Vec<Notification>, PortalError> {
        let response = Request::get(&self.notifications_url(user_id)).send().await?;
        let response = ensure_ok(response).await?;
        Ok(response.json::<Vec<Notification>>().await?)
    }

    pub async fn mark_notification_read(&self, notification_id: u64, user_id: u64) -> Result<(), PortalError> {
        let response = Request::post(&self.mark_read_url(notification_id, user_id))
            .send()
            .await?;
        ensure_ok(response).await.map(|_| ())
    }

    pub async fn mark_all_notifications_read(&self, user_id: u64) -> Result<(), PortalError> {
        let response = Request::post(&self.mark_all_read_url(user_id)).send().await?;
        ensure_ok(response).await.map(|_| ())
    }

    /// Multipart `{file, userId}`; the server answers with plain text
    pub async fn upload_profile_picture(&self, file: &File, user_id: u64) -> Result<String, PortalError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob("file", file).map_err(js_error)?;
        form.append_with_str("userId", &user_id.to_string()).map_err(js_error)?;

        log::info!("📤 [API] Uploading profile picture for user {}", user_id);
        let response = Request::post(&self.upload_url())
            .body(form)?
            .send()
            .await?;
        let response = ensure_ok(response).await?;
        Ok(response.text().await?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-success statuses become `Server` errors carrying the body text
async fn ensure_ok(response: Response) -> Result<Response, PortalError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| response.status_text());
    Err(PortalError::Server(if text.is_empty() {
        format!("HTTP {}", status)
    } else {
        text
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::with_base_url("http://localhost:8080/api/")
    }

    #[test]
    fn login_urls_per_role() {
        let api = client();
        assert_eq!(api.login_url(Role::Admin), "http://localhost:8080/api/auth/admin/login");
        assert_eq!(api.login_url(Role::Professor), "http://localhost:8080/api/auth/prof/login");
    }

    #[test]
    fn notification_urls_carry_user_id() {
        let api = client();
        assert_eq!(
            api.notifications_url(7),
            "http://localhost:8080/api/admin/notifications?userId=7"
        );
        assert_eq!(
            api.mark_read_url(12, 7),
            "http://localhost:8080/api/admin/notifications/mark-read/12?userId=7"
        );
        assert_eq!(
            api.mark_all_read_url(7),
            "http://localhost:8080/api/admin/notifications/mark-all-read?userId=7"
        );
    }

    #[test]
    fn course_ids_are_encoded() {
        let api = client();
        assert_eq!(api.subjects_url("it"), "http://localhost:8080/api/courses/it/subjects");
        assert_eq!(api.course_url("comp sci"), "http://localhost:8080/api/courses/comp%20sci");
    }
}
