// ============================================================================
// VIEWS - Bind static page markup, render fragments into mount points
// ============================================================================

pub mod message;
pub mod login;
pub mod notifications;
pub mod dashboard;
pub mod profile;
