pub mod role;
pub mod session;
pub mod auth;
pub mod notification;
pub mod catalog;
pub mod activity;

pub use role::Role;
pub use session::Session;
pub use auth::{LoginReply, LoginRequest, LoginResponse};
pub use notification::{badge_text, notification_id_from_js, unread_count, Notification};
pub use catalog::{card_color, year_label, Course, Subject, YearFilter};
pub use activity::{ActivityLog, ActivityLogEntry, RecentView, RecentViews};
