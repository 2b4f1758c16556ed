pub mod auth_viewmodel;
pub mod notification_viewmodel;
pub mod profile_viewmodel;
pub mod dashboard_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use notification_viewmodel::{NotificationPoller, NotificationViewModel};
pub use profile_viewmodel::{PasswordStrength, ProfileForm, ProfileViewModel, StrengthLevel};
pub use dashboard_viewmodel::DashboardViewModel;
