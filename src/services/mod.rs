pub mod api_client;
pub mod session_service;
pub mod activity_service;

pub use api_client::ApiClient;
pub use session_service::SessionService;
pub use activity_service::ActivityService;
