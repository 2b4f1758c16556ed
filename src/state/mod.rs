// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod session_state;
pub mod notification_state;
pub mod dashboard_state;
pub mod app_state;

pub use session_state::*;
pub use notification_state::*;
pub use dashboard_state::*;
pub use app_state::*;
