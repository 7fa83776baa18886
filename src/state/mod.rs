// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod alerts;
pub mod app_state;
pub mod reactivity;
pub mod session_context;

pub use alerts::AlertQueue;
pub use app_state::{AppState, Route};
pub use reactivity::Notifier;
pub use session_context::SessionContext;
