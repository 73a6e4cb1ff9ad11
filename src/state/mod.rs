// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod paged_list;
pub mod pagination;
pub mod reactivity;
pub mod session_store;

pub use app_state::*;
pub use paged_list::*;
pub use pagination::*;
pub use reactivity::*;
pub use session_store::{Session, SessionStatus, SessionStore};
