// ============================================================================
// VIEWS MODULE - Pantallas construidas con DOM puro
// ============================================================================

pub mod auth_form;
pub mod history;
pub mod home;
pub mod login;
pub mod nav;
pub mod news;
pub mod pagination;
pub mod predict;
pub mod register;
pub mod shared;

pub use history::render_history;
pub use home::render_home;
pub use login::render_login;
pub use nav::render_nav;
pub use news::render_news;
pub use predict::render_predict;
pub use register::render_register;
pub use shared::{render_empty, render_error, render_loading};
