pub mod auth_viewmodel;
pub mod predict_viewmodel;

pub use auth_viewmodel::{AuthViewModel, LoginForm, RegistrationForm};
pub use predict_viewmodel::PredictViewModel;
