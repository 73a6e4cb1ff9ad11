// ============================================================================
// AUTH VIEWMODEL - Validación de formularios + login/registro
// ============================================================================

use crate::models::Identity;
use crate::routes::Route;
use crate::services::error::{ApiError, ApiResult};
use crate::state::session_store::SessionStore;
use crate::utils::MIN_PASSWORD_LENGTH;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl LoginForm {
    pub fn validate(&self) -> ApiResult<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ApiError::Validation("Please fill in all fields".to_string()));
        }
        Ok(())
    }
}

impl RegistrationForm {
    pub fn validate(&self) -> ApiResult<()> {
        if self.display_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            return Err(ApiError::Validation("Please fill in all fields".to_string()));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::Validation("Passwords do not match".to_string()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        Ok(())
    }
}

/// ViewModel de autenticación - valida y delega en SessionStore
#[derive(Clone)]
pub struct AuthViewModel {
    session: SessionStore,
}

impl AuthViewModel {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    pub async fn submit_login(&self, form: LoginForm) -> ApiResult<Identity> {
        form.validate()?;
        self.session.login(form.email.trim(), &form.password).await
    }

    pub async fn submit_registration(&self, form: RegistrationForm) -> ApiResult<Identity> {
        form.validate()?;
        self.session
            .register(form.display_name.trim(), form.email.trim(), &form.password)
            .await
    }

    /// Cierra la sesión y devuelve la ruta a la que navegar
    pub fn logout(&self) -> Route {
        self.session.logout();
        Route::after_logout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session_store::tests::FakeAuth;
    use crate::state::SessionStatus;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn registration(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            display_name: "Bea".into(),
            email: "bea@x.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    fn viewmodel() -> (AuthViewModel, SessionStore, Rc<FakeAuth>) {
        let gateway = Rc::new(FakeAuth::default());
        let session = SessionStore::new(gateway.clone(), Rc::new(MemoryStorage::new()));
        session.restore();
        (AuthViewModel::new(session.clone()), session, gateway)
    }

    #[test]
    fn registration_rules() {
        assert_eq!(
            registration("abc", "abd").validate(),
            Err(ApiError::Validation("Passwords do not match".into()))
        );
        assert_eq!(
            registration("ab", "ab").validate(),
            Err(ApiError::Validation("Password must be at least 3 characters".into()))
        );
        assert!(registration("abc", "abc").validate().is_ok());

        let mut blank = registration("abc", "abc");
        blank.display_name = "   ".into();
        assert!(matches!(blank.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn invalid_forms_never_reach_the_backend() {
        let (vm, session, gateway) = viewmodel();

        let err = block_on(vm.submit_registration(registration("abc", "xyz"))).unwrap_err();
        assert_eq!(err.message(), "Passwords do not match");

        let err = block_on(vm.submit_login(LoginForm::default())).unwrap_err();
        assert_eq!(err.message(), "Please fill in all fields");

        assert_eq!(gateway.calls.get(), 0);
        assert_eq!(session.status(), SessionStatus::Anonymous);
    }

    #[test]
    fn login_trims_email_and_authenticates() {
        let (vm, session, _) = viewmodel();
        let form = LoginForm {
            email: "  ana@x.com ".into(),
            password: "secret".into(),
        };

        let identity = block_on(vm.submit_login(form)).unwrap();

        assert_eq!(identity.email, "ana@x.com");
        assert!(session.is_authenticated());

        assert_eq!(vm.logout(), Route::Login);
        assert_eq!(session.status(), SessionStatus::Anonymous);
    }

    #[test]
    fn backend_rejection_is_surfaced_verbatim() {
        let (vm, session, _) = viewmodel();
        let form = LoginForm {
            email: "bad@x.com".into(),
            password: "wrong".into(),
        };

        let err = block_on(vm.submit_login(form)).unwrap_err();

        assert_eq!(err.message(), "invalid credentials");
        assert_eq!(session.status(), SessionStatus::Anonymous);
    }
}
