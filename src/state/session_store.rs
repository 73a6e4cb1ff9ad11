// ============================================================================
// SESSION STORE - Fuente única del estado de autenticación
// ============================================================================
// Se crea una vez al arrancar y se pasa por AppState a cada vista.
// Persistencia y backend inyectados: KeyValueStore + AuthGateway.
// ============================================================================

use std::rc::Rc;

use crate::models::{AuthResponse, Identity};
use crate::services::error::{ApiError, ApiResult};
use crate::services::gateways::AuthGateway;
use crate::state::reactivity::ReactiveState;
use crate::utils::{load_json, save_json, KeyValueStore, STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// Solo antes de que termine restore()
    Unknown,
    Authenticated,
    Anonymous,
}

/// Authenticated si y solo si hay token e identidad
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    identity: Option<Identity>,
    token: Option<String>,
    status: SessionStatus,
}

impl Session {
    pub fn unknown() -> Self {
        Self {
            identity: None,
            token: None,
            status: SessionStatus::Unknown,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            identity: None,
            token: None,
            status: SessionStatus::Anonymous,
        }
    }

    pub fn authenticated(token: String, identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            token: Some(token),
            status: SessionStatus::Authenticated,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }
}

#[derive(Clone)]
pub struct SessionStore {
    state: ReactiveState<Session>,
    gateway: Rc<dyn AuthGateway>,
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(gateway: Rc<dyn AuthGateway>, storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            state: ReactiveState::new(Session::unknown()),
            gateway,
            storage,
        }
    }

    /// Lee token + identidad persistidos. Debe completarse antes de renderizar
    /// vistas protegidas.
    pub fn restore(&self) -> SessionStatus {
        let token = match self.storage.get(STORAGE_KEY_TOKEN) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("⚠️ [SESSION] No se pudo leer el token: {}", e);
                None
            }
        };
        let identity = load_json::<Identity>(self.storage.as_ref(), STORAGE_KEY_USER);

        let session = match (token, identity) {
            (Some(token), Some(identity)) => {
                log::info!("💾 [SESSION] Sesión restaurada para {}", identity.email);
                Session::authenticated(token, identity)
            }
            (None, None) => {
                log::info!("ℹ️ [SESSION] Sin sesión guardada");
                Session::anonymous()
            }
            _ => {
                log::warn!("⚠️ [SESSION] Sesión guardada incompleta, se descarta");
                self.clear_persisted();
                Session::anonymous()
            }
        };

        let status = session.status();
        self.state.set(session);
        status
    }

    /// Login contra el backend. En error el estado no cambia.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Identity> {
        let response = self.gateway.login(email, password).await.map_err(|e| {
            log::error!("❌ [SESSION] Login fallido para {}: {}", email, e);
            e
        })?;
        self.commit(response)
    }

    /// Registro: mismo contrato que login
    pub async fn register(&self, display_name: &str, email: &str, password: &str) -> ApiResult<Identity> {
        let response = self
            .gateway
            .register(display_name, email, password)
            .await
            .map_err(|e| {
                log::error!("❌ [SESSION] Registro fallido para {}: {}", email, e);
                e
            })?;
        self.commit(response)
    }

    /// Comprueba el token contra /auth/me; si el backend lo rechaza se cierra
    /// la sesión.
    pub async fn verify(&self) -> ApiResult<Identity> {
        let token = self.token().ok_or_else(ApiError::not_authenticated)?;
        match self.gateway.profile(&token).await {
            Ok(identity) => Ok(identity),
            Err(e) if e.is_auth() => {
                log::warn!("⚠️ [SESSION] Token rechazado, cerrando sesión: {}", e);
                self.logout();
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Limpia memoria y storage; siempre termina en Anonymous
    pub fn logout(&self) {
        log::info!("👋 [SESSION] Logout");
        self.clear_persisted();
        self.state.set(Session::anonymous());
    }

    /// Persiste primero; solo si ambas claves se escriben se reemplaza el
    /// estado en memoria.
    fn commit(&self, response: AuthResponse) -> ApiResult<Identity> {
        let AuthResponse { token, identity, .. } = response;

        let previous_token = self.storage.get(STORAGE_KEY_TOKEN).ok().flatten();
        let previous_user = self.storage.get(STORAGE_KEY_USER).ok().flatten();

        let written = self
            .storage
            .set(STORAGE_KEY_TOKEN, &token)
            .and_then(|_| save_json(self.storage.as_ref(), STORAGE_KEY_USER, &identity));

        if let Err(e) = written {
            log::error!("❌ [SESSION] Error guardando sesión: {}", e);
            self.rollback(STORAGE_KEY_TOKEN, previous_token);
            self.rollback(STORAGE_KEY_USER, previous_user);
            return Err(ApiError::Storage(e));
        }

        log::info!("✅ [SESSION] Sesión iniciada: {}", identity.email);
        self.state.set(Session::authenticated(token, identity.clone()));
        Ok(identity)
    }

    fn rollback(&self, key: &str, previous: Option<String>) {
        let restored = match previous {
            Some(value) => self.storage.set(key, &value),
            None => self.storage.remove(key),
        };
        if let Err(e) = restored {
            log::warn!("⚠️ [SESSION] No se pudo revertir '{}': {}", key, e);
        }
    }

    fn clear_persisted(&self) {
        for key in [STORAGE_KEY_TOKEN, STORAGE_KEY_USER] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("⚠️ [SESSION] Error limpiando '{}': {}", key, e);
            }
        }
    }

    pub fn session(&self) -> Session {
        self.state.get()
    }

    pub fn status(&self) -> SessionStatus {
        self.state.with(|s| s.status())
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.token().map(str::to_string))
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.with(|s| s.identity().cloned())
    }

    /// Notificado tras cada cambio de sesión
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&Session) + 'static,
    {
        self.state.subscribe(callback);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use futures::future::{self, LocalBoxFuture};
    use futures::FutureExt;
    use std::cell::{Cell, RefCell};

    pub(crate) fn identity() -> Identity {
        Identity {
            id: 1,
            email: "ana@x.com".into(),
            display_name: "Ana".into(),
        }
    }

    /// Backend falso: acepta una única pareja email/password
    #[derive(Default)]
    pub(crate) struct FakeAuth {
        pub calls: Cell<usize>,
        pub profile_error: RefCell<Option<ApiError>>,
    }

    impl AuthGateway for FakeAuth {
        fn login(&self, email: &str, password: &str) -> LocalBoxFuture<'static, ApiResult<AuthResponse>> {
            self.calls.set(self.calls.get() + 1);
            let result = if email == "ana@x.com" && password == "secret" {
                Ok(AuthResponse {
                    message: Some("ok".into()),
                    token: "tok-1".into(),
                    identity: identity(),
                })
            } else {
                Err(ApiError::from_status(401, Some("invalid credentials".into())))
            };
            future::ready(result).boxed_local()
        }

        fn register(
            &self,
            display_name: &str,
            email: &str,
            _password: &str,
        ) -> LocalBoxFuture<'static, ApiResult<AuthResponse>> {
            self.calls.set(self.calls.get() + 1);
            let result = if email == "taken@x.com" {
                Err(ApiError::from_status(409, Some("Email already registered".into())))
            } else {
                Ok(AuthResponse {
                    message: None,
                    token: "tok-new".into(),
                    identity: Identity {
                        id: 2,
                        email: email.to_string(),
                        display_name: display_name.to_string(),
                    },
                })
            };
            future::ready(result).boxed_local()
        }

        fn profile(&self, _token: &str) -> LocalBoxFuture<'static, ApiResult<Identity>> {
            let result = match self.profile_error.borrow().clone() {
                Some(e) => Err(e),
                None => Ok(identity()),
            };
            future::ready(result).boxed_local()
        }
    }

    /// Storage que falla al escribir una clave concreta
    struct FailingStorage {
        inner: MemoryStorage,
        failing_key: &'static str,
    }

    impl KeyValueStore for FailingStorage {
        fn get(&self, key: &str) -> Result<Option<String>, String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            if key == self.failing_key {
                return Err("quota exceeded".into());
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), String> {
            self.inner.remove(key)
        }
    }

    fn store_with(storage: MemoryStorage) -> (SessionStore, Rc<FakeAuth>) {
        let gateway = Rc::new(FakeAuth::default());
        let store = SessionStore::new(gateway.clone(), Rc::new(storage));
        (store, gateway)
    }

    #[test]
    fn starts_unknown_until_restored() {
        let (store, _) = store_with(MemoryStorage::new());
        assert_eq!(store.status(), SessionStatus::Unknown);
        assert_eq!(store.restore(), SessionStatus::Anonymous);
    }

    #[test]
    fn login_persists_token_and_identity() {
        let storage = MemoryStorage::new();
        let (store, _) = store_with(storage.clone());
        store.restore();

        let identity = block_on(store.login("ana@x.com", "secret")).unwrap();

        assert_eq!(identity.display_name, "Ana");
        assert_eq!(store.status(), SessionStatus::Authenticated);
        assert_eq!(store.token().as_deref(), Some("tok-1"));
        assert_eq!(storage.get(STORAGE_KEY_TOKEN).unwrap().as_deref(), Some("tok-1"));
        let persisted: Identity = load_json(&storage, STORAGE_KEY_USER).unwrap();
        assert_eq!(persisted, identity);
    }

    #[test]
    fn rejected_login_leaves_state_untouched() {
        let storage = MemoryStorage::new();
        let (store, _) = store_with(storage.clone());
        store.restore();

        let err = block_on(store.login("bad@x.com", "wrong")).unwrap_err();

        assert_eq!(err.message(), "invalid credentials");
        assert_eq!(store.status(), SessionStatus::Anonymous);
        assert!(storage.is_empty());
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let storage = MemoryStorage::new();
        let (store, _) = store_with(storage.clone());
        block_on(store.login("ana@x.com", "secret")).unwrap();

        store.logout();

        assert_eq!(store.status(), SessionStatus::Anonymous);
        assert_eq!(store.token(), None);
        assert_eq!(store.identity(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn restore_reads_previous_login() {
        let storage = MemoryStorage::new();
        let (first, _) = store_with(storage.clone());
        block_on(first.login("ana@x.com", "secret")).unwrap();

        let (second, _) = store_with(storage);
        assert_eq!(second.restore(), SessionStatus::Authenticated);
        assert_eq!(second.identity(), Some(identity()));
    }

    #[test]
    fn restore_discards_token_without_identity() {
        let storage = MemoryStorage::new();
        storage.set(STORAGE_KEY_TOKEN, "orphan").unwrap();
        let (store, _) = store_with(storage.clone());

        assert_eq!(store.restore(), SessionStatus::Anonymous);
        assert!(storage.is_empty());
    }

    #[test]
    fn restore_discards_identity_without_token() {
        let storage = MemoryStorage::new();
        save_json(&storage, STORAGE_KEY_USER, &identity()).unwrap();
        let (store, _) = store_with(storage.clone());

        assert_eq!(store.restore(), SessionStatus::Anonymous);
        assert_eq!(store.identity(), None);
        assert_eq!(store.token(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn restore_discards_corrupt_identity() {
        let storage = MemoryStorage::new();
        storage.set(STORAGE_KEY_TOKEN, "tok").unwrap();
        storage.set(STORAGE_KEY_USER, "{broken").unwrap();
        let (store, _) = store_with(storage);

        assert_eq!(store.restore(), SessionStatus::Anonymous);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn register_uses_registration_endpoint() {
        let (store, gateway) = store_with(MemoryStorage::new());
        let identity = block_on(store.register("Bea", "bea@x.com", "pw1")).unwrap();
        assert_eq!(identity.display_name, "Bea");
        assert_eq!(store.token().as_deref(), Some("tok-new"));
        assert_eq!(gateway.calls.get(), 1);

        let err = block_on(store.register("Bea", "taken@x.com", "pw1")).unwrap_err();
        assert_eq!(err.message(), "Email already registered");
        // El registro fallido no pisa la sesión anterior
        assert_eq!(store.token().as_deref(), Some("tok-new"));
    }

    #[test]
    fn failed_persist_rolls_back_and_keeps_memory() {
        let inner = MemoryStorage::new();
        let storage = FailingStorage {
            inner: inner.clone(),
            failing_key: STORAGE_KEY_USER,
        };
        let store = SessionStore::new(Rc::new(FakeAuth::default()), Rc::new(storage));
        store.restore();

        let err = block_on(store.login("ana@x.com", "secret")).unwrap_err();

        assert!(matches!(err, ApiError::Storage(_)));
        assert_eq!(store.status(), SessionStatus::Anonymous);
        assert!(inner.is_empty());
    }

    #[test]
    fn verify_logs_out_on_rejected_token() {
        let storage = MemoryStorage::new();
        let (store, gateway) = store_with(storage.clone());
        block_on(store.login("ana@x.com", "secret")).unwrap();
        assert!(block_on(store.verify()).is_ok());

        *gateway.profile_error.borrow_mut() = Some(ApiError::Auth("Token expired".into()));
        let err = block_on(store.verify()).unwrap_err();

        assert!(err.is_auth());
        assert_eq!(store.status(), SessionStatus::Anonymous);
        assert!(storage.is_empty());
    }

    #[test]
    fn verify_keeps_session_on_network_error() {
        let (store, gateway) = store_with(MemoryStorage::new());
        block_on(store.login("ana@x.com", "secret")).unwrap();
        *gateway.profile_error.borrow_mut() = Some(ApiError::Network("offline".into()));

        assert!(block_on(store.verify()).is_err());
        assert!(store.is_authenticated());
    }

    #[test]
    fn subscribers_see_each_transition() {
        let (store, _) = store_with(MemoryStorage::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        store.subscribe(move |s| seen_clone.borrow_mut().push(s.status()));

        store.restore();
        block_on(store.login("ana@x.com", "secret")).unwrap();
        store.logout();

        assert_eq!(
            *seen.borrow(),
            vec![
                SessionStatus::Anonymous,
                SessionStatus::Authenticated,
                SessionStatus::Anonymous
            ]
        );
    }
}
