// ============================================================================
// GATEWAYS - Costuras inyectables hacia el backend
// ============================================================================
// Los stores y viewmodels dependen de estos traits, no de ApiClient, para
// poder probarlos sin red. Los futures son 'static y !Send (spawn_local).
// ============================================================================

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::models::{AuthResponse, Identity, PageResult, Prediction};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiResult;

/// Colaborador de autenticación
pub trait AuthGateway {
    fn login(&self, email: &str, password: &str) -> LocalBoxFuture<'static, ApiResult<AuthResponse>>;

    fn register(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> LocalBoxFuture<'static, ApiResult<AuthResponse>>;

    fn profile(&self, token: &str) -> LocalBoxFuture<'static, ApiResult<Identity>>;
}

/// Colaborador de inferencia
pub trait Predictor {
    fn predict(&self, text: &str, token: &str) -> LocalBoxFuture<'static, ApiResult<Prediction>>;
}

/// Colección remota consultable por página
pub trait PageSource<T> {
    fn fetch_page(&self, page: u32, page_size: u32) -> LocalBoxFuture<'static, ApiResult<PageResult<T>>>;
}

impl AuthGateway for ApiClient {
    fn login(&self, email: &str, password: &str) -> LocalBoxFuture<'static, ApiResult<AuthResponse>> {
        let client = self.clone();
        let email = email.to_string();
        let password = password.to_string();
        async move { client.login(&email, &password).await }.boxed_local()
    }

    fn register(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> LocalBoxFuture<'static, ApiResult<AuthResponse>> {
        let client = self.clone();
        let display_name = display_name.to_string();
        let email = email.to_string();
        let password = password.to_string();
        async move { client.register(&display_name, &email, &password).await }.boxed_local()
    }

    fn profile(&self, token: &str) -> LocalBoxFuture<'static, ApiResult<Identity>> {
        let client = self.clone();
        let token = token.to_string();
        async move { client.profile(&token).await }.boxed_local()
    }
}

impl Predictor for ApiClient {
    fn predict(&self, text: &str, token: &str) -> LocalBoxFuture<'static, ApiResult<Prediction>> {
        let client = self.clone();
        let text = text.to_string();
        let token = token.to_string();
        async move { client.predict(&text, &token).await }.boxed_local()
    }
}
