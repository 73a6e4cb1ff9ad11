// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP y clasifica errores
// ============================================================================

use futures::{pin_mut, select, FutureExt};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::models::{
    AuthResponse, ErrorBody, HealthResponse, HistoryResponse, Identity, LoginRequest,
    NewsResponse, Prediction, PredictionRequest, ProfileResponse, RegisterRequest,
};
use crate::services::error::{ApiError, ApiResult};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
            timeout_ms: CONFIG.network_timeout_ms(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms: CONFIG.network_timeout_ms(),
        }
    }

    /// URL absoluta para un path bajo /api
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    fn page_query(page: u32, page_size: u32) -> [(&'static str, String); 2] {
        [("page", page.to_string()), ("view", page_size.to_string())]
    }

    /// Registro: POST /auth/register
    pub async fn register(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> ApiResult<AuthResponse> {
        let body = RegisterRequest {
            display_name: display_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("📝 [API] Registrando usuario: {}", email);

        let request = Request::post(&self.endpoint("auth/register"))
            .json(&body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?;
        self.send(request).await
    }

    /// Login: POST /auth/login
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 [API] Login para: {}", email);

        let request = Request::post(&self.endpoint("auth/login"))
            .json(&body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?;
        self.send(request).await
    }

    /// Perfil del token actual: GET /auth/me
    pub async fn profile(&self, token: &str) -> ApiResult<Identity> {
        let request = Request::get(&self.endpoint("auth/me"))
            .header("Authorization", &Self::bearer(token))
            .build()
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?;
        let response: ProfileResponse = self.send(request).await?;
        Ok(response.user)
    }

    /// Predicción de sentimiento (requiere token)
    pub async fn predict(&self, text: &str, token: &str) -> ApiResult<Prediction> {
        let body = PredictionRequest {
            text: text.to_string(),
        };

        log::info!("🔮 [API] Prediciendo sentimiento ({} caracteres)", text.chars().count());

        let request = Request::post(&self.endpoint("predict"))
            .header("Authorization", &Self::bearer(token))
            .json(&body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?;
        self.send(request).await
    }

    /// Noticias paginadas (sin auth)
    pub async fn news(&self, page: u32, page_size: u32) -> ApiResult<NewsResponse> {
        log::info!("📰 [API] Noticias página {} ({} por página)", page, page_size);

        let request = Request::get(&self.endpoint("news"))
            .query(Self::page_query(page, page_size))
            .build()
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?;
        self.send(request).await
    }

    /// Historial paginado del usuario (requiere token)
    pub async fn history(&self, token: &str, page: u32, page_size: u32) -> ApiResult<HistoryResponse> {
        log::info!("📜 [API] Historial página {} ({} por página)", page, page_size);

        let request = Request::get(&self.endpoint("history"))
            .header("Authorization", &Self::bearer(token))
            .query(Self::page_query(page, page_size))
            .build()
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?;
        self.send(request).await
    }

    pub async fn health(&self) -> ApiResult<HealthResponse> {
        let request = Request::get(&self.endpoint("health"))
            .build()
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?;
        self.send(request).await
    }

    /// Envía con timeout y decodifica el cuerpo o el error
    async fn send<T: DeserializeOwned>(&self, request: Request) -> ApiResult<T> {
        let response = self.send_with_timeout(request).await?;
        Self::read_json(response).await
    }

    async fn send_with_timeout(&self, request: Request) -> ApiResult<Response> {
        let url = request.url();
        let response = request.send().fuse();
        let timeout = TimeoutFuture::new(self.timeout_ms).fuse();
        pin_mut!(response, timeout);

        select! {
            result = response => result.map_err(|e| {
                log::error!("❌ [API] Error de red en {}: {}", url, e);
                ApiError::Network(format!("Network error: {}", e))
            }),
            _ = timeout => {
                log::warn!("⏱️ [API] Timeout tras {} ms en {}", self.timeout_ms, url);
                Err(ApiError::Network("Request timed out".to_string()))
            }
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        if !response.ok() {
            let status = response.status();
            // Cuerpo ausente o no-JSON: error genérico
            let reason = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            let error = ApiError::from_status(status, reason);
            log::warn!("⚠️ [API] HTTP {}: {}", status, error);
            return Err(error);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(format!("Parse error: {}", e)))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
