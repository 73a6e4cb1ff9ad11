// ============================================================================
// API ERROR - Un único mensaje mostrable por fallo
// ============================================================================

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transporte: sin conexión, CORS, timeout
    #[error("{0}")]
    Network(String),
    /// Credenciales incorrectas o token ausente/expirado
    #[error("{0}")]
    Auth(String),
    /// Validación en cliente, nunca llega al backend
    #[error("{0}")]
    Validation(String),
    #[error("{reason}")]
    Server { status: u16, reason: String },
    #[error("{0}")]
    Parse(String),
    #[error("{0}")]
    Storage(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Clasifica una respuesta no-2xx. Sin motivo en el cuerpo se usa "HTTP <status>".
    pub fn from_status(status: u16, reason: Option<String>) -> Self {
        let reason = reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status));
        match status {
            401 | 403 => ApiError::Auth(reason),
            _ => ApiError::Server { status, reason },
        }
    }

    pub fn not_authenticated() -> Self {
        ApiError::Auth("You must be logged in".to_string())
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
