use serde::{Deserialize, Serialize};

/// Usuario autenticado (el backend lo llama "user")
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Identity {
    pub id: i64,
    pub email: String,
    #[serde(rename = "fullname")]
    pub display_name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    #[serde(rename = "fullname")]
    pub display_name: String,
    pub email: String,
    pub password: String,
}

/// Respuesta de /auth/login y /auth/register
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    #[serde(rename = "user")]
    pub identity: Identity,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProfileResponse {
    pub user: Identity,
}

/// Cuerpo de error de cualquier endpoint
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}
