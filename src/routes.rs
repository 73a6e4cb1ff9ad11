// ============================================================================
// ROUTES - Rutas por hash (#/news) y guard de vistas protegidas
// ============================================================================

use crate::state::session_store::SessionStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Predict,
    News,
    History,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::Predict,
        Route::News,
        Route::History,
    ];

    /// "#/news", "/news" o "news"; cualquier otra cosa es Home
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.split(['?', '/']).next().unwrap_or_default();
        match path {
            "login" => Route::Login,
            "register" => Route::Register,
            "predict" => Route::Predict,
            "news" => Route::News,
            "history" => Route::History,
            _ => Route::Home,
        }
    }

    pub fn to_hash(&self) -> &'static str {
        match self {
            Route::Home => "#/",
            Route::Login => "#/login",
            Route::Register => "#/register",
            Route::Predict => "#/predict",
            Route::News => "#/news",
            Route::History => "#/history",
        }
    }

    /// Requiere sesión autenticada
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Predict | Route::History)
    }

    /// Destino tras cerrar sesión o perderla (logout, token rechazado, guard)
    pub fn after_logout() -> Route {
        Route::Login
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Register => "Register",
            Route::Predict => "Predict",
            Route::News => "News",
            Route::History => "History",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Sesión aún sin restaurar: placeholder, sin redirigir
    Loading,
    Redirect(Route),
    Render,
}

pub fn guard(route: Route, status: SessionStatus) -> GuardDecision {
    if !route.is_protected() {
        return GuardDecision::Render;
    }
    match status {
        SessionStatus::Unknown => GuardDecision::Loading,
        SessionStatus::Anonymous => GuardDecision::Redirect(Route::after_logout()),
        SessionStatus::Authenticated => GuardDecision::Render,
    }
}
