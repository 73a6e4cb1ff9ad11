// ============================================================================
// FINSENTIMENT PWA - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que construyen DOM (sin lógica)
// - ViewModels: validación + orquestación
// - Services: SOLO comunicación API
// - State: sesión, listas paginadas y ruta con Rc<RefCell>
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::dom::on_window_event;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 FinSentiment - entorno {} - backend {}",
        CONFIG.environment,
        CONFIG.backend_url
    );
    if !CONFIG.is_production() {
        log::debug!(
            "⚙️ [CONFIG] page_size={} window={} timeout={}s",
            CONFIG.page_size,
            CONFIG.page_window_size,
            CONFIG.network_timeout_seconds
        );
    }

    let mut app = App::new()?;
    app.render()?;
    let state = app.state().clone();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Listener global: se registra una única vez
    on_window_event("hashchange", |_| {
        APP.with(|cell| {
            if let Some(app) = cell.borrow().as_ref() {
                app.sync_route();
            }
        });
    })?;

    spawn_local(async move {
        match state.api.health().await {
            Ok(health) => log::info!("💚 [APP] Backend: {}", health.status),
            Err(e) => log::warn!("⚠️ [APP] Backend no disponible: {}", e),
        }
        if state.session.is_authenticated() {
            match state.session.verify().await {
                Ok(identity) => log::info!("✅ [APP] Sesión verificada para {}", identity.email),
                Err(e) => log::warn!("⚠️ [APP] No se pudo verificar la sesión: {}", e),
            }
        }
    });

    Ok(())
}

/// Re-render completo de la vista activa
pub fn rerender_app() {
    APP.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => {
            if let Some(app) = slot.as_mut() {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            } else {
                log::warn!("⚠️ [RERENDER] App no está inicializada");
            }
        }
        Err(_) => log::warn!("⚠️ [RERENDER] Render en curso, se omite"),
    });
}
