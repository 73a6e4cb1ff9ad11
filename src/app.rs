// ============================================================================
// APP - Aplicación principal: rutas + guard + render de la vista activa
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, current_hash, document, get_element_by_id, navigate, ElementBuilder};
use crate::routes::{guard, GuardDecision, Route};
use crate::state::AppState;
use crate::views::pagination::unmount_lists;
use crate::views::{
    render_history, render_home, render_loading, render_login, render_nav, render_news, render_predict,
    render_register,
};

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;
        Ok(Self::with_state(AppState::new(), root))
    }

    pub fn with_state(state: AppState, root: Element) -> Self {
        let status = state.session.restore();
        log::info!("💾 [APP] Sesión restaurada: {:?}", status);
        state.route.set(Route::from_hash(&current_hash()));

        // Varios cambios en el mismo tick → un único re-render
        state.route.subscribe(|_| schedule_rerender());
        state.session.subscribe(|_| schedule_rerender());

        Self { state, root }
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        let route = self.state.current_route();
        let decision = guard(route, self.state.session.status());
        log::debug!("🎬 [APP] render {:?} → {:?}", route, decision);

        unmount_lists();
        clear_children(&self.root);
        append_child(&self.root, &render_nav(&self.state)?)?;

        let content = match decision {
            GuardDecision::Loading => render_loading("Checking your session...")?,
            GuardDecision::Redirect(target) => {
                log::info!("🔒 [APP] {:?} requiere sesión, redirigiendo a {:?}", route, target);
                navigate(target);
                render_loading("Redirecting...")?
            }
            GuardDecision::Render => self.render_route(route)?,
        };

        let main = ElementBuilder::new("main")?.class("container").child(content)?.build();
        append_child(&self.root, &main)?;

        if let Some(doc) = document() {
            doc.set_title(&format!("{} · FinSentiment", route.title()));
        }
        Ok(())
    }

    fn render_route(&self, route: Route) -> Result<Element, JsValue> {
        match route {
            Route::Home => render_home(&self.state),
            Route::Login => render_login(&self.state),
            Route::Register => render_register(&self.state),
            Route::Predict => render_predict(&self.state),
            Route::News => render_news(&self.state),
            Route::History => render_history(&self.state),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// hashchange → nueva ruta (el subscriber programa el re-render)
    pub fn sync_route(&self) {
        let route = Route::from_hash(&current_hash());
        if route != self.state.current_route() {
            self.state.route.set(route);
        }
    }
}

fn schedule_rerender() {
    Timeout::new(0, crate::rerender_app).forget();
}
