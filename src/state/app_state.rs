// ============================================================================
// APP STATE - Contexto explícito que reciben todas las vistas
// ============================================================================

use std::rc::Rc;

use crate::config::CONFIG;
use crate::models::{HistoryItem, NewsItem};
use crate::routes::Route;
use crate::services::{ApiClient, HistorySource, NewsSource};
use crate::state::paged_list::PagedListController;
use crate::state::reactivity::ReactiveState;
use crate::state::session_store::SessionStore;
use crate::utils::{KeyValueStore, LocalStorage, MemoryStorage};

#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub session: SessionStore,
    pub route: ReactiveState<Route>,
}

impl AppState {
    /// Estado de producción: ApiClient real + localStorage
    pub fn new() -> Self {
        let api = ApiClient::new();
        let storage: Rc<dyn KeyValueStore> = if LocalStorage::is_available() {
            Rc::new(LocalStorage)
        } else {
            log::warn!("⚠️ [APP] localStorage no disponible, la sesión no sobrevivirá a recargas");
            Rc::new(MemoryStorage::new())
        };
        let session = SessionStore::new(Rc::new(api.clone()), storage);
        Self::with_parts(api, session)
    }

    pub fn with_parts(api: ApiClient, session: SessionStore) -> Self {
        Self {
            api,
            session,
            route: ReactiveState::new(Route::Home),
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.get()
    }

    /// Controller nuevo por cada montaje de la vista de noticias
    pub fn news_controller(&self) -> PagedListController<NewsItem> {
        PagedListController::new(Rc::new(NewsSource::new(self.api.clone())), CONFIG.page_size)
            .with_window_size(CONFIG.page_window_size)
    }

    pub fn history_controller(&self) -> PagedListController<HistoryItem> {
        let source = HistorySource::new(self.api.clone(), self.session.clone());
        PagedListController::new(Rc::new(source), CONFIG.page_size)
            .with_window_size(CONFIG.page_window_size)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
