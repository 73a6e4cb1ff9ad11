// ============================================================================
// PAGINATION VIEW - Prev / ventana de páginas / Next + montaje de listas
// ============================================================================

use std::any::Any;
use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_children, navigate, scroll_to_top, ElementBuilder};
use crate::models::{HasSentiment, SentimentTally};
use crate::routes::Route;
use crate::services::ApiError;
use crate::state::{ListState, ListStatus, LoadFuture, LoadOutcome, PagedListController, SessionStore};
use crate::views::shared::{render_empty, render_error, render_loading, render_tally};

thread_local! {
    // Controllers de la vista activa; los closures del DOM solo guardan Weak
    static MOUNTED: RefCell<Vec<Box<dyn Any>>> = RefCell::new(Vec::new());
}

/// Suelta los controllers de la vista anterior. Llamar antes de cada render.
pub fn unmount_lists() {
    let previous = MOUNTED.with(|mounted| std::mem::take(&mut *mounted.borrow_mut()));
    if !previous.is_empty() {
        log::debug!("🧹 [PAGER] {} lista(s) desmontada(s)", previous.len());
    }
}

/// Ejecuta un load en segundo plano. Un error Auth cierra la sesión y manda a login.
pub fn spawn_load(load: LoadFuture, session: Option<SessionStore>) {
    spawn_local(async move {
        match load.await {
            Ok(LoadOutcome::Applied) => {}
            Ok(LoadOutcome::Superseded) => log::debug!("⏭️ [PAGER] Carga reemplazada por otra más reciente"),
            Err(ApiError::Auth(reason)) => {
                log::warn!("🔒 [PAGER] Sesión rechazada por el servidor: {}", reason);
                if let Some(session) = session {
                    session.logout();
                    navigate(Route::after_logout());
                }
            }
            // el estado Errored ya refleja el fallo
            Err(_) => {}
        }
    });
}

pub fn render_pagination<T: Clone + 'static>(
    controller: &PagedListController<T>,
    state: &ListState<T>,
    session: Option<SessionStore>,
) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?
        .class("pagination")
        .attr("aria-label", "Pagination")?
        .build();

    let busy = state.is_loading();
    let target_prev = state.current_page.saturating_sub(1);
    let target_next = state.current_page.saturating_add(1);

    append_child(&nav, &page_button(
        controller,
        "« Prev",
        target_prev,
        busy || !controller.has_previous(),
        false,
        session.clone(),
    )?)?;

    for page in controller.window() {
        append_child(&nav, &page_button(
            controller,
            &page.to_string(),
            page,
            busy,
            page == state.current_page,
            session.clone(),
        )?)?;
    }

    append_child(&nav, &page_button(
        controller,
        "Next »",
        target_next,
        busy || !controller.has_next(),
        false,
        session,
    )?)?;

    Ok(nav)
}

fn page_button<T: Clone + 'static>(
    controller: &PagedListController<T>,
    label: &str,
    target: u32,
    disabled: bool,
    active: bool,
    session: Option<SessionStore>,
) -> Result<Element, JsValue> {
    let class = if active { "page-btn active" } else { "page-btn" };
    let weak = controller.downgrade();
    let button = ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .flag("disabled", disabled)?
        .text(label)
        .on_click(move |_| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            if controller.current_page() == target {
                return;
            }
            if let Some(load) = controller.go_to_page(target) {
                scroll_to_top();
                spawn_load(load, session.clone());
            }
        })?
        .build();
    if active {
        button.set_attribute("aria-current", "page")?;
    }
    Ok(button)
}

/// Conecta un controller con un contenedor: cada cambio de estado re-pinta
/// cargando / error / vacío / tally + items + paginación.
pub fn mount_paged_list<T, F>(
    controller: &PagedListController<T>,
    container: &Element,
    empty_message: &'static str,
    session: Option<SessionStore>,
    render_items: F,
) -> Result<(), JsValue>
where
    T: Clone + HasSentiment + 'static,
    F: Fn(&[T]) -> Result<Element, JsValue> + 'static,
{
    let paint = {
        let weak = controller.downgrade();
        let container = container.clone();
        move |state: &ListState<T>| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            if let Err(e) = paint_list(&controller, &container, state, empty_message, session.clone(), &render_items) {
                log::error!("❌ [PAGER] Error pintando lista: {:?}", e);
            }
        }
    };

    paint(&controller.state());
    controller.subscribe(paint);
    MOUNTED.with(|mounted| mounted.borrow_mut().push(Box::new(controller.clone())));
    Ok(())
}

fn paint_list<T, F>(
    controller: &PagedListController<T>,
    container: &Element,
    state: &ListState<T>,
    empty_message: &str,
    session: Option<SessionStore>,
    render_items: &F,
) -> Result<(), JsValue>
where
    T: Clone + HasSentiment + 'static,
    F: Fn(&[T]) -> Result<Element, JsValue>,
{
    clear_children(container);

    if let Some(error) = &state.error {
        append_child(container, &render_error(error)?)?;
    }

    match state.status {
        ListStatus::Idle => return append_child(container, &render_loading("Loading...")?),
        ListStatus::Loading if state.items.is_empty() => {
            return append_child(container, &render_loading("Loading...")?);
        }
        ListStatus::Loaded if state.items.is_empty() => {
            return append_child(container, &render_empty(empty_message)?);
        }
        ListStatus::Errored if state.items.is_empty() => return Ok(()),
        _ => {}
    }

    let summary = ElementBuilder::new("div")?
        .class("list-summary")
        .child(
            ElementBuilder::new("span")?
                .class("list-count")
                .text(&format!(
                    "Page {} of {} · {} total",
                    state.current_page, state.page_count, state.total_count
                ))
                .build(),
        )?
        .child(render_tally(&SentimentTally::of(&state.items))?)?
        .build();
    append_child(container, &summary)?;

    let items = render_items(&state.items)?;
    if state.is_loading() {
        items.class_list().add_1("is-stale")?;
    }
    append_child(container, &items)?;

    if state.page_count > 1 {
        append_child(container, &render_pagination(controller, state, session)?)?;
    }
    Ok(())
}
