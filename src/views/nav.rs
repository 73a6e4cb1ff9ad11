// ============================================================================
// NAV BAR - Marca, enlaces y estado de sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, navigate, ElementBuilder};
use crate::routes::Route;
use crate::state::{AppState, SessionStatus};
use crate::viewmodels::AuthViewModel;

const PUBLIC_LINKS: [Route; 2] = [Route::Home, Route::News];
const PRIVATE_LINKS: [Route; 2] = [Route::Predict, Route::History];

pub fn render_nav(state: &AppState) -> Result<Element, JsValue> {
    let session = state.session.session();
    let current = state.current_route();

    let links = ElementBuilder::new("div")?.class("nav-links").build();
    for route in PUBLIC_LINKS {
        append_child(&links, &nav_link(route, current)?)?;
    }
    if session.status() == SessionStatus::Authenticated {
        for route in PRIVATE_LINKS {
            append_child(&links, &nav_link(route, current)?)?;
        }
    }

    let account = ElementBuilder::new("div")?.class("nav-account").build();
    match (session.status(), session.identity()) {
        (SessionStatus::Authenticated, Some(identity)) => {
            let logout = {
                let viewmodel = AuthViewModel::new(state.session.clone());
                ElementBuilder::new("button")?
                    .class("btn btn-link")
                    .attr("type", "button")?
                    .text("Logout")
                    .on_click(move |_| {
                        log::info!("👋 [NAV] Logout");
                        navigate(viewmodel.logout());
                    })?
                    .build()
            };
            account.append_child(
                &ElementBuilder::new("span")?
                    .class("nav-user")
                    .text(&format!("👤 {}", identity.display_name))
                    .build(),
            )?;
            account.append_child(&logout)?;
        }
        (SessionStatus::Unknown, _) => {}
        _ => {
            append_child(&account, &nav_link(Route::Login, current)?)?;
            append_child(&account, &nav_link(Route::Register, current)?)?;
        }
    }

    Ok(ElementBuilder::new("nav")?
        .class("navbar")
        .child(
            ElementBuilder::new("a")?
                .class("nav-brand")
                .attr("href", Route::Home.to_hash())?
                .text("📈 FinSentiment")
                .build(),
        )?
        .child(links)?
        .child(account)?
        .build())
}

fn nav_link(route: Route, current: Route) -> Result<Element, JsValue> {
    let class = if route == current { "nav-link active" } else { "nav-link" };
    Ok(ElementBuilder::new("a")?
        .class(class)
        .attr("href", route.to_hash())?
        .text(route.title())
        .build())
}
