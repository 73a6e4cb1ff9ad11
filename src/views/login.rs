// ============================================================================
// LOGIN VIEW - Formulario de inicio de sesión
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{navigate, on_input, on_submit, ElementBuilder};
use crate::routes::Route;
use crate::state::AppState;
use crate::viewmodels::{AuthViewModel, LoginForm};
use crate::views::auth_form::{set_pending, show_form_error};
use crate::views::shared::render_field;

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");
    let viewmodel = AuthViewModel::new(state.session.clone());
    let form_state = Rc::new(RefCell::new(LoginForm::default()));
    let pending = Rc::new(RefCell::new(false));

    let (email_field, email_input) = render_field("Email", "email", "login-email", "you@example.com")?;
    let (password_field, password_input) = render_field("Password", "password", "login-password", "••••••••")?;
    email_input.set_attribute("autocomplete", "email")?;
    password_input.set_attribute("autocomplete", "current-password")?;

    {
        let form_state = Rc::clone(&form_state);
        on_input(&email_input, move |value| form_state.borrow_mut().email = value)?;
    }
    {
        let form_state = Rc::clone(&form_state);
        on_input(&password_input, move |value| form_state.borrow_mut().password = value)?;
    }

    let error_box = ElementBuilder::new("div")?.class("form-error").build();
    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary btn-block")
        .attr("type", "submit")?
        .text("Login")
        .build();

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .child(email_field)?
        .child(password_field)?
        .child(error_box.clone())?
        .child(submit.clone())?
        .build();

    on_submit(&form, move || {
        if *pending.borrow() {
            return;
        }
        let form = form_state.borrow().clone();
        let viewmodel = viewmodel.clone();
        let pending = Rc::clone(&pending);
        let submit = submit.clone();
        let error_box = error_box.clone();

        *pending.borrow_mut() = true;
        set_pending(&submit, true, "Logging in...", "Login");
        show_form_error(&error_box, None);

        spawn_local(async move {
            let outcome = viewmodel.submit_login(form).await;
            *pending.borrow_mut() = false;
            set_pending(&submit, false, "Logging in...", "Login");
            match outcome {
                Ok(identity) => {
                    log::info!("✅ [LOGIN] Bienvenido, {}", identity.display_name);
                    navigate(Route::Home);
                }
                Err(e) => show_form_error(&error_box, Some(&e.message())),
            }
        });
    })?;

    Ok(ElementBuilder::new("section")?
        .class("page auth-page")
        .child(
            ElementBuilder::new("div")?
                .class("card auth-card")
                .child(ElementBuilder::new("h1")?.text("Welcome back").build())?
                .child(ElementBuilder::new("p")?.class("subtitle").text("Log in to analyze financial text").build())?
                .child(form)?
                .child(switch_link("Don't have an account?", "Register", Route::Register)?)?
                .build(),
        )?
        .build())
}

pub(crate) fn switch_link(prompt: &str, label: &str, target: Route) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?
        .class("auth-switch")
        .text(&format!("{} ", prompt))
        .child(
            ElementBuilder::new("a")?
                .attr("href", target.to_hash())?
                .text(label)
                .build(),
        )?
        .build())
}
