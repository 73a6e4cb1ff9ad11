// ============================================================================
// REGISTER VIEW - Alta de cuenta nueva
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{navigate, on_input, on_submit, ElementBuilder};
use crate::routes::Route;
use crate::state::AppState;
use crate::viewmodels::{AuthViewModel, RegistrationForm};
use crate::views::auth_form::{set_pending, show_form_error};
use crate::views::login::switch_link;
use crate::views::shared::render_field;

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [REGISTER] render_register()");
    let viewmodel = AuthViewModel::new(state.session.clone());
    let form_state = Rc::new(RefCell::new(RegistrationForm::default()));
    let pending = Rc::new(RefCell::new(false));

    let (name_field, name_input) = render_field("Full name", "text", "register-name", "Ana García")?;
    let (email_field, email_input) = render_field("Email", "email", "register-email", "you@example.com")?;
    let (password_field, password_input) = render_field("Password", "password", "register-password", "••••••••")?;
    let (confirm_field, confirm_input) =
        render_field("Confirm password", "password", "register-confirm", "••••••••")?;
    password_input.set_attribute("autocomplete", "new-password")?;
    confirm_input.set_attribute("autocomplete", "new-password")?;

    {
        let form_state = Rc::clone(&form_state);
        on_input(&name_input, move |value| form_state.borrow_mut().display_name = value)?;
    }
    {
        let form_state = Rc::clone(&form_state);
        on_input(&email_input, move |value| form_state.borrow_mut().email = value)?;
    }
    {
        let form_state = Rc::clone(&form_state);
        on_input(&password_input, move |value| form_state.borrow_mut().password = value)?;
    }
    {
        let form_state = Rc::clone(&form_state);
        on_input(&confirm_input, move |value| form_state.borrow_mut().confirm_password = value)?;
    }

    let error_box = ElementBuilder::new("div")?.class("form-error").build();
    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary btn-block")
        .attr("type", "submit")?
        .text("Create account")
        .build();

    let form = ElementBuilder::new("form")?
        .class("auth-form")
        .child(name_field)?
        .child(email_field)?
        .child(password_field)?
        .child(confirm_field)?
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
        set_pending(&submit, true, "Creating account...", "Create account");
        show_form_error(&error_box, None);

        spawn_local(async move {
            let outcome = viewmodel.submit_registration(form).await;
            *pending.borrow_mut() = false;
            set_pending(&submit, false, "Creating account...", "Create account");
            match outcome {
                Ok(identity) => {
                    log::info!("✅ [REGISTER] Cuenta creada para {}", identity.email);
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
                .child(ElementBuilder::new("h1")?.text("Create your account").build())?
                .child(ElementBuilder::new("p")?.class("subtitle").text("Start tracking market sentiment").build())?
                .child(form)?
                .child(switch_link("Already have an account?", "Login", Route::Login)?)?
                .build(),
        )?
        .build())
}
