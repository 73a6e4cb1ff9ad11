// ============================================================================
// PREDICT VIEW - Analizar el sentimiento de un texto (protegida)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_children, navigate, on_click, on_input, set_flag, set_text_content, set_value, ElementBuilder};
use crate::models::Prediction;
use crate::routes::Route;
use crate::services::ApiError;
use crate::state::AppState;
use crate::utils::SAMPLE_TEXTS;
use crate::viewmodels::PredictViewModel;
use crate::views::shared::{render_error, render_page_header, render_sentiment_badge};

pub fn render_predict(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🔮 [PREDICT] Montando vista de predicción");
    let viewmodel = PredictViewModel::new(Rc::new(state.api.clone()), state.session.clone());
    let session = state.session.clone();

    let text = Rc::new(RefCell::new(String::new()));
    let pending = Rc::new(RefCell::new(false));

    let textarea = ElementBuilder::new("textarea")?
        .class("form-input predict-input")
        .id("predict-text")?
        .attr("rows", "6")?
        .attr("placeholder", "Paste a headline or a paragraph of financial news...")?
        .build();
    let counter = ElementBuilder::new("span")?.class("char-counter").text("0 characters").build();
    let feedback = ElementBuilder::new("div")?.class("predict-feedback").build();
    let result = ElementBuilder::new("div")?.class("predict-result").build();

    {
        let text = Rc::clone(&text);
        let counter = counter.clone();
        on_input(&textarea, move |value| {
            set_text_content(&counter, &format!("{} characters", value.chars().count()));
            *text.borrow_mut() = value;
        })?;
    }

    let analyze = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "button")?
        .text("Analyze sentiment")
        .build();
    {
        let button = analyze.clone();
        let text = Rc::clone(&text);
        let pending = Rc::clone(&pending);
        let feedback = feedback.clone();
        let result = result.clone();
        on_click(&analyze, move |_| {
            if *pending.borrow() {
                return;
            }
            let input = text.borrow().clone();
            let viewmodel = viewmodel.clone();
            let session = session.clone();
            let button = button.clone();
            let pending = Rc::clone(&pending);
            let feedback = feedback.clone();
            let result = result.clone();

            *pending.borrow_mut() = true;
            set_busy(&button, true);
            clear_children(&feedback);

            spawn_local(async move {
                let outcome = viewmodel.predict(&input).await;
                *pending.borrow_mut() = false;
                set_busy(&button, false);
                match outcome {
                    Ok(prediction) => {
                        clear_children(&result);
                        match render_result(&prediction) {
                            Ok(card) => {
                                let _ = append_child(&result, &card);
                            }
                            Err(e) => log::error!("❌ [PREDICT] Error pintando resultado: {:?}", e),
                        }
                    }
                    Err(ApiError::Auth(reason)) => {
                        log::warn!("🔒 [PREDICT] {}", reason);
                        session.logout();
                        navigate(Route::after_logout());
                    }
                    Err(e) => show_error(&feedback, &e.message()),
                }
            });
        })?;
    }

    let clear = {
        let text = Rc::clone(&text);
        let textarea = textarea.clone();
        let counter = counter.clone();
        let feedback = feedback.clone();
        let result = result.clone();
        ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .attr("type", "button")?
            .text("Clear")
            .on_click(move |_| {
                text.borrow_mut().clear();
                set_value(&textarea, "");
                set_text_content(&counter, "0 characters");
                clear_children(&feedback);
                clear_children(&result);
            })?
            .build()
    };

    let samples = ElementBuilder::new("div")?
        .class("sample-texts")
        .child(ElementBuilder::new("p")?.class("hint").text("Or try one of these:").build())?
        .build();
    for sample in SAMPLE_TEXTS {
        let text = Rc::clone(&text);
        let textarea = textarea.clone();
        let counter = counter.clone();
        let chip = ElementBuilder::new("button")?
            .class("sample-chip")
            .attr("type", "button")?
            .text(sample)
            .on_click(move |_| {
                *text.borrow_mut() = sample.to_string();
                set_value(&textarea, sample);
                set_text_content(&counter, &format!("{} characters", sample.chars().count()));
            })?
            .build();
        samples.append_child(&chip)?;
    }

    Ok(ElementBuilder::new("section")?
        .class("page predict-page")
        .child(render_page_header("Sentiment Analysis", Some("Find out whether a text reads positive, negative or neutral"))?)?
        .child(
            ElementBuilder::new("div")?
                .class("card")
                .child(textarea)?
                .child(counter)?
                .child(
                    ElementBuilder::new("div")?
                        .class("form-actions")
                        .child(analyze)?
                        .child(clear)?
                        .build(),
                )?
                .child(feedback)?
                .child(samples)?
                .build(),
        )?
        .child(result)?
        .build())
}

fn set_busy(button: &Element, busy: bool) {
    let _ = set_flag(button, "disabled", busy);
    set_text_content(button, if busy { "Analyzing..." } else { "Analyze sentiment" });
}

fn show_error(container: &Element, message: &str) {
    clear_children(container);
    match render_error(message) {
        Ok(banner) => {
            let _ = append_child(container, &banner);
        }
        Err(e) => log::error!("❌ [PREDICT] {:?}", e),
    }
}

fn render_result(prediction: &Prediction) -> Result<Element, JsValue> {
    let sentiment = prediction.sentiment;
    Ok(ElementBuilder::new("div")?
        .class(&format!("card result-card result-{}", sentiment.as_str()))
        .attr("style", &format!("border-color: {};", sentiment.color()))?
        .child(ElementBuilder::new("div")?.class("result-emoji").text(sentiment.emoji()).build())?
        .child(render_sentiment_badge(sentiment)?)?
        .child(
            ElementBuilder::new("blockquote")?
                .class("result-text")
                .text(&prediction.text)
                .build(),
        )?
        .build())
}
