// ============================================================================
// SHARED VIEWS - Piezas reutilizadas por varias pantallas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::{Sentiment, SentimentTally};

pub fn render_loading(message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("loading-state")
        .child(ElementBuilder::new("div")?.class("spinner").build())?
        .child(ElementBuilder::new("p")?.text(message).build())?
        .build())
}

pub fn render_error(message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("error-banner")
        .attr("role", "alert")?
        .text(&format!("⚠️ {}", message))
        .build())
}

pub fn render_empty(message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("empty-state")
        .child(ElementBuilder::new("p")?.text(message).build())?
        .build())
}

pub fn render_sentiment_badge(sentiment: Sentiment) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("span")?
        .class(&sentiment.badge_class())
        .attr(
            "style",
            &format!("color: {}; background: {};", sentiment.color(), sentiment.bg_color()),
        )?
        .text(&format!("{} {}", sentiment.emoji(), sentiment.label()))
        .build())
}

/// Resumen "😊 3 · 😔 1 · 😐 2" de la página visible
pub fn render_tally(tally: &SentimentTally) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("sentiment-tally").build();
    for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
        let chip = ElementBuilder::new("span")?
            .class(&format!("tally-chip tally-{}", sentiment.as_str()))
            .attr("title", sentiment.label())?
            .text(&format!("{} {}", sentiment.emoji(), tally.count(sentiment)))
            .build();
        container.append_child(&chip)?;
    }
    Ok(container)
}

/// Campo de formulario etiquetado. Devuelve (contenedor, input).
pub fn render_field(
    label: &str,
    input_type: &str,
    id: &str,
    placeholder: &str,
) -> Result<(Element, Element), JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .id(id)?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .build();
    let field = ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", id)?.text(label).build())?
        .child(input.clone())?
        .build();
    Ok((field, input))
}

/// Cabecera de página con título y subtítulo opcional
pub fn render_page_header(title: &str, subtitle: Option<&str>) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("page-header")
        .child(ElementBuilder::new("h1")?.text(title).build())?
        .build();
    if let Some(subtitle) = subtitle {
        header.append_child(&ElementBuilder::new("p")?.class("subtitle").text(subtitle).build())?;
    }
    Ok(header)
}
