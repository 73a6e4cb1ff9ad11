// ============================================================================
// HISTORY VIEW - Predicciones anteriores del usuario (protegida)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, navigate, ElementBuilder};
use crate::models::HistoryItem;
use crate::routes::Route;
use crate::state::AppState;
use crate::utils::{format_date, truncate};
use crate::views::pagination::{mount_paged_list, spawn_load};
use crate::views::shared::{render_page_header, render_sentiment_badge};

const TEXT_PREVIEW_CHARS: usize = 120;
const COLUMNS: [&str; 4] = ["ID", "Text", "Sentiment", "Date"];

/// Celdas de texto de una fila (el sentimiento va como badge)
#[derive(Debug, PartialEq)]
struct RowCells {
    id: String,
    text: String,
    date: String,
}

impl RowCells {
    fn of(item: &HistoryItem) -> Self {
        Self {
            id: format!("#{}", item.id),
            text: truncate(&item.text, TEXT_PREVIEW_CHARS),
            date: format_date(&item.timestamp),
        }
    }
}

pub fn render_history(state: &AppState) -> Result<Element, JsValue> {
    log::info!("📜 [HISTORY] Montando historial");
    let controller = state.history_controller();
    let session = state.session.clone();

    let body = ElementBuilder::new("div")?.class("list-body").build();

    let refresh = {
        let weak = controller.downgrade();
        let session = session.clone();
        ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .attr("type", "button")?
            .text("🔄 Refresh")
            .on_click(move |_| {
                if let Some(controller) = weak.upgrade() {
                    spawn_load(controller.refresh(), Some(session.clone()));
                }
            })?
            .build()
    };

    let new_prediction = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "button")?
        .text("✨ New prediction")
        .on_click(|_| navigate(Route::Predict))?
        .build();

    let page = ElementBuilder::new("section")?
        .class("page history-page")
        .child(render_page_header("Prediction History", Some("Everything you have analyzed so far"))?)?
        .child(
            ElementBuilder::new("div")?
                .class("toolbar")
                .child(refresh)?
                .child(new_prediction)?
                .build(),
        )?
        .child(body.clone())?
        .build();

    mount_paged_list(
        &controller,
        &body,
        "No predictions yet. Analyze some text to see it here.",
        Some(session.clone()),
        render_history_table,
    )?;
    let page_size = controller.page_size();
    spawn_load(controller.load(1, page_size), Some(session));

    Ok(page)
}

fn render_history_table(items: &[HistoryItem]) -> Result<Element, JsValue> {
    let head = ElementBuilder::new("thead")?
        .child(
            ElementBuilder::new("tr")?
                .children(
                    COLUMNS
                        .into_iter()
                        .map(|label| ElementBuilder::new("th").map(|th| th.text(label).build()))
                        .collect::<Result<Vec<_>, _>>()?,
                )?
                .build(),
        )?
        .build();

    let body = ElementBuilder::new("tbody")?.build();
    for item in items {
        append_child(&body, &render_history_row(item)?)?;
    }

    Ok(ElementBuilder::new("table")?
        .class("history-table")
        .child(head)?
        .child(body)?
        .build())
}

fn render_history_row(item: &HistoryItem) -> Result<Element, JsValue> {
    let cells = RowCells::of(item);
    Ok(ElementBuilder::new("tr")?
        .child(ElementBuilder::new("td")?.class("history-id").text(&cells.id).build())?
        .child(
            ElementBuilder::new("td")?
                .class("history-text")
                .attr("title", &item.text)?
                .text(&cells.text)
                .build(),
        )?
        .child(ElementBuilder::new("td")?.child(render_sentiment_badge(item.sentiment)?)?.build())?
        .child(ElementBuilder::new("td")?.class("history-date").text(&cells.date).build())?
        .build())
}
