// ============================================================================
// NEWS VIEW - Noticias financieras paginadas (pública)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::NewsItem;
use crate::state::AppState;
use crate::utils::{format_date, truncate};
use crate::views::pagination::{mount_paged_list, spawn_load};
use crate::views::shared::{render_page_header, render_sentiment_badge};

const DESCRIPTION_PREVIEW_CHARS: usize = 220;

pub fn render_news(state: &AppState) -> Result<Element, JsValue> {
    log::info!("📰 [NEWS] Montando vista de noticias");
    let controller = state.news_controller();

    let body = ElementBuilder::new("div")?.class("list-body").build();

    let refresh = {
        let weak = controller.downgrade();
        ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .attr("type", "button")?
            .text("🔄 Refresh")
            .on_click(move |_| {
                if let Some(controller) = weak.upgrade() {
                    spawn_load(controller.refresh(), None);
                }
            })?
            .build()
    };

    let page = ElementBuilder::new("section")?
        .class("page news-page")
        .child(render_page_header(
            "Financial News",
            Some("Latest headlines with their predicted sentiment"),
        )?)?
        .child(ElementBuilder::new("div")?.class("toolbar").child(refresh)?.build())?
        .child(body.clone())?
        .build();

    mount_paged_list(&controller, &body, "No news available right now.", None, |items| {
        render_news_cards(items)
    })?;
    let page_size = controller.page_size();
    spawn_load(controller.load(1, page_size), None);

    Ok(page)
}

fn render_news_cards(items: &[NewsItem]) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("news-grid").build();
    for item in items {
        append_child(&grid, &render_news_card(item)?)?;
    }
    Ok(grid)
}

fn render_news_card(item: &NewsItem) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article")?.class("news-card").build();

    if let Some(url) = item.image_url.as_deref().filter(|u| !u.is_empty()) {
        card.append_child(
            &ElementBuilder::new("img")?
                .class("news-image")
                .attr("src", url)?
                .attr("alt", &item.title)?
                .attr("loading", "lazy")?
                .build(),
        )?;
    }

    let title = ElementBuilder::new("a")?
        .class("news-title")
        .attr("href", &item.link)?
        .attr("target", "_blank")?
        .attr("rel", "noopener noreferrer")?
        .text(&item.title)
        .build();

    let meta = ElementBuilder::new("div")?
        .class("news-meta")
        .child(render_sentiment_badge(item.sentiment)?)?
        .child(
            ElementBuilder::new("time")?
                .class("news-date")
                .attr("datetime", &item.pub_date)?
                .text(&format_date(&item.pub_date))
                .build(),
        )?
        .build();

    card.append_child(&meta)?;
    card.append_child(&ElementBuilder::new("h3")?.child(title)?.build())?;

    if let Some(description) = item.description.as_deref().filter(|d| !d.trim().is_empty()) {
        card.append_child(
            &ElementBuilder::new("p")?
                .class("news-description")
                .text(&truncate(description, DESCRIPTION_PREVIEW_CHARS))
                .build(),
        )?;
    }

    Ok(card)
}
