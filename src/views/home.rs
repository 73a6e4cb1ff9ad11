// ============================================================================
// HOME VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::routes::Route;
use crate::state::AppState;

struct Feature {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    route: Route,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🔮",
        title: "Predict",
        blurb: "Classify any financial text as positive, negative or neutral.",
        route: Route::Predict,
    },
    Feature {
        icon: "📰",
        title: "News",
        blurb: "Browse the latest market headlines with their sentiment.",
        route: Route::News,
    },
    Feature {
        icon: "📜",
        title: "History",
        blurb: "Review every prediction you have made.",
        route: Route::History,
    },
];

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let greeting = match state.session.identity() {
        Some(identity) => format!("Welcome back, {}!", identity.display_name),
        None => "Financial Sentiment Analysis".to_string(),
    };

    let grid = ElementBuilder::new("div")?.class("feature-grid").build();
    for feature in &FEATURES {
        let card = ElementBuilder::new("a")?
            .class("card feature-card")
            .attr("href", feature.route.to_hash())?
            .child(ElementBuilder::new("div")?.class("feature-icon").text(feature.icon).build())?
            .child(ElementBuilder::new("h3")?.text(feature.title).build())?
            .child(ElementBuilder::new("p")?.text(feature.blurb).build())?
            .build();
        if feature.route.is_protected() && !state.session.is_authenticated() {
            card.class_list().add_1("requires-login")?;
            card.set_attribute("title", "Login required")?;
        }
        grid.append_child(&card)?;
    }

    Ok(ElementBuilder::new("section")?
        .class("page home-page")
        .child(
            ElementBuilder::new("div")?
                .class("hero")
                .child(ElementBuilder::new("h1")?.text(&greeting).build())?
                .child(
                    ElementBuilder::new("p")?
                        .class("subtitle")
                        .text("Understand the mood of the market in seconds.")
                        .build(),
                )?
                .build(),
        )?
        .child(grid)?
        .build())
}
