//! Static pages: the band form, about and contact.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use ohm_core::{BandColor, BAND_COUNT};

use crate::views;
use crate::AppState;

/// Text shown on the about page.
pub const ABOUT_MESSAGE: &str = "Calculates the resistance of a resistor from its color bands.";

/// Text shown on the contact page.
pub const CONTACT_MESSAGE: &str = "Wait for the 24th century.";

/// Band form with every band unselected.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(views::index_page(
        &state.config.site.title,
        [BandColor::None; BAND_COUNT],
    ))
}

pub async fn about(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(views::message_page(&state.config.site.title, "About", ABOUT_MESSAGE))
}

pub async fn contact(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(views::message_page(&state.config.site.title, "Contact", CONTACT_MESSAGE))
}
